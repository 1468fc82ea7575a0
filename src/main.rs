//! Rift Tutor - learn modal editing motions in the terminal
//! Main entry point

use std::sync::Once;

use anyhow::{Context, Result};
use rift_tutor::app::Tutor;
use rift_tutor::constants::logging::{DEFAULT_FILTER, ENV_FILTER, LOG_FILE};
use rift_tutor::course::Course;
use rift_tutor::session::TutorSession;
use rift_tutor::state::TutorSettings;
use rift_tutor::term::crossterm::CrosstermBackend;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log to a file in the temp directory; the terminal belongs to the UI.
fn configure_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|()| guard)
}

/// Leave raw mode before the default hook prints, so the message is readable
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(
                std::io::stdout(),
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show
            );
            tracing::error!(target: "app", %info, "panic");
            default_panic(info);
        }));
    });
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();

    let course = Course::new(rift_tutor::challenge::CHALLENGES.to_vec())
        .context("Failed to build the course")?;
    let session = TutorSession::new(course, TutorSettings::default());
    tracing::info!(target: "app", challenges = session.course().len(), "starting");

    let mut tutor = Tutor::new(CrosstermBackend::new(), session)
        .context("Failed to initialize terminal")?;
    tutor.run().context("Tutor error")?;
    Ok(())
}
