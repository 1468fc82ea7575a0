//! Rendering system
//! Draws the tutor screen: numbered text, status line, prompt, input and feedback

/// ## render/ Invariants
///
/// - Rendering reads session state only and never mutates it.
/// - Rendering performs no input handling.
/// - The block cursor always sits on the buffer cursor.
/// - Nothing is drawn past the terminal width; display columns come from
///   `unicode-width`.
/// - A frame identical to the last drawn one is skipped. A full redraw is
///   always safe.
use crossterm::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::buffer::Cursor;
use crate::command_line::CommandLine;
use crate::constants::ui::{FOOTER_ROWS, GUTTER_WIDTH};
use crate::error::Result;
use crate::mode::Mode;
use crate::notification::NotificationType;
use crate::session::TutorSession;
use crate::state::Theme;
use crate::term::{Size, TerminalBackend};

const INPUT_MARKER: &str = "> ";
const PROGRESS_CELLS: usize = 10;

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub gutter: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                fg: Color::White,
                bg: Color::Black,
                gutter: Color::DarkGrey,
                cursor_fg: Color::Black,
                cursor_bg: Color::White,
                status_fg: Color::Black,
                status_bg: Color::Grey,
            },
            Theme::Light => Palette {
                fg: Color::Black,
                bg: Color::White,
                gutter: Color::Grey,
                cursor_fg: Color::White,
                cursor_bg: Color::Black,
                status_fg: Color::White,
                status_bg: Color::DarkGrey,
            },
        }
    }

    #[must_use]
    pub fn notification(kind: NotificationType) -> Color {
        match kind {
            NotificationType::Success => Color::Green,
            NotificationType::Error => Color::Red,
            NotificationType::Warning => Color::Yellow,
            NotificationType::Info => Color::Cyan,
        }
    }
}

/// Everything a frame shows. Two equal states draw the same frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameState {
    pub size: Size,
    pub theme: Theme,
    pub lines: Vec<String>,
    pub cursor: Cursor,
    pub mode: Mode,
    pub progress: (usize, usize),
    /// Filled cells of the progress bar
    pub progress_cells: usize,
    pub prompt: String,
    pub pending: String,
    pub last_command: Option<String>,
    pub input: String,
    pub notification: Option<(NotificationType, String)>,
}

impl FrameState {
    #[must_use]
    pub fn capture(size: Size, session: &TutorSession, input: &CommandLine) -> Self {
        let course = session.course();
        FrameState {
            size,
            theme: session.settings().theme,
            lines: session.buffer().lines().to_vec(),
            cursor: session.buffer().cursor(),
            mode: session.mode(),
            progress: course.progress(),
            progress_cells: (course.progress_ratio() * PROGRESS_CELLS as f64).round() as usize,
            prompt: course.current().prompt.to_string(),
            pending: session.pending().to_string(),
            last_command: session.last_command().map(str::to_string),
            input: input.as_str().to_string(),
            notification: session
                .notifications()
                .latest()
                .map(|n| (n.kind, n.message.clone())),
        }
    }

    /// First row below the text area
    fn footer_top(&self) -> u16 {
        self.size.rows.saturating_sub(FOOTER_ROWS)
    }

    fn status_text(&self) -> String {
        let (done, total) = self.progress;
        let bar: String = (0..PROGRESS_CELLS)
            .map(|i| if i < self.progress_cells { '#' } else { '-' })
            .collect();

        let mut status = format!(
            " {} | {} | {done}/{total} [{bar}]",
            self.mode, self.cursor
        );
        if let Some(last) = &self.last_command {
            status.push_str(&format!(" | last: {last}"));
        }
        if !self.pending.is_empty() {
            status.push_str(&format!(" | pending: {}", self.pending));
        }
        status
    }
}

/// Truncate `text` to at most `width` display columns
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// `fit`, then pad with spaces to exactly `width` columns
fn fit_padded(text: &str, width: usize) -> String {
    let mut out = fit(text, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Draws frames and remembers the last one drawn
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<FrameState>,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next `render` to draw even if nothing changed
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw the session. Returns false when the frame was unchanged and skipped.
    pub fn render<T: TerminalBackend>(
        &mut self,
        term: &mut T,
        session: &TutorSession,
        input: &CommandLine,
    ) -> Result<bool> {
        let state = FrameState::capture(term.get_size()?, session, input);
        if self.last.as_ref() == Some(&state) {
            return Ok(false);
        }

        draw(term, &state)?;
        self.last = Some(state);
        Ok(true)
    }
}

fn draw<T: TerminalBackend>(term: &mut T, state: &FrameState) -> Result<()> {
    let palette = Palette::for_theme(state.theme);
    let cols = usize::from(state.size.cols);

    term.hide_cursor()?;
    term.set_background_color(palette.bg)?;
    term.set_foreground_color(palette.fg)?;
    term.clear_screen()?;

    let text_rows = usize::from(state.footer_top());
    for (i, line) in state.lines.iter().enumerate().take(text_rows) {
        let row = i as u16;
        term.move_cursor(row, 0)?;
        term.set_foreground_color(palette.gutter)?;
        let gutter = format!("{:>width$} ", i + 1, width = usize::from(GUTTER_WIDTH) - 1);
        term.write(fit(&gutter, cols).as_bytes())?;
        term.set_foreground_color(palette.fg)?;

        let cursor_col = (state.cursor.line == i + 1).then_some(state.cursor.column);
        draw_line(
            term,
            &palette,
            line,
            cursor_col,
            cols.saturating_sub(usize::from(GUTTER_WIDTH)),
        )?;
    }

    let footer = state.footer_top();
    let row = |offset: u16| footer.checked_add(offset).filter(|r| *r < state.size.rows);

    if let Some(r) = row(0) {
        term.move_cursor(r, 0)?;
        term.set_background_color(palette.status_bg)?;
        term.set_foreground_color(palette.status_fg)?;
        term.write(fit_padded(&state.status_text(), cols).as_bytes())?;
        term.set_background_color(palette.bg)?;
        term.set_foreground_color(palette.fg)?;
    }

    if let Some(r) = row(1) {
        term.move_cursor(r, 0)?;
        let (done, _) = state.progress;
        term.write(fit(&format!("Challenge {done}: {}", state.prompt), cols).as_bytes())?;
    }

    if let Some(r) = row(3) {
        if let Some((kind, message)) = &state.notification {
            term.move_cursor(r, 0)?;
            term.set_foreground_color(Palette::notification(*kind))?;
            term.write(fit(message, cols).as_bytes())?;
            term.set_foreground_color(palette.fg)?;
        }
    }

    if let Some(r) = row(2) {
        term.move_cursor(r, 0)?;
        let line = format!("{INPUT_MARKER}{}", state.input);
        let shown = fit(&line, cols.saturating_sub(1));
        term.write(shown.as_bytes())?;
        term.clear_to_end_of_line()?;
        term.move_cursor(r, shown.width() as u16)?;
    }

    term.reset_colors()?;
    term.show_cursor()?;
    term.flush()
}

/// Write one text line, highlighting the character under a 1-based cursor column.
/// A cursor past the end of the line is drawn as a blank cell.
fn draw_line<T: TerminalBackend>(
    term: &mut T,
    palette: &Palette,
    line: &str,
    cursor_col: Option<usize>,
    width: usize,
) -> Result<()> {
    let Some(column) = cursor_col else {
        return term.write(fit(line, width).as_bytes());
    };
    if width == 0 {
        return Ok(());
    }

    let index = column.saturating_sub(1);
    let mut before: String = line.chars().take(index).collect();
    let short = index.saturating_sub(before.chars().count());
    before.extend(std::iter::repeat(' ').take(short));

    // The last column is kept for the cursor cell
    let shown = fit(&before, width - 1);
    let clamped = shown.chars().count() < index;
    term.write(shown.as_bytes())?;
    let mut used = shown.width();

    let under = match line.chars().nth(index) {
        Some(ch) if !clamped && used + ch.width().unwrap_or(1) <= width => ch,
        _ => ' ',
    };
    term.set_background_color(palette.cursor_bg)?;
    term.set_foreground_color(palette.cursor_fg)?;
    let mut cell = [0u8; 4];
    term.write(under.encode_utf8(&mut cell).as_bytes())?;
    term.set_background_color(palette.bg)?;
    term.set_foreground_color(palette.fg)?;
    used += under.width().unwrap_or(1);

    if clamped {
        return Ok(());
    }
    let after: String = line.chars().skip(index + 1).collect();
    term.write(fit(&after, width.saturating_sub(used)).as_bytes())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
