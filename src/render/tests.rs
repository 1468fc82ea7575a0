use super::*;
use crate::constants::feedback::CORRECT;
use crate::course::Course;
use crate::state::TutorSettings;
use crate::test_utils::MockTerminal;

fn session() -> TutorSession {
    TutorSession::new(
        Course::default(),
        TutorSettings {
            feedback_delay_ms: 0,
            ..TutorSettings::default()
        },
    )
}

#[test]
fn test_fit_respects_display_width() {
    assert_eq!(fit("hello", 3), "hel");
    assert_eq!(fit("hello", 10), "hello");
    // Each of these takes two columns
    assert_eq!(fit("日本語", 4), "日本");
    assert_eq!(fit("日本語", 5), "日本");
    assert_eq!(fit("", 5), "");
}

#[test]
fn test_render_first_challenge() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let session = session();

    assert!(renderer.render(&mut term, &session, &CommandLine::new()).unwrap());
    let out = term.get_written_string();

    assert!(out.contains("  1 "));
    assert!(out.contains("  2 "));
    assert!(out.contains("his is a sample line of text."));
    assert!(out.contains("NORMAL | 1:1 | 1/5 [##--------]"));
    assert!(out.contains("Challenge 1: Move to the end of the line"));
    assert_eq!(term.clear_screen_calls, 1);
}

#[test]
fn test_render_highlights_cursor_cell() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let session = session();

    renderer.render(&mut term, &session, &CommandLine::new()).unwrap();

    let palette = Palette::for_theme(Theme::Dark);
    let idx = term
        .writes
        .iter()
        .position(|w| w == b"T")
        .expect("cursor cell written on its own");
    assert_eq!(term.writes[idx + 1], b"his is a sample line of text.");
    assert!(term.background_colors.contains(&palette.cursor_bg));
}

#[test]
fn test_render_skips_unchanged_frame() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let session = session();
    let input = CommandLine::new();

    assert!(renderer.render(&mut term, &session, &input).unwrap());
    assert!(!renderer.render(&mut term, &session, &input).unwrap());

    renderer.invalidate();
    assert!(renderer.render(&mut term, &session, &input).unwrap());
}

#[test]
fn test_render_after_answer_shows_feedback() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let mut session = session();
    let input = CommandLine::new();

    renderer.render(&mut term, &session, &input).unwrap();
    session.submit("$");
    term.clear();

    assert!(renderer.render(&mut term, &session, &input).unwrap());
    let out = term.get_written_string();
    assert!(out.contains(CORRECT));
    assert!(out.contains("2/5"));
    assert!(out.contains("last: $"));
    assert!(term.foreground_colors.contains(&Color::Green));
}

#[test]
fn test_render_places_terminal_cursor_after_input() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let session = session();
    let mut input = CommandLine::new();
    input.push('3');
    input.push('j');

    renderer.render(&mut term, &session, &input).unwrap();

    assert!(term.get_written_string().contains("> 3j"));
    // Input is the third footer row; "> 3j" is four columns wide
    assert_eq!(term.cursor_moves.last(), Some(&(10, 4)));
    assert!(term.cursor_visible);
}

#[test]
fn test_render_light_theme_palette() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let mut session = session();
    session.toggle_theme();

    renderer.render(&mut term, &session, &CommandLine::new()).unwrap();
    assert_eq!(
        term.background_colors.first(),
        Some(&Palette::for_theme(Theme::Light).bg)
    );
}

#[test]
fn test_render_truncates_to_width() {
    let mut term = MockTerminal::new(12, 12);
    let mut renderer = Renderer::new();
    let session = session();

    renderer.render(&mut term, &session, &CommandLine::new()).unwrap();
    // gutter takes 4 columns, leaving 8 for text
    assert!(term.writes.iter().any(|w| w == b"his is "));
    assert!(!term.get_written_string().contains("sample"));
}

#[test]
fn test_render_tiny_terminal_does_not_fail() {
    let mut term = MockTerminal::new(2, 5);
    let mut renderer = Renderer::new();
    let session = session();

    assert!(renderer.render(&mut term, &session, &CommandLine::new()).unwrap());
}

fn single_line_session(text: &'static str) -> TutorSession {
    let challenge = crate::challenge::Challenge {
        prompt: "Practice",
        solution: "never typed",
        hint: "",
        text,
    };
    TutorSession::new(
        Course::new(vec![challenge]).unwrap(),
        TutorSettings::default(),
    )
}

#[test]
fn test_render_cursor_past_line_end() {
    let mut term = MockTerminal::new(12, 80);
    let mut renderer = Renderer::new();
    let mut session = single_line_session("a long first line\nab");
    session.submit("$");
    session.submit("j");
    assert_eq!(session.buffer().cursor(), crate::buffer::Cursor::new(2, 17));

    renderer.render(&mut term, &session, &CommandLine::new()).unwrap();

    let palette = Palette::for_theme(Theme::Dark);
    let padded = format!("ab{}", " ".repeat(14));
    let idx = term
        .writes
        .iter()
        .position(|w| w == padded.as_bytes())
        .expect("short line padded up to the cursor");
    assert_eq!(term.writes[idx + 1], b" ");
    assert!(term.background_colors.contains(&palette.cursor_bg));
}

#[test]
fn test_render_cursor_clamped_to_width() {
    // Four gutter columns leave eight for text
    let mut term = MockTerminal::new(12, 12);
    let mut renderer = Renderer::new();
    let mut session = single_line_session("a long first line\nab");
    session.submit("$");

    renderer.render(&mut term, &session, &CommandLine::new()).unwrap();

    let idx = term
        .writes
        .iter()
        .position(|w| w == b"a long ")
        .expect("text cut one column short of the edge");
    assert_eq!(term.writes[idx + 1], b" ");
    assert!(term
        .background_colors
        .contains(&Palette::for_theme(Theme::Dark).cursor_bg));
}
