use ::crossterm::style::Color;

use super::*;
use crate::test_utils::MockTerminal;

fn paint<T: TerminalBackend>(term: &mut T, fg: Color, bg: Color) -> Result<()> {
    term.set_foreground_color(fg)?;
    term.set_background_color(bg)?;
    term.reset_colors()
}

#[test]
fn test_backend_takes_crossterm_colors() {
    let mut term = MockTerminal::new(10, 40);
    paint(&mut term, Color::Red, Color::Rgb { r: 1, g: 2, b: 3 }).unwrap();

    assert_eq!(term.foreground_colors, vec![Color::Red]);
    assert_eq!(term.background_colors, vec![Color::Rgb { r: 1, g: 2, b: 3 }]);
}

#[test]
fn test_backend_reports_size() {
    let term = MockTerminal::new(10, 40);
    assert_eq!(term.get_size().unwrap(), Size { rows: 10, cols: 40 });
}
