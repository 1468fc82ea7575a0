//! Tests for tutor settings

use std::time::Duration;

use crate::state::{Theme, TutorSettings};

#[test]
fn test_settings_default() {
    let settings = TutorSettings::default();
    assert!(!settings.reset_on_invalid);
    assert_eq!(settings.feedback_delay_ms, 1500);
    assert_eq!(settings.autohint, 0);
    assert_eq!(settings.theme, Theme::Dark);
}

#[test]
fn test_feedback_delay_duration() {
    let settings = TutorSettings {
        feedback_delay_ms: 250,
        ..TutorSettings::default()
    };
    assert_eq!(settings.feedback_delay(), Duration::from_millis(250));
}

#[test]
fn test_theme_toggle_and_names() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);

    for name in Theme::NAMES {
        let theme = Theme::from_name(name).unwrap();
        assert_eq!(theme.to_string(), *name);
    }
    assert_eq!(Theme::from_name("solarized"), None);
}
