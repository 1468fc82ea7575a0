use super::*;

#[test]
fn test_motion_from_char() {
    assert_eq!(Motion::from_char('h'), Some(Motion::Left));
    assert_eq!(Motion::from_char('j'), Some(Motion::Down));
    assert_eq!(Motion::from_char('k'), Some(Motion::Up));
    assert_eq!(Motion::from_char('l'), Some(Motion::Right));
    assert_eq!(Motion::from_char('$'), Some(Motion::LineEnd));
    assert_eq!(Motion::from_char('w'), None);
    assert_eq!(Motion::from_char('0'), None);
}

#[test]
fn test_motion_char_is_inverse() {
    for ch in ['h', 'j', 'k', 'l', '$'] {
        let motion = Motion::from_char(ch).unwrap();
        assert_eq!(motion.as_char(), ch);
    }
}
