use super::*;

fn keys(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_register_and_lookup() {
    let mut map = KeyMap::new();
    map.register(KeyContext::Normal, 'G', Command::JumpBottom);

    assert_eq!(
        map.lookup(KeyContext::Normal, &['G']),
        MatchResult::Exact(&Command::JumpBottom)
    );
    assert_eq!(map.lookup(KeyContext::Normal, &['g']), MatchResult::None);
}

#[test]
fn test_sequence_prefix_and_exact() {
    let mut map = KeyMap::new();
    map.register_str(KeyContext::Normal, "gg", Command::JumpTop);

    assert_eq!(map.lookup(KeyContext::Normal, &keys("g")), MatchResult::Prefix);
    assert_eq!(
        map.lookup(KeyContext::Normal, &keys("gg")),
        MatchResult::Exact(&Command::JumpTop)
    );
    assert_eq!(map.lookup(KeyContext::Normal, &keys("ggg")), MatchResult::None);
    assert_eq!(map.lookup(KeyContext::Normal, &keys("gx")), MatchResult::None);
}

#[test]
fn test_empty_sequence_on_populated_trie_is_prefix() {
    let map = KeyMap::tutor_defaults();
    assert_eq!(map.lookup_in(KeyContext::Normal, &[]), MatchResult::Prefix);
    assert_eq!(map.lookup_in(KeyContext::Insert, &[]), MatchResult::None);
}

#[test]
fn test_ambiguous_when_binding_is_also_prefix() {
    let mut map = KeyMap::new();
    map.register(KeyContext::Normal, 'd', Command::DeleteWord);
    map.register_str(KeyContext::Normal, "dw", Command::DeleteWord);

    assert_eq!(
        map.lookup(KeyContext::Normal, &['d']),
        MatchResult::Ambiguous(&Command::DeleteWord)
    );
}

#[test]
fn test_global_fallback() {
    let map = KeyMap::tutor_defaults();

    assert_eq!(
        map.lookup(KeyContext::Insert, &['i']),
        MatchResult::Exact(&Command::EnterInsertMode)
    );
    assert_eq!(
        map.lookup(KeyContext::Normal, &['i']),
        MatchResult::Exact(&Command::EnterInsertMode)
    );
    // normal bindings don't leak into insert
    assert_eq!(map.lookup(KeyContext::Insert, &keys("dw")), MatchResult::None);
}

#[test]
fn test_tutor_defaults() {
    let map = KeyMap::tutor_defaults();

    assert_eq!(
        map.lookup(KeyContext::Normal, &['$']),
        MatchResult::Exact(&Command::motion(Motion::LineEnd))
    );
    assert_eq!(
        map.lookup(KeyContext::Normal, &['j']),
        MatchResult::Exact(&Command::motion(Motion::Down))
    );
    assert_eq!(
        map.lookup(KeyContext::Normal, &keys("cw")),
        MatchResult::Exact(&Command::ChangeWord)
    );
    assert_eq!(
        map.lookup(KeyContext::Normal, &keys("dw")),
        MatchResult::Exact(&Command::DeleteWord)
    );
    assert_eq!(map.lookup(KeyContext::Normal, &keys("c")), MatchResult::Prefix);
    assert_eq!(map.lookup(KeyContext::Normal, &keys("x")), MatchResult::None);
}
