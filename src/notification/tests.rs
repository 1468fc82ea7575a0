use super::*;

#[test]
fn test_notification_creation() {
    let n = Notification::new(1, NotificationType::Info, "Use '$'", None);
    assert_eq!(n.id, 1);
    assert_eq!(n.message, "Use '$'");
    assert!(n.ttl.is_none());
    assert!(!n.is_expired(Instant::now() + Duration::from_secs(3600)));
}

#[test]
fn test_manager_convenience_methods() {
    let mut manager = NotificationManager::new();
    manager.info("hint");
    manager.warn("careful");
    manager.error("Incorrect. Try again!");
    manager.success("Correct!");

    let kinds: Vec<_> = manager.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationType::Info,
            NotificationType::Warning,
            NotificationType::Error,
            NotificationType::Success
        ]
    );
    assert_eq!(manager.latest().map(|n| n.message.as_str()), Some("Correct!"));
}

#[test]
fn test_ids_increase() {
    let mut manager = NotificationManager::new();
    let a = manager.info("a");
    let b = manager.info("b");
    assert!(b > a);
}

#[test]
fn test_prune_expired() {
    let mut manager = NotificationManager::new();
    manager.add(NotificationType::Info, "short", Some(Duration::from_millis(10)));
    manager.add(NotificationType::Info, "sticky", None);
    let gen = manager.generation;

    manager.prune_expired_at(Instant::now() + Duration::from_secs(1));

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.latest().map(|n| n.message.as_str()), Some("sticky"));
    assert!(manager.generation > gen);
}

#[test]
fn test_remove_and_clear() {
    let mut manager = NotificationManager::new();
    let id = manager.info("first");
    manager.info("second");

    manager.remove(id);
    assert_eq!(manager.len(), 1);

    let gen = manager.generation;
    manager.clear_all();
    assert!(manager.is_empty());
    assert_eq!(manager.generation, gen + 1);

    // clearing an empty queue is not a change
    manager.clear_all();
    assert_eq!(manager.generation, gen + 1);
}

#[test]
fn test_severity_conversion() {
    assert_eq!(
        NotificationType::from(ErrorSeverity::Critical),
        NotificationType::Error
    );
    assert_eq!(
        NotificationType::from(ErrorSeverity::Warning),
        NotificationType::Warning
    );
}
