use super::*;

#[test]
fn test_networking_manager_rejects_zero_timeout() {
    let result = NetworkingManager::new(NetworkingConfig { timeout_seconds: 0 });
    assert!(matches!(
        result,
        Err(NetworkingError::InvalidTimeout { seconds: 0 })
    ));
}

#[test]
fn test_networking_manager_default_config() {
    let config = NetworkingConfig::default();
    assert_eq!(config.timeout_seconds, 30);
    assert!(NetworkingManager::new(config).is_ok());
}

#[test]
fn test_guess_gate_single_flight() {
    let gate = GuessGate::new();
    assert!(!gate.is_busy());

    let permit = gate.try_begin().expect("gate should be open");
    assert!(gate.is_busy());

    // A second submission while a validation is pending is refused
    assert!(gate.try_begin().is_none());

    drop(permit);
    assert!(!gate.is_busy());
    assert!(gate.try_begin().is_some());
}
