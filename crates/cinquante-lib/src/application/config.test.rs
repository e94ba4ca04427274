use super::*;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.language, "fr");
    assert_eq!(config.total, 50);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.log_level, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig::default();
    let overrides = AppConfig {
        language: "en".to_string(),
        total: 10,
        ..AppConfig::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.language, "en");
    assert_eq!(merged.total, 10);
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_keeps_base_for_default_values() {
    let base = AppConfig {
        total: 25,
        ..AppConfig::default()
    };

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.total, 25);
}

#[test]
fn test_validate_rejects_zero_total() {
    let config = AppConfig {
        total: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_bad_language() {
    for language in ["", "fr wiki", "fr/en", "../evil"] {
        let config = AppConfig {
            language: language.to_string(),
            ..AppConfig::default()
        };
        assert!(
            config.validate().is_err(),
            "language {language:?} should be rejected"
        );
    }

    // Hyphenated editions are real (e.g. zh-yue)
    let config = AppConfig {
        language: "zh-yue".to_string(),
        ..AppConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_to_logger_config() {
    let config = AppConfig {
        log_level: 2,
        ..AppConfig::default()
    };
    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Info);
    assert_eq!(logger_config.format, LogFormat::Text);
    assert_eq!(logger_config.output, LogOutput::Stderr);
}
