use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(255), LogLevel::Trace);
}

#[test]
fn test_log_level_should_log() {
    assert!(LogLevel::Error.should_log(LogLevel::Error));
    assert!(LogLevel::Error.should_log(LogLevel::Trace));
    assert!(!LogLevel::Trace.should_log(LogLevel::Error));
}

#[test]
fn test_log_level_fromstr_aliases() {
    assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("err".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("loud".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_format_fromstr() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_color_intent_fromstr() {
    assert_eq!("auto".parse::<ColorIntent>().unwrap(), ColorIntent::Auto);
    assert_eq!("on".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
    assert_eq!("off".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_occupation_labels_precedence() {
    let both = OccupationLabels {
        feminine: Some("mathématicienne".to_string()),
        generic: Some("mathématicien".to_string()),
    };
    assert_eq!(both.preferred(), Some("mathématicienne"));

    let generic_only = OccupationLabels {
        feminine: None,
        generic: Some("mathématicien".to_string()),
    };
    assert_eq!(generic_only.preferred(), Some("mathématicien"));

    assert_eq!(OccupationLabels::default().preferred(), None);
}

#[test]
fn test_entity_key_display() {
    let key = EntityKey::from("Q7259");
    assert_eq!(key.to_string(), "Q7259");
    assert_eq!(key.as_str(), "Q7259");
}
