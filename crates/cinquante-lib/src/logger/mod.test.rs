use super::*;

fn test_config() -> LoggerConfig {
    LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: ColorIntent::Never,
    }
}

// Initialization is global per process, so both outcomes are exercised in
// one test: the first call either wins or finds another subscriber already
// installed, and the second call must fail either way.
#[test]
fn test_init_is_single_shot() {
    let first = Logger::init(test_config());

    if first.is_ok() {
        assert!(Logger::is_initialized());
        assert!(Logger::global().is_some());
    }

    let second = Logger::init(test_config());
    assert!(matches!(
        second,
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. })
    ));
}
