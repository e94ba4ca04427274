use super::*;

fn empty_env() -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: None,
        force_color: None,
        clicolor: None,
        ci: None,
    }
}

#[test]
fn test_no_env_keeps_intent() {
    assert_eq!(
        empty_env().apply_color_config(ColorIntent::Auto),
        ColorIntent::Auto
    );
    assert_eq!(
        empty_env().apply_color_config(ColorIntent::Always),
        ColorIntent::Always
    );
}

#[test]
fn test_ci_disables_color() {
    let env = EnvironmentConfig {
        ci: Some("true".to_string()),
        ..empty_env()
    };
    assert_eq!(
        env.apply_color_config(ColorIntent::Always),
        ColorIntent::Never
    );
}

#[test]
fn test_no_color_disables() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..empty_env()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);

    // Empty NO_COLOR is ignored
    let env = EnvironmentConfig {
        no_color: Some(String::new()),
        ..empty_env()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        force_color: Some("1".to_string()),
        ..empty_env()
    };
    assert_eq!(
        env.apply_color_config(ColorIntent::Auto),
        ColorIntent::Always
    );
}

#[test]
fn test_clicolor_zero_disables() {
    let env = EnvironmentConfig {
        clicolor: Some("0".to_string()),
        ..empty_env()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}
