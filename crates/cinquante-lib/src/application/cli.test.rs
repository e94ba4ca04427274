use super::*;

#[test]
fn test_parse_play_with_flags() {
    let cli = Cli::try_parse_from([
        "cinquante",
        "--language",
        "en",
        "-n",
        "10",
        "play",
    ])
    .unwrap();

    assert_eq!(cli.config.language, "en");
    assert_eq!(cli.config.total, 10);
    assert!(matches!(cli.command, Some(Commands::Play)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["cinquante"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.config.language, "fr");
}

#[test]
fn test_parse_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["cinquante", "--frobnicate"]).is_err());
}

#[test]
fn test_requires_network() {
    assert!(Commands::Play.requires_network());
    assert!(!Commands::Version.requires_network());
}
