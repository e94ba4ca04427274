use super::*;
use crate::api::{MockWikidataClient, MockWikipediaClient};
use crate::application::config::AppConfig;
use crate::application::session::LiveConfigProvider;
use crate::application::session_mocks::{MockApiProvider, MockInteractiveProvider};
use crate::primitives::{Candidate, EntityKey, GENDER_PROPERTY, ITEM_FEMALE, OCCUPATION_PROPERTY, OccupationLabels};

fn ada_api() -> MockApiProvider {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "ada lovelace",
            Some(Candidate {
                title: "Ada Lovelace".to_string(),
                page_id: 123,
            }),
        )
        .with_wikibase_item(123, Some(EntityKey::from("Q7259")));

    let wikidata = MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7259", OCCUPATION_PROPERTY, &["Q170790"])
        .with_labels(
            "Q170790",
            OccupationLabels {
                feminine: Some("mathématicienne".to_string()),
                generic: Some("mathématicien".to_string()),
            },
        );

    MockApiProvider::new(wikipedia, wikidata)
}

fn config_with_total(total: usize) -> LiveConfigProvider {
    LiveConfigProvider::new(AppConfig {
        total,
        ..AppConfig::default()
    })
}

#[tokio::test]
async fn test_play_quit_consumes_nothing_further() {
    let session = CommandSession::new_with_providers(
        ada_api(),
        config_with_total(50),
        MockInteractiveProvider::with_guesses(&["/quit", "ada lovelace"]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    // The guess after /quit is never consumed and nothing was searched
    assert_eq!(session.interactive().remaining(), 1);
    assert_eq!(session.api().wikipedia.search_call_count(), 0);
}

#[tokio::test]
async fn test_play_blank_input_is_a_noop() {
    let session = CommandSession::new_with_providers(
        ada_api(),
        config_with_total(50),
        MockInteractiveProvider::with_guesses(&["", "   ", "/quit"]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    assert_eq!(session.api().wikipedia.search_call_count(), 0);
}

#[tokio::test]
async fn test_play_win_stops_the_loop() {
    let session = CommandSession::new_with_providers(
        ada_api(),
        config_with_total(1),
        MockInteractiveProvider::with_guesses(&["ada lovelace", "marie curie"]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    // One accepted guess wins the 1-entry game; the second line stays queued
    assert_eq!(session.api().wikipedia.search_call_count(), 1);
    assert_eq!(session.interactive().remaining(), 1);
}

#[tokio::test]
async fn test_play_rejection_keeps_the_session_going() {
    let api = MockApiProvider::new(
        MockWikipediaClient::new().with_search_result("nobody anybody", None),
        MockWikidataClient::new(),
    );
    let session = CommandSession::new_with_providers(
        api,
        config_with_total(50),
        MockInteractiveProvider::with_guesses(&["nobody anybody", "/quit"]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    // The rejected guess was searched, then the loop kept reading
    assert_eq!(session.api().wikipedia.search_call_count(), 1);
    assert_eq!(session.interactive().remaining(), 0);
}

#[tokio::test]
async fn test_play_ends_when_input_is_exhausted() {
    let session = CommandSession::new_with_providers(
        ada_api(),
        config_with_total(50),
        MockInteractiveProvider::with_guesses(&["ada lovelace"]),
    );

    // Input runs dry after one accepted guess; the loop ends cleanly
    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    assert_eq!(session.api().wikipedia.search_call_count(), 1);
}

#[tokio::test]
async fn test_version_command() {
    let session = CommandSession::new_with_providers(
        ada_api(),
        config_with_total(50),
        MockInteractiveProvider::with_guesses(&[]),
    );

    execute_command_with_session(Commands::Version, &session)
        .await
        .unwrap();

    assert_eq!(session.api().wikipedia.search_call_count(), 0);
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
    assert_eq!(format_elapsed(Duration::from_secs(65)), "01:05");
    assert_eq!(format_elapsed(Duration::from_secs(3750)), "62:30");
}
