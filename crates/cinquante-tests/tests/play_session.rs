//! E2E tests for the interactive game loop
//!
//! The loop runs against scripted providers: a fixed sequence of player
//! inputs and call-counting mock API clients, no terminal and no network.

use cinquante_lib::api::{MockWikidataClient, MockWikipediaClient};
use cinquante_lib::application::cli::Commands;
use cinquante_lib::application::commands::execute_command_with_session;
use cinquante_lib::application::config::AppConfig;
use cinquante_lib::application::session::{CommandSession, LiveConfigProvider};
use cinquante_lib::application::session_mocks::{MockApiProvider, MockInteractiveProvider};
use cinquante_lib::primitives::{
    Candidate, EntityKey, GENDER_PROPERTY, ITEM_FEMALE, OCCUPATION_PROPERTY, OccupationLabels,
};

fn two_women_api() -> MockApiProvider {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "ada lovelace",
            Some(Candidate {
                title: "Ada Lovelace".to_string(),
                page_id: 123,
            }),
        )
        .with_wikibase_item(123, Some(EntityKey::from("Q7259")))
        .with_search_result(
            "curie",
            Some(Candidate {
                title: "Marie Curie".to_string(),
                page_id: 77,
            }),
        )
        .with_search_result(
            "marie curie",
            Some(Candidate {
                title: "Marie Curie".to_string(),
                page_id: 77,
            }),
        )
        .with_wikibase_item(77, Some(EntityKey::from("Q7186")));

    let wikidata = MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7259", OCCUPATION_PROPERTY, &["Q170790"])
        .with_labels(
            "Q170790",
            OccupationLabels {
                feminine: Some("mathématicienne".to_string()),
                generic: Some("mathématicien".to_string()),
            },
        )
        .with_claims("Q7186", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7186", OCCUPATION_PROPERTY, &["Q169470"])
        .with_labels(
            "Q169470",
            OccupationLabels {
                feminine: Some("physicienne".to_string()),
                generic: Some("physicien".to_string()),
            },
        );

    MockApiProvider::new(wikipedia, wikidata)
}

#[tokio::test]
async fn e2e_full_game_with_rejections_along_the_way() {
    let session = CommandSession::new_with_providers(
        two_women_api(),
        LiveConfigProvider::new(AppConfig {
            total: 2,
            ..AppConfig::default()
        }),
        MockInteractiveProvider::with_guesses(&[
            "ada lovelace",  // accepted
            "ada lovelace",  // duplicate of the canonical title
            "curie",         // word-count mismatch, needs precision
            "marie curie",   // accepted, wins the 2-entry game
            "never reached", // loop already over
        ]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    // Every submitted guess hit search once; the game ended on the win so
    // the last scripted line was never consumed
    assert_eq!(session.api().wikipedia.search_call_count(), 4);
    assert_eq!(session.interactive().remaining(), 1);

    // Only the two accepted guesses went past the title/duplicate stages
    assert_eq!(session.api().wikipedia.item_call_count(), 2);
    assert_eq!(session.api().wikidata.label_call_count(), 2);
}

#[tokio::test]
async fn e2e_session_survives_lookup_failures() {
    // Nothing scripted: every validated guess fails with a lookup error,
    // and the loop keeps going until input runs out
    let session = CommandSession::new_with_providers(
        MockApiProvider::new(MockWikipediaClient::new(), MockWikidataClient::new()),
        LiveConfigProvider::new(AppConfig::default()),
        MockInteractiveProvider::with_guesses(&["ada lovelace", "marie curie"]),
    );

    execute_command_with_session(Commands::Play, &session)
        .await
        .unwrap();

    assert_eq!(session.api().wikipedia.search_call_count(), 2);
    assert_eq!(session.interactive().remaining(), 0);
}
