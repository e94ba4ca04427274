//! E2E tests for the verification chain over the wire
//!
//! The live clients run against a mockito server serving recorded API
//! fixtures, so the whole chain (search, pageprops, claims, labels) is
//! exercised including URL construction and response parsing.

use anyhow::Result;
use cinquante_lib::api::{LiveWikidataClient, LiveWikipediaClient};
use cinquante_lib::game::{GuessError, GuessValidator, Ledger};
use cinquante_lib::primitives::Entry;
use cinquante_tests::load_fixture;
use mockito::{Matcher, Server, ServerGuard};

struct WireMocks {
    search: mockito::Mock,
    pageprops: mockito::Mock,
    gender: mockito::Mock,
    occupation: mockito::Mock,
    entity: mockito::Mock,
}

/// Mount the happy-path Ada Lovelace conversation on one server
async fn mount_ada(server: &mut ServerGuard) -> Result<WireMocks> {
    let search = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "query".into()),
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), "ada lovelace".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikipedia_search_ada.json")?)
        .create_async()
        .await;

    let pageprops = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("prop".into(), "pageprops".into()),
            Matcher::UrlEncoded("pageids".into(), "123".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikipedia_pageprops_ada.json")?)
        .create_async()
        .await;

    let gender = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "wbgetclaims".into()),
            Matcher::UrlEncoded("entity".into(), "Q7259".into()),
            Matcher::UrlEncoded("property".into(), "P21".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikidata_claims_gender_ada.json")?)
        .create_async()
        .await;

    let occupation = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "wbgetclaims".into()),
            Matcher::UrlEncoded("entity".into(), "Q7259".into()),
            Matcher::UrlEncoded("property".into(), "P106".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikidata_claims_occupation_ada.json")?)
        .create_async()
        .await;

    let entity = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "wbgetentities".into()),
            Matcher::UrlEncoded("ids".into(), "Q170790".into()),
            Matcher::UrlEncoded("languages".into(), "fr".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikidata_entity_mathematician.json")?)
        .create_async()
        .await;

    Ok(WireMocks {
        search,
        pageprops,
        gender,
        occupation,
        entity,
    })
}

fn clients(server: &ServerGuard) -> (LiveWikipediaClient, LiveWikidataClient) {
    let client = reqwest::Client::new();
    let wikipedia = LiveWikipediaClient::with_base_urls(
        client.clone(),
        format!("{}/w/api.php", server.url()),
        format!("{}/wiki", server.url()),
    );
    let wikidata = LiveWikidataClient::with_base_url(client, format!("{}/w/api.php", server.url()));
    (wikipedia, wikidata)
}

#[tokio::test]
async fn e2e_accepts_ada_lovelace() -> Result<()> {
    let mut server = Server::new_async().await;
    let mocks = mount_ada(&mut server).await?;
    let (wikipedia, wikidata) = clients(&server);

    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let entry = validator
        .validate_guess(&ledger, "ada lovelace")
        .await
        .expect("chain should accept Ada Lovelace");

    assert_eq!(entry.name, "Ada Lovelace");
    assert_eq!(entry.category, "Mathématicienne");
    assert_eq!(
        entry.reference_url,
        format!("{}/wiki/Ada_Lovelace", server.url())
    );

    mocks.search.assert_async().await;
    mocks.pageprops.assert_async().await;
    mocks.gender.assert_async().await;
    mocks.occupation.assert_async().await;
    mocks.entity.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_spends_no_structured_data_calls() -> Result<()> {
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), "ada lovelace".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikipedia_search_ada.json")?)
        .create_async()
        .await;

    // No pageprops or wikidata endpoints mounted: any structured-data call
    // would 501 and fail the chain with a Lookup error instead
    let (wikipedia, wikidata) = clients(&server);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");

    let mut ledger = Ledger::new();
    ledger.record(Entry {
        name: "Ada Lovelace".to_string(),
        category: "Mathématicienne".to_string(),
        reference_url: format!("{}/wiki/Ada_Lovelace", server.url()),
    });

    let result = validator.validate_guess(&ledger, "ada lovelace").await;
    assert!(matches!(result, Err(GuessError::AlreadyFound)));

    search.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn e2e_word_count_mismatch_stops_at_search() -> Result<()> {
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), "ada".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture("wikipedia_search_ada.json")?)
        .create_async()
        .await;

    let (wikipedia, wikidata) = clients(&server);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "ada").await;
    assert!(matches!(result, Err(GuessError::NeedsPrecision)));

    search.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn e2e_server_failure_surfaces_as_lookup() -> Result<()> {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let (wikipedia, wikidata) = clients(&server);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "ada lovelace").await;
    assert!(matches!(result, Err(GuessError::Lookup { .. })));
    Ok(())
}
