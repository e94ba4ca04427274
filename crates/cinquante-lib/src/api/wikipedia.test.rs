use super::*;

const SEARCH_BODY: &str = r#"{
    "batchcomplete": "",
    "query": {
        "searchinfo": { "totalhits": 2 },
        "search": [
            { "ns": 0, "title": "Ada Lovelace", "pageid": 123, "size": 40210 },
            { "ns": 0, "title": "Ada Lovelace Day", "pageid": 456, "size": 8100 }
        ]
    }
}"#;

const PAGEPROPS_BODY: &str = r#"{
    "batchcomplete": "",
    "query": {
        "pages": {
            "123": {
                "pageid": 123,
                "title": "Ada Lovelace",
                "pageprops": { "wikibase_item": "Q7259" }
            }
        }
    }
}"#;

#[test]
fn test_parse_top_candidate_takes_first_hit() {
    let candidate = parse_top_candidate(SEARCH_BODY).unwrap().unwrap();
    assert_eq!(candidate.title, "Ada Lovelace");
    assert_eq!(candidate.page_id, 123);
}

#[test]
fn test_parse_top_candidate_empty_results() {
    let body = r#"{"query": {"search": []}}"#;
    assert!(parse_top_candidate(body).unwrap().is_none());
}

#[test]
fn test_parse_top_candidate_missing_query() {
    // MediaWiki omits `query` entirely on some error responses
    let body = r#"{"batchcomplete": ""}"#;
    assert!(parse_top_candidate(body).unwrap().is_none());
}

#[test]
fn test_parse_top_candidate_malformed() {
    assert!(parse_top_candidate("not json").is_err());
}

#[test]
fn test_parse_wikibase_item() {
    let key = parse_wikibase_item(PAGEPROPS_BODY, 123).unwrap().unwrap();
    assert_eq!(key.as_str(), "Q7259");
}

#[test]
fn test_parse_wikibase_item_missing_pageprops() {
    let body = r#"{"query": {"pages": {"123": {"pageid": 123, "title": "Ada Lovelace"}}}}"#;
    assert!(parse_wikibase_item(body, 123).unwrap().is_none());
}

#[test]
fn test_parse_wikibase_item_wrong_page() {
    assert!(parse_wikibase_item(PAGEPROPS_BODY, 999).unwrap().is_none());
}

#[test]
fn test_page_url_underscores_and_encoding() {
    let mock = MockWikipediaClient::new();
    assert_eq!(
        mock.page_url("Ada Lovelace"),
        "https://fr.wikipedia.org/wiki/Ada_Lovelace"
    );
}

#[tokio::test]
async fn test_mock_counts_calls() {
    let mock = MockWikipediaClient::new()
        .with_search_result(
            "ada lovelace",
            Some(Candidate {
                title: "Ada Lovelace".to_string(),
                page_id: 123,
            }),
        )
        .with_wikibase_item(123, Some(EntityKey::from("Q7259")));

    assert_eq!(mock.search_call_count(), 0);

    let candidate = mock.search_top("ada lovelace").await.unwrap().unwrap();
    assert_eq!(candidate.page_id, 123);
    assert_eq!(mock.search_call_count(), 1);
    assert_eq!(mock.item_call_count(), 0);

    let key = mock.wikibase_item(123).await.unwrap().unwrap();
    assert_eq!(key.as_str(), "Q7259");
    assert_eq!(mock.item_call_count(), 1);
}

#[tokio::test]
async fn test_mock_unscripted_request_errors() {
    let mock = MockWikipediaClient::new();
    assert!(matches!(
        mock.search_top("nobody").await,
        Err(WikipediaError::UnscriptedRequest { .. })
    ));
}

#[tokio::test]
async fn test_live_client_against_mock_server() {
    let mut server = mockito::Server::new_async().await;

    let search_mock = server
        .mock("GET", "/w/api.php")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("action".to_string(), "query".to_string()),
            mockito::Matcher::UrlEncoded("list".to_string(), "search".to_string()),
            mockito::Matcher::UrlEncoded("srsearch".to_string(), "ada lovelace".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;

    let client = LiveWikipediaClient::with_base_urls(
        reqwest::Client::new(),
        format!("{}/w/api.php", server.url()),
        format!("{}/wiki", server.url()),
    );

    let candidate = client.search_top("ada lovelace").await.unwrap().unwrap();
    assert_eq!(candidate.title, "Ada Lovelace");

    search_mock.assert_async().await;
}
