use super::*;
use crate::primitives::{GENDER_PROPERTY, OCCUPATION_PROPERTY};

const GENDER_CLAIMS_BODY: &str = r#"{
    "claims": {
        "P21": [
            {
                "mainsnak": {
                    "snaktype": "value",
                    "property": "P21",
                    "datavalue": {
                        "value": { "entity-type": "item", "numeric-id": 6581072, "id": "Q6581072" },
                        "type": "wikibase-entityid"
                    }
                }
            }
        ]
    }
}"#;

const OCCUPATION_ENTITY_BODY: &str = r#"{
    "entities": {
        "Q170790": {
            "type": "item",
            "id": "Q170790",
            "labels": {
                "fr": { "language": "fr", "value": "mathématicien" }
            },
            "claims": {
                "P2521": [
                    {
                        "mainsnak": {
                            "snaktype": "value",
                            "property": "P2521",
                            "datavalue": {
                                "value": { "text": "mathématicienne", "language": "fr" },
                                "type": "monolingualtext"
                            }
                        }
                    },
                    {
                        "mainsnak": {
                            "snaktype": "value",
                            "property": "P2521",
                            "datavalue": {
                                "value": { "text": "Mathematikerin", "language": "de" },
                                "type": "monolingualtext"
                            }
                        }
                    }
                ]
            }
        }
    }
}"#;

#[test]
fn test_parse_claim_entity_ids() {
    let ids = parse_claim_entity_ids(GENDER_CLAIMS_BODY, GENDER_PROPERTY).unwrap();
    assert_eq!(ids, vec!["Q6581072".to_string()]);
}

#[test]
fn test_parse_claim_entity_ids_absent_property() {
    // Entities without the property come back with an empty claims object
    let ids = parse_claim_entity_ids(r#"{"claims": {}}"#, GENDER_PROPERTY).unwrap();
    assert!(ids.is_empty());

    let ids = parse_claim_entity_ids(GENDER_CLAIMS_BODY, OCCUPATION_PROPERTY).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_parse_claim_entity_ids_skips_novalue_snaks() {
    let body = r#"{"claims": {"P21": [{"mainsnak": {"snaktype": "novalue", "property": "P21"}}]}}"#;
    let ids = parse_claim_entity_ids(body, GENDER_PROPERTY).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_parse_occupation_labels_prefers_requested_language() {
    let labels = parse_occupation_labels(OCCUPATION_ENTITY_BODY, "Q170790", "fr").unwrap();
    assert_eq!(labels.feminine.as_deref(), Some("mathématicienne"));
    assert_eq!(labels.generic.as_deref(), Some("mathématicien"));
    assert_eq!(labels.preferred(), Some("mathématicienne"));
}

#[test]
fn test_parse_occupation_labels_language_mismatch() {
    // No Spanish feminine form or label on this entity
    let labels = parse_occupation_labels(OCCUPATION_ENTITY_BODY, "Q170790", "es").unwrap();
    assert!(labels.feminine.is_none());
    assert!(labels.generic.is_none());
}

#[test]
fn test_parse_occupation_labels_unknown_entity() {
    let labels = parse_occupation_labels(OCCUPATION_ENTITY_BODY, "Q999", "fr").unwrap();
    assert_eq!(labels, OccupationLabels::default());
}

#[tokio::test]
async fn test_mock_counts_calls() {
    let mock = MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &["Q6581072"])
        .with_labels(
            "Q170790",
            OccupationLabels {
                feminine: Some("mathématicienne".to_string()),
                generic: Some("mathématicien".to_string()),
            },
        );

    let entity = EntityKey::from("Q7259");
    let ids = mock.claim_entity_ids(&entity, GENDER_PROPERTY).await.unwrap();
    assert_eq!(ids, vec!["Q6581072".to_string()]);
    assert_eq!(mock.claim_call_count(), 1);
    assert_eq!(mock.label_call_count(), 0);

    let labels = mock
        .occupation_labels(&EntityKey::from("Q170790"), "fr")
        .await
        .unwrap();
    assert_eq!(labels.preferred(), Some("mathématicienne"));
    assert_eq!(mock.label_call_count(), 1);
}

#[tokio::test]
async fn test_live_client_against_mock_server() {
    let mut server = mockito::Server::new_async().await;

    let claims_mock = server
        .mock("GET", "/w/api.php")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("action".to_string(), "wbgetclaims".to_string()),
            mockito::Matcher::UrlEncoded("entity".to_string(), "Q7259".to_string()),
            mockito::Matcher::UrlEncoded("property".to_string(), "P21".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(GENDER_CLAIMS_BODY)
        .create_async()
        .await;

    let client = LiveWikidataClient::with_base_url(
        reqwest::Client::new(),
        format!("{}/w/api.php", server.url()),
    );

    let ids = client
        .claim_entity_ids(&EntityKey::from("Q7259"), GENDER_PROPERTY)
        .await
        .unwrap();
    assert_eq!(ids, vec!["Q6581072".to_string()]);

    claims_mock.assert_async().await;
}
