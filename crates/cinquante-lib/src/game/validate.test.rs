use super::*;
use crate::api::{MockWikidataClient, MockWikipediaClient};
use crate::primitives::{Candidate, ITEM_FEMALE, ITEM_TRANSGENDER_FEMALE, OccupationLabels};

fn ada_wikipedia() -> MockWikipediaClient {
    MockWikipediaClient::new()
        .with_search_result(
            "ada lovelace",
            Some(Candidate {
                title: "Ada Lovelace".to_string(),
                page_id: 123,
            }),
        )
        .with_wikibase_item(123, Some(EntityKey::from("Q7259")))
}

fn ada_wikidata() -> MockWikidataClient {
    MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7259", OCCUPATION_PROPERTY, &["Q170790"])
        .with_labels(
            "Q170790",
            OccupationLabels {
                feminine: Some("mathématicienne".to_string()),
                generic: Some("mathématicien".to_string()),
            },
        )
}

#[tokio::test]
async fn test_full_chain_success() {
    let wikipedia = ada_wikipedia();
    let wikidata = ada_wikidata();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let entry = validator
        .validate_guess(&ledger, "ada lovelace")
        .await
        .unwrap();

    assert_eq!(entry.name, "Ada Lovelace");
    assert_eq!(entry.category, "Mathématicienne");
    assert_eq!(
        entry.reference_url,
        "https://fr.wikipedia.org/wiki/Ada_Lovelace"
    );
}

#[tokio::test]
async fn test_no_search_result_is_not_found() {
    let wikipedia = MockWikipediaClient::new().with_search_result("nobody anybody", None);
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "nobody anybody").await;
    assert!(matches!(result, Err(GuessError::NotFound)));
    assert_eq!(wikipedia.item_call_count(), 0);
    assert_eq!(wikidata.claim_call_count(), 0);
}

#[tokio::test]
async fn test_word_count_mismatch_short_circuits() {
    let wikipedia = MockWikipediaClient::new().with_search_result(
        "curie",
        Some(Candidate {
            title: "Marie Curie".to_string(),
            page_id: 77,
        }),
    );
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "curie").await;
    assert!(matches!(result, Err(GuessError::NeedsPrecision)));

    // The chain stopped before any structured-data lookups
    assert_eq!(wikipedia.search_call_count(), 1);
    assert_eq!(wikipedia.item_call_count(), 0);
    assert_eq!(wikidata.claim_call_count(), 0);
    assert_eq!(wikidata.label_call_count(), 0);
}

#[tokio::test]
async fn test_spelling_failure_short_circuits() {
    let wikipedia = MockWikipediaClient::new().with_search_result(
        "marie curuo",
        Some(Candidate {
            title: "Marie Curie".to_string(),
            page_id: 77,
        }),
    );
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    // "curuo" is two edits from "curie"
    let result = validator.validate_guess(&ledger, "marie curuo").await;
    assert!(matches!(result, Err(GuessError::Misspelled)));
    assert_eq!(wikipedia.item_call_count(), 0);
    assert_eq!(wikidata.claim_call_count(), 0);
}

#[tokio::test]
async fn test_duplicate_detected_on_canonical_title() {
    let wikipedia = MockWikipediaClient::new().with_search_result(
        "marie curi",
        Some(Candidate {
            title: "Marie Curie".to_string(),
            page_id: 77,
        }),
    );
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");

    let mut ledger = Ledger::new();
    ledger.record(Entry {
        name: "Marie Curie".to_string(),
        category: "Physicienne".to_string(),
        reference_url: "https://fr.wikipedia.org/wiki/Marie_Curie".to_string(),
    });

    // A near-miss guess that resolves to an already-found canonical title is
    // a duplicate, not a spelling failure
    let result = validator.validate_guess(&ledger, "marie curi").await;
    assert!(matches!(result, Err(GuessError::AlreadyFound)));

    // Caught before spending any further remote calls
    assert_eq!(wikipedia.item_call_count(), 0);
    assert_eq!(wikidata.claim_call_count(), 0);
    assert_eq!(ledger.len(), 1);
}

#[tokio::test]
async fn test_missing_entity_key() {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "ada lovelace",
            Some(Candidate {
                title: "Ada Lovelace".to_string(),
                page_id: 123,
            }),
        )
        .with_wikibase_item(123, None);
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "ada lovelace").await;
    assert!(matches!(result, Err(GuessError::NoStructuredData)));
    assert_eq!(wikidata.claim_call_count(), 0);
}

#[tokio::test]
async fn test_unaccepted_gender_rejects_without_ledger_mutation() {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "victor hugo",
            Some(Candidate {
                title: "Victor Hugo".to_string(),
                page_id: 555,
            }),
        )
        .with_wikibase_item(555, Some(EntityKey::from("Q535")));
    let wikidata = MockWikidataClient::new().with_claims("Q535", GENDER_PROPERTY, &["Q6581097"]);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "victor hugo").await;
    assert!(matches!(result, Err(GuessError::NotAWoman)));

    // Occupation was never consulted and nothing was recorded
    assert_eq!(wikidata.claim_call_count(), 1);
    assert_eq!(wikidata.label_call_count(), 0);
    assert!(ledger.is_empty());
}

#[tokio::test]
async fn test_absent_gender_claims_reject() {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "some entity",
            Some(Candidate {
                title: "Some Entity".to_string(),
                page_id: 1,
            }),
        )
        .with_wikibase_item(1, Some(EntityKey::from("Q1")));
    let wikidata = MockWikidataClient::new().with_claims("Q1", GENDER_PROPERTY, &[]);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "some entity").await;
    assert!(matches!(result, Err(GuessError::NotAWoman)));
}

#[tokio::test]
async fn test_transgender_female_is_accepted() {
    let wikipedia = MockWikipediaClient::new()
        .with_search_result(
            "laverne cox",
            Some(Candidate {
                title: "Laverne Cox".to_string(),
                page_id: 9,
            }),
        )
        .with_wikibase_item(9, Some(EntityKey::from("Q9")));
    let wikidata = MockWikidataClient::new()
        .with_claims("Q9", GENDER_PROPERTY, &[ITEM_TRANSGENDER_FEMALE])
        .with_claims("Q9", OCCUPATION_PROPERTY, &["Q33999"])
        .with_labels(
            "Q33999",
            OccupationLabels {
                feminine: Some("actrice".to_string()),
                generic: Some("acteur".to_string()),
            },
        );
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let entry = validator
        .validate_guess(&ledger, "laverne cox")
        .await
        .unwrap();
    assert_eq!(entry.category, "Actrice");
}

#[tokio::test]
async fn test_missing_occupation_defaults_to_unknown() {
    let wikipedia = ada_wikipedia();
    let wikidata = MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7259", OCCUPATION_PROPERTY, &[]);
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    // Still a success, just unclassified
    let entry = validator
        .validate_guess(&ledger, "ada lovelace")
        .await
        .unwrap();
    assert_eq!(entry.category, "Unknown");
    assert_eq!(wikidata.label_call_count(), 0);
}

#[tokio::test]
async fn test_generic_label_fallback_capitalized() {
    let wikipedia = ada_wikipedia();
    let wikidata = MockWikidataClient::new()
        .with_claims("Q7259", GENDER_PROPERTY, &[ITEM_FEMALE])
        .with_claims("Q7259", OCCUPATION_PROPERTY, &["Q170790"])
        .with_labels(
            "Q170790",
            OccupationLabels {
                feminine: None,
                generic: Some("scientifique".to_string()),
            },
        );
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let entry = validator
        .validate_guess(&ledger, "ada lovelace")
        .await
        .unwrap();
    assert_eq!(entry.category, "Scientifique");
}

#[tokio::test]
async fn test_remote_failure_surfaces_as_lookup() {
    // Unscripted mock call stands in for a transport failure
    let wikipedia = MockWikipediaClient::new();
    let wikidata = MockWikidataClient::new();
    let validator = GuessValidator::new(&wikipedia, &wikidata, "fr");
    let ledger = Ledger::new();

    let result = validator.validate_guess(&ledger, "anyone").await;
    assert!(matches!(result, Err(GuessError::Lookup { .. })));
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("mathématicienne"), "Mathématicienne");
    assert_eq!(capitalize("écrivaine"), "Écrivaine");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_rejection_messages() {
    assert_eq!(GuessError::NotFound.to_string(), "not found");
    assert_eq!(GuessError::NeedsPrecision.to_string(), "be more precise");
    assert_eq!(GuessError::Misspelled.to_string(), "incorrect spelling");
    assert_eq!(GuessError::AlreadyFound.to_string(), "already found");
    assert_eq!(GuessError::NoStructuredData.to_string(), "no structured data");
    assert_eq!(
        GuessError::NotAWoman.to_string(),
        "not a woman (per structured data)"
    );
}
