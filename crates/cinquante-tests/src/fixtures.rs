//! Fixture infrastructure for E2E tests
//!
//! Response bodies captured from the MediaWiki and Wikidata APIs, served to
//! the live clients through mockito so the full pipeline runs over the wire
//! without touching the real services.

use anyhow::Result;

/// Absolute path of a fixture file
pub fn fixture_path(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Load a fixture's raw JSON body (for mockito)
pub fn load_fixture(name: &str) -> Result<String> {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load fixture '{}': {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_fixtures_are_valid_json() {
        for name in [
            "wikipedia_search_ada.json",
            "wikipedia_pageprops_ada.json",
            "wikidata_claims_gender_ada.json",
            "wikidata_claims_occupation_ada.json",
            "wikidata_entity_mathematician.json",
        ] {
            let body = load_fixture(name).unwrap();
            let parsed: Result<Value, _> = serde_json::from_str(&body);
            assert!(parsed.is_ok(), "fixture {name} is not valid JSON");
        }
    }

    #[test]
    fn test_search_fixture_contains_ada() {
        let body = load_fixture("wikipedia_search_ada.json").unwrap();
        assert!(body.contains("Ada Lovelace"));
    }
}
