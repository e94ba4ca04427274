//! Structured-data (Wikidata) API client
//!
//! Claim lookups for the gender and occupation steps of the verification
//! chain, plus label resolution for occupation entities with the
//! feminine-form/generic-label pair modeled explicitly.

use crate::primitives::{EntityKey, FEMININE_LABEL_PROPERTY, OccupationLabels};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tracing::trace;

/// Structured-data API errors
#[derive(Debug, Error)]
pub enum WikidataError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("No mock response for: {request}")]
    UnscriptedRequest { request: String },
}

/// wbgetclaims response: claims keyed by property id
#[derive(Debug, Deserialize)]
struct ClaimsResponse {
    #[serde(default)]
    claims: HashMap<String, Vec<Claim>>,
}

#[derive(Debug, Deserialize)]
struct Claim {
    mainsnak: MainSnak,
}

#[derive(Debug, Deserialize)]
struct MainSnak {
    datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: ClaimValue,
}

/// Claim values come in several shapes; only two matter here
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClaimValue {
    /// Entity reference, e.g. a gender or occupation item
    Item { id: String },
    /// Monolingual text, e.g. a feminine-form label
    Monolingual { text: String, language: String },
    /// Anything else (dates, quantities, plain strings)
    Other(serde_json::Value),
}

/// wbgetentities response: entities keyed by entity id
#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, EntityData>,
}

#[derive(Debug, Deserialize)]
struct EntityData {
    #[serde(default)]
    labels: HashMap<String, Label>,
    #[serde(default)]
    claims: HashMap<String, Vec<Claim>>,
}

#[derive(Debug, Deserialize)]
struct Label {
    value: String,
}

/// Parse a wbgetclaims body into the entity-id values of one property
pub(crate) fn parse_claim_entity_ids(
    body: &str,
    property: &str,
) -> Result<Vec<String>, WikidataError> {
    let response: ClaimsResponse = serde_json::from_str(body)?;
    Ok(entity_ids(response.claims.get(property)))
}

fn entity_ids(claims: Option<&Vec<Claim>>) -> Vec<String> {
    claims
        .map(|claims| {
            claims
                .iter()
                .filter_map(|claim| match &claim.mainsnak.datavalue {
                    Some(DataValue {
                        value: ClaimValue::Item { id },
                    }) => Some(id.clone()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a wbgetentities body into the occupation's label pair
pub(crate) fn parse_occupation_labels(
    body: &str,
    entity: &str,
    language: &str,
) -> Result<OccupationLabels, WikidataError> {
    let response: EntitiesResponse = serde_json::from_str(body)?;

    let Some(data) = response.entities.get(entity) else {
        return Ok(OccupationLabels::default());
    };

    let feminine = data
        .claims
        .get(FEMININE_LABEL_PROPERTY)
        .into_iter()
        .flatten()
        .find_map(|claim| match &claim.mainsnak.datavalue {
            Some(DataValue {
                value: ClaimValue::Monolingual { text, language: l },
            }) if l == language => Some(text.clone()),
            _ => None,
        });

    let generic = data.labels.get(language).map(|label| label.value.clone());

    Ok(OccupationLabels { feminine, generic })
}

/// Trait for structured-data operations
pub trait WikidataClient {
    /// All entity-id values of a property on an entity; empty when the
    /// property has no claims
    fn claim_entity_ids(
        &self,
        entity: &EntityKey,
        property: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, WikidataError>> + Send;

    /// Label pair for an occupation entity in the given language
    fn occupation_labels(
        &self,
        occupation: &EntityKey,
        language: &str,
    ) -> impl std::future::Future<Output = Result<OccupationLabels, WikidataError>> + Send;
}

/// Live structured-data client (production)
pub struct LiveWikidataClient {
    client: Client,
    base_url: String,
}

impl LiveWikidataClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://www.wikidata.org/w/api.php".to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn get(&self, url: &str) -> Result<String, WikidataError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", super::USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

impl WikidataClient for LiveWikidataClient {
    async fn claim_entity_ids(
        &self,
        entity: &EntityKey,
        property: &str,
    ) -> Result<Vec<String>, WikidataError> {
        let url = format!(
            "{}?action=wbgetclaims&entity={}&property={}&format=json",
            self.base_url, entity, property
        );

        trace!("Claims URL: {}", url);

        parse_claim_entity_ids(&self.get(&url).await?, property)
    }

    async fn occupation_labels(
        &self,
        occupation: &EntityKey,
        language: &str,
    ) -> Result<OccupationLabels, WikidataError> {
        let url = format!(
            "{}?action=wbgetentities&ids={}&props=labels%7Cclaims&languages={}&format=json",
            self.base_url, occupation, language
        );

        trace!("Entities URL: {}", url);

        parse_occupation_labels(&self.get(&url).await?, occupation.as_str(), language)
    }
}

/// Mock structured-data client (testing)
pub struct MockWikidataClient {
    claim_responses: Mutex<HashMap<(String, String), Vec<String>>>,
    label_responses: Mutex<HashMap<String, OccupationLabels>>,
    claim_calls: AtomicUsize,
    label_calls: AtomicUsize,
}

impl MockWikidataClient {
    pub fn new() -> Self {
        Self {
            claim_responses: Mutex::new(HashMap::new()),
            label_responses: Mutex::new(HashMap::new()),
            claim_calls: AtomicUsize::new(0),
            label_calls: AtomicUsize::new(0),
        }
    }

    /// Script the entity-id values of a property on an entity
    pub fn with_claims(self, entity: &str, property: &str, ids: &[&str]) -> Self {
        self.claim_responses.lock().unwrap().insert(
            (entity.to_string(), property.to_string()),
            ids.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Script the label pair of an occupation entity
    pub fn with_labels(self, entity: &str, labels: OccupationLabels) -> Self {
        self.label_responses
            .lock()
            .unwrap()
            .insert(entity.to_string(), labels);
        self
    }

    pub fn claim_call_count(&self) -> usize {
        self.claim_calls.load(Ordering::SeqCst)
    }

    pub fn label_call_count(&self) -> usize {
        self.label_calls.load(Ordering::SeqCst)
    }
}

impl WikidataClient for MockWikidataClient {
    async fn claim_entity_ids(
        &self,
        entity: &EntityKey,
        property: &str,
    ) -> Result<Vec<String>, WikidataError> {
        self.claim_calls.fetch_add(1, Ordering::SeqCst);

        let key = (entity.as_str().to_string(), property.to_string());
        match self.claim_responses.lock().unwrap().get(&key) {
            Some(ids) => Ok(ids.clone()),
            None => Err(WikidataError::UnscriptedRequest {
                request: format!("claims: {entity} {property}"),
            }),
        }
    }

    async fn occupation_labels(
        &self,
        occupation: &EntityKey,
        _language: &str,
    ) -> Result<OccupationLabels, WikidataError> {
        self.label_calls.fetch_add(1, Ordering::SeqCst);

        match self
            .label_responses
            .lock()
            .unwrap()
            .get(occupation.as_str())
        {
            Some(labels) => Ok(labels.clone()),
            None => Err(WikidataError::UnscriptedRequest {
                request: format!("labels: {occupation}"),
            }),
        }
    }
}

impl Default for MockWikidataClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("wikidata.test.rs");
}
