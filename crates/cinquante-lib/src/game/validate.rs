//! The guess-verification chain
//!
//! Resolution happens in a fixed order, each step deriving its request from
//! the previous step's response: search, title match, duplicate check,
//! entity key, gender claim, occupation label. The first unmet precondition
//! short-circuits the chain with its rejection; nothing is retried.

use crate::api::{WikidataClient, WikidataError, WikipediaClient, WikipediaError};
use crate::game::ledger::Ledger;
use crate::game::matcher::{self, TitleMatch};
use crate::primitives::{
    ACCEPTED_GENDERS, EntityKey, Entry, GENDER_PROPERTY, OCCUPATION_PROPERTY, UNKNOWN_CATEGORY,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Transport or parse failure from a knowledge-base call
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Wikipedia(#[from] WikipediaError),

    #[error(transparent)]
    Wikidata(#[from] WikidataError),
}

/// Terminal outcome of a failed validation.
///
/// The display strings are the user-facing message contract. None of them
/// name the offending word or the correct spelling, and remote diagnostics
/// only travel inside `Lookup`.
#[derive(Debug, Error)]
pub enum GuessError {
    #[error("not found")]
    NotFound,

    #[error("be more precise")]
    NeedsPrecision,

    #[error("incorrect spelling")]
    Misspelled,

    #[error("already found")]
    AlreadyFound,

    #[error("no structured data")]
    NoStructuredData,

    #[error("not a woman (per structured data)")]
    NotAWoman,

    #[error("lookup failed: {source}")]
    Lookup {
        #[from]
        source: LookupError,
    },
}

impl From<WikipediaError> for GuessError {
    fn from(source: WikipediaError) -> Self {
        GuessError::Lookup {
            source: LookupError::Wikipedia(source),
        }
    }
}

impl From<WikidataError> for GuessError {
    fn from(source: WikidataError) -> Self {
        GuessError::Lookup {
            source: LookupError::Wikidata(source),
        }
    }
}

/// Stateless validator over the two knowledge-base clients.
///
/// Owns no session state; the ledger it checks against is passed in by the
/// orchestrating layer.
pub struct GuessValidator<'a, W, D>
where
    W: WikipediaClient,
    D: WikidataClient,
{
    wikipedia: &'a W,
    wikidata: &'a D,
    language: &'a str,
}

impl<'a, W, D> GuessValidator<'a, W, D>
where
    W: WikipediaClient,
    D: WikidataClient,
{
    pub fn new(wikipedia: &'a W, wikidata: &'a D, language: &'a str) -> Self {
        Self {
            wikipedia,
            wikidata,
            language,
        }
    }

    /// Run the full chain for one guess.
    ///
    /// Returns the accepted `Entry` or the first rejection encountered. The
    /// duplicate check keys on the canonical search title and runs before
    /// any structured-data lookups.
    pub async fn validate_guess(&self, ledger: &Ledger, raw: &str) -> Result<Entry, GuessError> {
        let guess_tokens = matcher::normalize(raw);

        debug!("Validating guess: {}", raw);

        // 1. Resolve the guess to its top search candidate
        let candidate = self
            .wikipedia
            .search_top(raw)
            .await?
            .ok_or(GuessError::NotFound)?;

        debug!(
            "Top candidate: '{}' (page {})",
            candidate.title, candidate.page_id
        );

        // 2. Fuzzy title match against the canonical title
        match matcher::match_title(&guess_tokens, &candidate.title) {
            TitleMatch::Match => {}
            TitleMatch::NeedsPrecision => return Err(GuessError::NeedsPrecision),
            TitleMatch::Misspelled => return Err(GuessError::Misspelled),
        }

        // 3. Duplicate check on the canonical title, ahead of any further
        // remote calls
        if ledger.contains_title(&candidate.title) {
            return Err(GuessError::AlreadyFound);
        }

        // 4. Page id -> structured-data entity key
        let entity = self
            .wikipedia
            .wikibase_item(candidate.page_id)
            .await?
            .ok_or(GuessError::NoStructuredData)?;

        // 5. Gender claim must include an accepted value
        let genders = self
            .wikidata
            .claim_entity_ids(&entity, GENDER_PROPERTY)
            .await?;

        if !genders
            .iter()
            .any(|id| ACCEPTED_GENDERS.contains(&id.as_str()))
        {
            warn!("Rejected '{}': gender claims {:?}", candidate.title, genders);
            return Err(GuessError::NotAWoman);
        }

        // 6. Occupation label; absence is not a rejection
        let category = self.resolve_category(&entity).await?;

        Ok(Entry {
            reference_url: self.wikipedia.page_url(&candidate.title),
            name: candidate.title,
            category,
        })
    }

    /// First occupation claim's label, feminine form preferred, capitalized;
    /// `"Unknown"` when the entity has no occupation claims
    async fn resolve_category(&self, entity: &EntityKey) -> Result<String, GuessError> {
        let occupations = self
            .wikidata
            .claim_entity_ids(entity, OCCUPATION_PROPERTY)
            .await?;

        let Some(first) = occupations.first() else {
            return Ok(UNKNOWN_CATEGORY.to_string());
        };

        let labels = self
            .wikidata
            .occupation_labels(&EntityKey::from(first.as_str()), self.language)
            .await?;

        Ok(labels
            .preferred()
            .map(capitalize)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()))
    }
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    include!("validate.test.rs");
}
