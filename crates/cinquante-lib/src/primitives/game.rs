use serde::{Deserialize, Serialize};
use std::fmt;

/// Wikidata property id for "sex or gender"
pub const GENDER_PROPERTY: &str = "P21";

/// Wikidata property id for "occupation"
pub const OCCUPATION_PROPERTY: &str = "P106";

/// Wikidata property id for "female form of label" (monolingual text)
pub const FEMININE_LABEL_PROPERTY: &str = "P2521";

/// Wikidata item id for "female"
pub const ITEM_FEMALE: &str = "Q6581072";

/// Wikidata item id for "transgender female"
pub const ITEM_TRANSGENDER_FEMALE: &str = "Q1052281";

/// Gender claim values that count as a woman
pub const ACCEPTED_GENDERS: [&str; 2] = [ITEM_FEMALE, ITEM_TRANSGENDER_FEMALE];

/// Category placeholder when an entity carries no occupation claims
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Top encyclopedia search result resolved from a free-text guess.
///
/// Produced fresh for every guess and never persisted; the canonical
/// `title` is what all downstream checks key on, not the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub page_id: u64,
}

/// Opaque identifier into the structured-data graph (a Wikidata Q-id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey(pub String);

impl EntityKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityKey {
    fn from(s: &str) -> Self {
        EntityKey(s.to_string())
    }
}

/// An accepted guess, owned by the session ledger.
///
/// Immutable once created; constructed only when the full verification
/// chain has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Canonical title returned by the encyclopedia, not the raw guess
    pub name: String,
    /// Resolved occupation label, first letter capitalized
    pub category: String,
    /// Encyclopedia page URL built from the canonical title
    pub reference_url: String,
}

/// Occupation label pair resolved from the structured-data graph.
///
/// The feminine form (P2521 in the requested language) takes precedence
/// over the generic label when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupationLabels {
    pub feminine: Option<String>,
    pub generic: Option<String>,
}

impl OccupationLabels {
    /// Preferred label: feminine form if present, generic otherwise
    pub fn preferred(&self) -> Option<&str> {
        self.feminine.as_deref().or(self.generic.as_deref())
    }
}
