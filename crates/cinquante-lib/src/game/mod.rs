//! Game domain: fuzzy title matching, the session ledger, and the
//! guess-verification chain.

pub mod ledger;
pub mod matcher;
pub mod validate;

// Re-export main types for convenience
pub use ledger::Ledger;
pub use matcher::{TitleMatch, edit_distance, match_title, normalize, strip_parenthetical};
pub use validate::{GuessError, GuessValidator, LookupError};
