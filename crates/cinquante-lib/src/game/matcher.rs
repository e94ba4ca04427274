//! Tokenization-aware fuzzy matching for guesses against encyclopedia titles
//!
//! A guess matches a title when the two tokenize to the same number of words
//! and every aligned pair is within one edit of each other. When the counts
//! differ, the title gets one chance at redemption: stripping its
//! parenthetical disambiguation suffix. The word-count requirement itself is
//! never relaxed, so a lone given name cannot match a full name.
//!
//! # Examples
//!
//! ```
//! use cinquante_lib::game::matcher::{TitleMatch, match_title, normalize};
//!
//! let guess = normalize("marie curie");
//! assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Match);
//!
//! // One edit per word is tolerated
//! let guess = normalize("mari curie");
//! assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Match);
//!
//! // A single word never matches a two-word title
//! let guess = normalize("curie");
//! assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::NeedsPrecision);
//!
//! // Disambiguation suffixes are absorbed
//! let guess = normalize("madonna");
//! assert_eq!(match_title(&guess, "Madonna (singer)"), TitleMatch::Match);
//! ```

/// Maximum edit distance tolerated between an aligned guess/title word pair
pub const WORD_EDIT_TOLERANCE: usize = 1;

/// Punctuation stripped during normalization
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Outcome of matching a guess against a candidate title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMatch {
    /// Every aligned word pair is within tolerance
    Match,
    /// Word counts differ even after stripping the disambiguation suffix
    NeedsPrecision,
    /// Word counts align but some pair exceeds the tolerance
    Misspelled,
}

/// Normalize text into a sequence of comparable word tokens:
/// lowercase, strip punctuation, split on whitespace runs.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(PUNCTUATION, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Remove `(...)` segments and the whitespace around them.
///
/// Encyclopedia titles carry disambiguation suffixes ("Madonna (singer)");
/// this is applied to candidate titles only, never to user input.
pub fn strip_parenthetical(title: &str) -> String {
    let mut kept = String::with_capacity(title.len());
    let mut depth = 0usize;

    for ch in title.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => kept.push(ch),
            _ => {}
        }
    }

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Levenshtein distance between two strings, over characters.
///
/// Classic dynamic programming over a `(|b|+1) x (|a|+1)` table; pure
/// function, no shared state.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = 1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j]);
            }
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}

/// Match normalized guess tokens against a candidate title.
///
/// The title is first tokenized as-is; on a word-count mismatch it is
/// re-tokenized with its parenthetical suffix stripped. A count mismatch
/// that survives stripping rejects immediately, without computing any
/// distances.
pub fn match_title(guess_tokens: &[String], candidate_title: &str) -> TitleMatch {
    let title_tokens = normalize(candidate_title);

    if guess_tokens.len() == title_tokens.len() {
        return compare_positional(guess_tokens, &title_tokens);
    }

    let stripped = strip_parenthetical(candidate_title);
    let title_tokens = normalize(&stripped);

    if guess_tokens.len() != title_tokens.len() {
        return TitleMatch::NeedsPrecision;
    }

    compare_positional(guess_tokens, &title_tokens)
}

/// Positional comparison: token i of the guess against token i of the title
fn compare_positional(guess: &[String], title: &[String]) -> TitleMatch {
    for (guess_word, title_word) in guess.iter().zip(title) {
        if edit_distance(guess_word, title_word) > WORD_EDIT_TOLERANCE {
            return TitleMatch::Misspelled;
        }
    }

    TitleMatch::Match
}

#[cfg(test)]
mod tests {
    include!("matcher.test.rs");
}
