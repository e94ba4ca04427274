use super::*;

// ============================================================================
// Edit Distance Tests
// ============================================================================

#[test]
fn test_edit_distance_identical() {
    assert_eq!(edit_distance("curie", "curie"), 0);
    assert_eq!(edit_distance("", ""), 0);
}

#[test]
fn test_edit_distance_zero_iff_identical() {
    assert_ne!(edit_distance("curie", "curi"), 0);
    assert_ne!(edit_distance("a", "b"), 0);
}

#[test]
fn test_edit_distance_from_empty() {
    assert_eq!(edit_distance("", "curie"), 5);
    assert_eq!(edit_distance("curie", ""), 5);
    // Character count, not byte count
    assert_eq!(edit_distance("", "élise"), 5);
}

#[test]
fn test_edit_distance_symmetry() {
    let pairs = [
        ("curie", "curei"),
        ("madonna", "madona"),
        ("", "lovelace"),
        ("frida", "freida"),
    ];
    for (a, b) in pairs {
        assert_eq!(
            edit_distance(a, b),
            edit_distance(b, a),
            "distance not symmetric for {a:?} / {b:?}"
        );
    }
}

#[test]
fn test_edit_distance_single_operations() {
    assert_eq!(edit_distance("curie", "curue"), 1); // substitution
    assert_eq!(edit_distance("curie", "currie"), 1); // insertion
    assert_eq!(edit_distance("curie", "cure"), 1); // deletion
    assert_eq!(edit_distance("curie", "curuo"), 2);
}

#[test]
fn test_edit_distance_accented_characters() {
    // One char substitution even though the byte widths differ
    assert_eq!(edit_distance("melies", "méliès"), 2);
    assert_eq!(edit_distance("méliès", "méliès"), 0);
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_lowercases_and_splits() {
    assert_eq!(normalize("Marie Curie"), vec!["marie", "curie"]);
    assert_eq!(normalize("  Ada   Lovelace  "), vec!["ada", "lovelace"]);
}

#[test]
fn test_normalize_strips_punctuation() {
    assert_eq!(normalize("O'Keeffe!"), vec!["o'keeffe"]);
    assert_eq!(normalize("Sklodowska-Curie"), vec!["sklodowskacurie"]);
    assert_eq!(normalize("Madonna (singer)"), vec!["madonna", "singer"]);
}

#[test]
fn test_normalize_empty_input() {
    assert!(normalize("").is_empty());
    assert!(normalize("   ").is_empty());
    assert!(normalize("...---...").is_empty());
}

#[test]
fn test_strip_parenthetical() {
    assert_eq!(strip_parenthetical("Madonna (singer)"), "Madonna");
    assert_eq!(strip_parenthetical("Anna (actress) Smith"), "Anna Smith");
    assert_eq!(strip_parenthetical("No suffix here"), "No suffix here");
}

// ============================================================================
// Title Matching Tests
// ============================================================================

#[test]
fn test_match_title_exact() {
    let guess = normalize("marie curie");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Match);
}

#[test]
fn test_match_title_one_edit_per_word() {
    let guess = normalize("Curue");
    assert_eq!(match_title(&guess, "Curie"), TitleMatch::Match);

    let guess = normalize("Curuo");
    assert_eq!(match_title(&guess, "Curie"), TitleMatch::Misspelled);

    // Tolerance applies per word, not across the whole title
    let guess = normalize("mari curi");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Match);

    // A transposition costs two edits
    let guess = normalize("marie curei");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Misspelled);
}

#[test]
fn test_match_title_word_count_mismatch_rejects() {
    // A perfectly spelled single word never matches a two-word title
    let guess = normalize("Curie");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::NeedsPrecision);

    let guess = normalize("Marie Sklodowska Curie");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::NeedsPrecision);
}

#[test]
fn test_match_title_disambiguation_fallback() {
    let guess = normalize("Madonna");
    assert_eq!(match_title(&guess, "Madonna (singer)"), TitleMatch::Match);

    // The fallback still enforces the word count
    let guess = normalize("Anna");
    assert_eq!(
        match_title(&guess, "Anna Smith (actress)"),
        TitleMatch::NeedsPrecision
    );

    // And the tolerance
    let guess = normalize("Madonnna");
    assert_eq!(match_title(&guess, "Madonna (singer)"), TitleMatch::Match);
    let guess = normalize("Madooonna");
    assert_eq!(
        match_title(&guess, "Madonna (singer)"),
        TitleMatch::Misspelled
    );
}

#[test]
fn test_match_title_transposed_words_are_misspelled() {
    // Token counts align, so swapped name order falls through to the
    // positional comparison and reads as a spelling failure
    let guess = normalize("curie marie");
    assert_eq!(match_title(&guess, "Marie Curie"), TitleMatch::Misspelled);
}
