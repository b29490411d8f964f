//! # Three-Word Phrase Rule
//!
//! A three-word phrase addresses a location as three words joined by
//! dots (`table.chair.lamp`). The rule is purely structural: the text
//! must split on `.` into exactly three segments. Segments may be empty,
//! nothing is trimmed or case-folded, and the recorded language tag plays
//! no part in the check.

use crate::error::OkfError;

/// Segment delimiter of a three-word phrase.
pub const PHRASE_DELIMITER: char = '.';

/// Number of segments a valid phrase splits into.
pub const PHRASE_SEGMENTS: usize = 3;

/// Name under which the rule is registered with validation engines.
pub const THREE_WORD_PHRASE_FORMAT: &str = "three-word-phrase";

/// Returns `true` iff `text` splits on `.` into exactly three segments.
///
/// The empty string is one empty segment and therefore fails.
pub fn is_three_word_phrase(text: &str) -> bool {
    text.split(PHRASE_DELIMITER).count() == PHRASE_SEGMENTS
}

/// Field-level form of the rule: an empty value means "not recorded"
/// and passes; anything else must be a three-word phrase.
pub fn is_absent_or_three_word_phrase(text: &str) -> bool {
    text.is_empty() || is_three_word_phrase(text)
}

/// Check a phrase, returning the segment count in the error on failure.
pub fn check_three_word_phrase(text: &str) -> Result<(), OkfError> {
    let segments = text.split(PHRASE_DELIMITER).count();
    if segments == PHRASE_SEGMENTS {
        Ok(())
    } else {
        Err(OkfError::InvalidPhrase {
            phrase: text.to_string(),
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_documented_examples() {
        assert!(is_three_word_phrase("table.chair.lamp"));
        assert!(!is_three_word_phrase("table.chair"));
        assert!(!is_three_word_phrase("a.b.c.d"));
        assert!(!is_three_word_phrase(""));
    }

    #[test]
    fn test_empty_segments_count() {
        assert!(is_three_word_phrase(".."));
        assert!(is_three_word_phrase("a..c"));
        assert!(is_three_word_phrase(".b."));
    }

    #[test]
    fn test_no_normalization() {
        // Spaces are not delimiters.
        assert!(!is_three_word_phrase("table chair lamp"));
        assert!(is_three_word_phrase(" table.chair.lamp "));
    }

    #[test]
    fn test_absent_passes_field_rule() {
        assert!(is_absent_or_three_word_phrase(""));
        assert!(is_absent_or_three_word_phrase("filled.count.soap"));
        assert!(!is_absent_or_three_word_phrase("filled.count"));
    }

    #[test]
    fn test_check_reports_segment_count() {
        let err = check_three_word_phrase("a.b.c.d").unwrap_err();
        match err {
            OkfError::InvalidPhrase { phrase, segments } => {
                assert_eq!(phrase, "a.b.c.d");
                assert_eq!(segments, 4);
            }
            other => panic!("expected InvalidPhrase, got: {other}"),
        }
        check_three_word_phrase("index.home.raft").unwrap();
    }

    proptest! {
        #[test]
        fn prop_three_tokens_accepted(
            a in "[^.]*",
            b in "[^.]*",
            c in "[^.]*",
        ) {
            let phrase = format!("{a}.{b}.{c}");
            prop_assert!(is_three_word_phrase(&phrase));
        }

        #[test]
        fn prop_other_token_counts_rejected(
            tokens in proptest::collection::vec("[^.]*", 1..8usize)
                .prop_filter("not three tokens", |t| t.len() != 3),
        ) {
            let phrase = tokens.join(".");
            prop_assert!(!is_three_word_phrase(&phrase));
        }
    }
}
