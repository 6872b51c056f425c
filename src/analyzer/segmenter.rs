use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Terminator plus any trailing whitespace, consumed by the split.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]\s*").unwrap();
}

/// Split on line feeds. N line breaks yield N+1 lines, empty lines included.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Split at sentence terminators (`.`, `!`, `?`).
///
/// Terminators are consumed, and a trailing empty segment after final
/// punctuation is kept, so the segment count is the sentence count users
/// expect: trailing punctuation still closes a sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY.split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_include_empty_ones() {
        assert_eq!(split_lines("한 줄.\n둘째 줄."), vec!["한 줄.", "둘째 줄."]);
        assert_eq!(split_lines("a\n\nb").len(), 3);
        assert_eq!(split_lines("no breaks").len(), 1);
    }

    #[test]
    fn test_sentences_consume_terminators() {
        let sentences = split_sentences("한 줄.\n둘째 줄.");
        assert_eq!(sentences, vec!["한 줄", "둘째 줄", ""]);
    }

    #[test]
    fn test_terminator_variants() {
        let sentences = split_sentences("정말? 네! 좋아요.");
        assert_eq!(sentences, vec!["정말", "네", "좋아요", ""]);
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        assert_eq!(split_sentences("끝나지 않은 문장"), vec!["끝나지 않은 문장"]);
    }
}
