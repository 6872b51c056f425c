use crate::{CharClassCounts, CharCount, WordCount};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A word is a maximal single-script run; mixed-script runs split.
    static ref HANGUL_RUN: Regex = Regex::new(r"[가-힣]+").unwrap();
    static ref LATIN_RUN: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Count characters with and without spaces.
pub fn count_chars(text: &str) -> CharCount {
    CharCount {
        total: text.chars().count(),
        without_spaces: text.chars().filter(|&c| c != ' ').count(),
    }
}

/// Count words per script, independently for Hangul and Latin runs.
pub fn count_words(text: &str) -> WordCount {
    WordCount {
        hangul: HANGUL_RUN.find_iter(text).count(),
        latin: LATIN_RUN.find_iter(text).count(),
    }
}

/// Classify every character into exactly one class.
pub fn classify_chars(text: &str) -> CharClassCounts {
    let mut counts = CharClassCounts::default();
    for c in text.chars() {
        if is_hangul_syllable(c) {
            counts.hangul += 1;
        } else if c.is_ascii_alphabetic() {
            counts.latin += 1;
        } else if c.is_ascii_digit() {
            counts.digit += 1;
        } else if c.is_whitespace() {
            counts.whitespace += 1;
        } else {
            counts.other += 1;
        }
    }
    counts
}

/// Precomposed Hangul syllable block (U+AC00..=U+D7A3).
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_excludes_spaces_only() {
        let counts = count_chars("한 줄\t둘");
        assert_eq!(counts.total, 6);
        // The tab still counts; only U+0020 is dropped.
        assert_eq!(counts.without_spaces, 5);
    }

    #[test]
    fn test_space_delta_matches_space_count() {
        for text in ["a b c", "안녕 하세요  !", "no-spaces", " ", "탭\t과 줄\n바꿈 "] {
            let counts = count_chars(text);
            let spaces = text.chars().filter(|&c| c == ' ').count();
            assert_eq!(counts.total - counts.without_spaces, spaces);
        }
    }

    #[test]
    fn test_word_runs_per_script() {
        let words = count_words("안녕hello세상 world");
        assert_eq!(words.hangul, 2); // 안녕, 세상
        assert_eq!(words.latin, 2); // hello, world
        assert_eq!(words.total(), 4);
    }

    #[test]
    fn test_no_words() {
        let words = count_words("123 !@# \n");
        assert_eq!(words.hangul, 0);
        assert_eq!(words.latin, 0);
    }

    #[test]
    fn test_classify_mixed_text() {
        let classes = classify_chars("Hello 세계 123!");
        assert_eq!(classes.hangul, 2);
        assert_eq!(classes.latin, 5);
        assert_eq!(classes.digit, 3);
        assert_eq!(classes.whitespace, 2);
        assert_eq!(classes.other, 1);
        assert_eq!(classes.total(), 13);
    }

    #[test]
    fn test_classes_partition_the_text() {
        for text in ["Hello 세계 123!", "ㄱㄴㄷ jamo는 other로 분류", "\t\n  ", "éàè"] {
            let classes = classify_chars(text);
            assert_eq!(classes.total(), text.chars().count());
        }
    }

    #[test]
    fn test_jamo_is_not_a_syllable() {
        // Uncomposed jamo sit outside U+AC00..=U+D7A3.
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(!is_hangul_syllable('a'));
    }
}
