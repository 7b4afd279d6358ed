//! Key phrase extraction
//!
//! Splits page text on sentence punctuation and keeps the segments that
//! look like readable phrases.

/// Maximum phrases kept per page
pub const MAX_PHRASES_PER_PAGE: usize = 8;

/// Shortest phrase kept, in characters
pub const MIN_PHRASE_CHARS: usize = 10;

/// Longest phrase kept, in characters
pub const MAX_PHRASE_CHARS: usize = 100;

fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | ':')
}

/// Extract up to eight key phrases from `text`, in original order
pub fn extract_phrases(text: &str) -> Vec<String> {
    text.split(is_delimiter)
        .map(str::trim)
        .filter(|segment| is_key_phrase(segment))
        .take(MAX_PHRASES_PER_PAGE)
        .map(str::to_string)
        .collect()
}

/// Whether an already trimmed segment qualifies as a key phrase
pub fn is_key_phrase(segment: &str) -> bool {
    let len = segment.chars().count();
    (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len)
        && has_letter_run(segment, 3)
        && !is_all_digits(segment)
}

fn has_letter_run(segment: &str, min_run: usize) -> bool {
    let mut run = 0;
    for c in segment.chars() {
        if c.is_ascii_alphabetic() {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn is_all_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_all_delimiters() {
        let text = "The first phrase is here. A second one follows! \
                    Is this the third one? Fourth comes next; Fifth after colon: done";
        assert_eq!(
            extract_phrases(text),
            vec![
                "The first phrase is here",
                "A second one follows",
                "Is this the third one",
                "Fourth comes next",
                "Fifth after colon",
            ]
        );
    }

    #[test]
    fn test_length_bounds() {
        let nine = "abcdefghi";
        let ten = "abcdefghij";
        let hundred = "a".repeat(100);
        let too_long = "a".repeat(101);
        let text = format!("{}. {}. {}. {}", nine, ten, hundred, too_long);

        assert_eq!(extract_phrases(&text), vec![ten.to_string(), hundred]);
    }

    #[test]
    fn test_requires_three_consecutive_letters() {
        assert!(!is_key_phrase("a1 b2 c3 d4 e5"));
        assert!(!is_key_phrase("ab 12 cd 34 ef"));
        assert!(is_key_phrase("ab 12 cde 34 f"));
    }

    #[test]
    fn test_numeric_segments_dropped() {
        assert!(!is_key_phrase("12345678901"));
        assert!(extract_phrases("3.14159265358979").is_empty());
    }

    #[test]
    fn test_caps_at_eight_in_order() {
        let text: String = (0..12)
            .map(|i| format!("Sentence number {} here.", i))
            .collect();
        let phrases = extract_phrases(&text);

        assert_eq!(phrases.len(), MAX_PHRASES_PER_PAGE);
        assert_eq!(phrases[0], "Sentence number 0 here");
        assert_eq!(phrases[7], "Sentence number 7 here");
    }

    #[test]
    fn test_segments_are_trimmed() {
        assert_eq!(
            extract_phrases("   padded phrase text   ."),
            vec!["padded phrase text"]
        );
    }

    #[test]
    fn test_no_qualifying_segments() {
        assert!(extract_phrases("").is_empty());
        assert!(extract_phrases("Short. Tiny! Ok?").is_empty());
    }

    #[test]
    fn test_every_phrase_satisfies_filters() {
        let text = "Mind maps arrange ideas radially. 2024. x. \
                    The quick brown fox jumps over the lazy dog; 12:30 \
                    Something completely different happens at the end!";
        for phrase in extract_phrases(text) {
            let len = phrase.chars().count();
            assert!((10..=100).contains(&len));
            assert!(has_letter_run(&phrase, 3));
            assert!(!is_all_digits(&phrase));
            assert_eq!(phrase.trim(), phrase);
        }
    }
}
