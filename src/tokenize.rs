//! Word tokenization on Unicode word boundaries.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into word tokens using Unicode word segmentation (UAX-29).
///
/// Whitespace runs act as separators and never produce tokens; punctuation
/// that does not form part of a word is dropped. Left-to-right order is
/// preserved.
pub fn word_tokens(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(word_tokens("i have 3 cats"), vec!["i", "have", "3", "cats"]);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(word_tokens("one  \t two\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_order_preserved() {
        let tokens = word_tokens("alpha beta gamma delta");
        assert_eq!(tokens, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_contractions_stay_together() {
        // The pipeline strips apostrophes before tokenizing, but the
        // tokenizer itself keeps contractions whole.
        assert_eq!(word_tokens("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(word_tokens("2 plus 2nd"), vec!["2", "plus", "2nd"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(word_tokens("").is_empty());
        assert!(word_tokens("   ").is_empty());
    }
}
