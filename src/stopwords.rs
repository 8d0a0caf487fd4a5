//! English stop-word filtering.

use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The English stop-word list (the NLTK set, lowercase).
///
/// Contraction entries are kept even though the default pipeline strips
/// apostrophes before filtering; the stage contract is an exact match
/// against this list, independent of how the input was produced.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Lazily-built lookup set, shared read-only across all normalization calls.
static ENGLISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let set: HashSet<&'static str> = ENGLISH.iter().copied().collect();
    debug!("Loaded {} English stop words", set.len());
    set
});

/// Returns true if `token` is an English stop word.
///
/// Matching is a case-sensitive exact match against the lowercase list.
/// The pipeline lowercases before filtering, so in practice the stage
/// behaves case-insensitively.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_SET.contains(token)
}

/// Removes stop words, keeping the remaining tokens in their original order.
pub fn filter_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stop_words() {
        for word in ["the", "is", "on", "i", "have", "and", "not"] {
            assert!(is_stop_word(word), "{} should be a stop word", word);
        }
    }

    #[test]
    fn test_content_words_kept() {
        for word in ["cat", "mat", "three", "hello", "world"] {
            assert!(!is_stop_word(word), "{} should not be a stop word", word);
        }
    }

    #[test]
    fn test_case_sensitive_match() {
        // The list is lowercase; uppercase forms only match after the
        // pipeline's lowercasing stage.
        assert!(!is_stop_word("The"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let tokens: Vec<String> = ["the", "cat", "is", "on", "the", "mat"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(filter_stop_words(tokens), vec!["cat", "mat"]);
    }

    #[test]
    fn test_all_stop_words_yield_empty() {
        let tokens: Vec<String> = ["the", "of", "an"].iter().map(|s| s.to_string()).collect();
        assert!(filter_stop_words(tokens).is_empty());
    }

    #[test]
    fn test_list_is_lowercase_and_deduplicated() {
        assert!(ENGLISH.iter().all(|w| *w == w.to_lowercase()));
        assert_eq!(ENGLISH_SET.len(), ENGLISH.len());
    }
}
