//! The eight-stage normalization pipeline.

use crate::config::NormalizeConfig;
use crate::error::Result;
use crate::lemma::{self, LemmaCategory};
use crate::{html, numbers, pos, stopwords, tokenize};
use log::trace;
use unidecode::unidecode;

/// Text normalizer that reduces free-form text to a canonical,
/// space-joined sequence of lemmatized tokens.
///
/// The pipeline is a fixed linear sequence: HTML stripping, lowercasing,
/// transliteration to ASCII, punctuation removal, word tokenization,
/// numeral expansion, stop-word filtering, and lemmatization. Stages never
/// reorder tokens; filtering stages drop tokens, transformation stages map
/// each token to exactly one replacement.
///
/// A `Normalizer` holds no mutable state, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration (all stages on).
    pub fn default_config() -> Self {
        Self::new(NormalizeConfig::default())
    }

    /// Normalizes text into a space-joined sequence of lemmatized tokens.
    ///
    /// Returns an empty string when every token is filtered out. Malformed
    /// HTML and unmappable characters degrade to passthrough; the only
    /// error path is a numeral the expansion collaborator rejects.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let cfg = &self.config;

        let text = if cfg.strip_html {
            html::extract_text(text)
        } else {
            text.to_string()
        };
        let text = if cfg.lowercase {
            text.to_lowercase()
        } else {
            text
        };
        let text = if cfg.transliterate {
            unidecode(&text)
        } else {
            text
        };
        let text = if cfg.strip_punctuation {
            self.strip_punctuation(&text)
        } else {
            text
        };

        let mut tokens = tokenize::word_tokens(&text);
        trace!("Tokenized into {} tokens", tokens.len());

        if cfg.expand_numerals {
            tokens = numbers::expand_numerals(tokens)?;
        }
        if cfg.filter_stop_words {
            tokens = stopwords::filter_stop_words(tokens);
        }
        if cfg.lemmatize {
            tokens = Self::lemmatize_tokens(tokens);
        }
        trace!("{} tokens survive the pipeline", tokens.len());

        Ok(tokens.join(" "))
    }

    /// Replaces every configured punctuation character with a single space.
    fn strip_punctuation(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if self.config.punctuation.contains(c) {
                    ' '
                } else {
                    c
                }
            })
            .collect()
    }

    /// Tags each token, maps the tag to a lemmatization category, and
    /// replaces the token with its base form.
    fn lemmatize_tokens(tokens: Vec<String>) -> Vec<String> {
        pos::tag_sequence(&tokens)
            .into_iter()
            .map(|(word, tag)| lemma::lemmatize(word, LemmaCategory::from_tag(tag)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation_replaces_with_spaces() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.strip_punctuation("don't stop!"), "don t stop ");
        assert_eq!(normalizer.strip_punctuation("a-b_c"), "a b c");
    }

    #[test]
    fn test_custom_punctuation_set() {
        let config = NormalizeConfig {
            punctuation: "!".to_string(),
            ..Default::default()
        };
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.strip_punctuation("a-b!"), "a-b ");
    }

    #[test]
    fn test_stages_can_be_disabled() {
        let config = NormalizeConfig {
            filter_stop_words: false,
            lemmatize: false,
            ..Default::default()
        };
        let normalizer = Normalizer::new(config);
        let result = normalizer.normalize("The cats").unwrap();
        assert_eq!(result, "the cats");
    }

    #[test]
    fn test_normalize_basic() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("The cat is on the mat").unwrap(), "cat mat");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("").unwrap(), "");
    }
}
