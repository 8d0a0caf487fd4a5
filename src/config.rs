//! Configuration for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// The ASCII punctuation set used by the default configuration.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Configuration for the normalization pipeline.
///
/// Each flag enables one pipeline stage. The stages always run in the same
/// fixed order; disabling a stage skips it without affecting the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Strip HTML markup, keeping only visible text.
    /// Default: true.
    pub strip_html: bool,

    /// Convert all text to lowercase.
    /// Default: true.
    pub lowercase: bool,

    /// Transliterate non-ASCII characters to their closest ASCII form.
    /// Default: true.
    pub transliterate: bool,

    /// Replace punctuation characters with single spaces.
    /// Default: true.
    pub strip_punctuation: bool,

    /// Characters treated as punctuation by the punctuation stage.
    /// Default: the ASCII punctuation set.
    pub punctuation: String,

    /// Expand purely numeric tokens into English cardinal words.
    /// Default: true.
    pub expand_numerals: bool,

    /// Remove English stop words.
    /// Default: true.
    pub filter_stop_words: bool,

    /// Reduce the remaining tokens to their dictionary base form.
    /// Default: true.
    pub lemmatize: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strip_html: true,
            lowercase: true,
            transliterate: true,
            strip_punctuation: true,
            punctuation: ASCII_PUNCTUATION.to_string(),
            expand_numerals: true,
            filter_stop_words: true,
            lemmatize: true,
        }
    }
}
