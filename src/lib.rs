//! # Lexnorm - Canonical Text Normalization
//!
//! Lexnorm reduces free-form text to a canonical, whitespace-joined
//! sequence of lemmatized tokens, suitable for search indexing and feature
//! extraction.
//!
//! ## Overview
//!
//! Normalization is an eight-stage linear pipeline; each stage consumes the
//! previous stage's output:
//!
//! 1. HTML stripping (visible text only)
//! 2. Lowercasing
//! 3. Transliteration to ASCII
//! 4. Punctuation removal
//! 5. Word tokenization
//! 6. Numeral-to-word expansion
//! 7. Stop-word filtering
//! 8. Lemmatization
//!
//! Linguistic resources (the stop-word set, tagger lexicon, and lemmatizer
//! exception tables) are process-wide, lazily-initialized, and read-only,
//! so concurrent callers are safe by construction.
//!
//! ## Quick Start
//!
//! ```rust
//! let normalized = lexnorm::normalize("I have 3 Cats!! <br>")?;
//! assert_eq!(normalized, "three cat");
//! # Ok::<(), lexnorm::NormalizeError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`normalizer`] - The pipeline itself
//! - [`html`] - HTML-to-visible-text extraction
//! - [`tokenize`] - Unicode word tokenization
//! - [`numbers`] - Numeral-to-word expansion
//! - [`stopwords`] - English stop-word filtering
//! - [`pos`] - Part-of-speech tagging
//! - [`lemma`] - Reduction to dictionary base forms

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod html;
pub mod lemma;
pub mod normalizer;
pub mod numbers;
pub mod pos;
pub mod stopwords;
pub mod tokenize;

// Re-export commonly used types
pub use config::{NormalizeConfig, ASCII_PUNCTUATION};
pub use error::{NormalizeError, Result};
pub use lemma::LemmaCategory;
pub use normalizer::Normalizer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normalizes text with the default configuration.
///
/// Convenience wrapper around [`Normalizer::default_config`]; construct a
/// [`Normalizer`] directly to reuse a configuration across calls.
pub fn normalize(text: &str) -> Result<String> {
    Normalizer::default_config().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_top_level_normalize() {
        assert_eq!(normalize("Hello, World!").unwrap(), "hello world");
    }
}
