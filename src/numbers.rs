//! Numeral-to-word expansion.

use crate::error::{NormalizeError, Result};
use num2words::Num2Words;

/// Expands purely numeric tokens into English cardinal words, in place.
///
/// A token consisting entirely of ASCII decimal digits is replaced by its
/// cardinal expansion (`"2"` becomes `"two"`, `"21"` becomes
/// `"twenty-one"`). All other tokens pass through unchanged, preserving
/// their position.
pub fn expand_numerals(tokens: Vec<String>) -> Result<Vec<String>> {
    tokens.into_iter().map(expand_token).collect()
}

/// Expands a single token if it is purely numeric.
///
/// Digit strings beyond the converter's integer range keep their digit
/// form rather than failing the whole call.
pub fn expand_token(token: String) -> Result<String> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(token);
    }

    let value = match token.parse::<i64>() {
        Ok(value) => value,
        Err(_) => return Ok(token),
    };

    Num2Words::new(value)
        .to_words()
        .map_err(|err| NormalizeError::NumeralExpansion(format!("{}: {}", token, err)))
}
