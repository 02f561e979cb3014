//! Person name rules.

use crate::error::GraphError;

/// Check whether a token is an acceptable person name.
///
/// A name is valid when it is non-empty and every character is alphabetic.
/// The test is Unicode-aware, so `Åsa` and `Jürgen` are accepted while
/// digits, punctuation and whitespace are not.
pub fn is_valid_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Validate a name, turning a rejection into a [`GraphError`].
pub fn validate_name(token: &str) -> Result<(), GraphError> {
    if is_valid_name(token) {
        Ok(())
    } else {
        Err(GraphError::InvalidName(token.to_string()))
    }
}
