//! Typed error carrying a localized message plus its stable message key.

use serde::Serialize;
use thiserror::Error;

/// Error raised on behalf of a caller via [`Translator::fail`].
///
/// `Display` renders the localized text; `key` is the original,
/// untranslated message key. Callers branch on `key` — the display text
/// varies with the resolved language and is for humans only.
///
/// [`Translator::fail`]: crate::Translator::fail
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct LocalizedError {
    message: String,
    key: String,
}

impl LocalizedError {
    pub(crate) fn new(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: key.into(),
        }
    }

    /// Localized, display-oriented message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original message key, stable across languages.
    pub fn key(&self) -> &str {
        &self.key
    }
}
