//! The translator: language selection plus dotted-key resolution.

use anyhow::Result;
use tracing::debug;

use crate::catalog::{Catalog, MessageNode, MessageParams};
use crate::config::LanguagePreference;
use crate::error::LocalizedError;
use crate::negotiation::SupportedLanguages;

/// Resolves dotted message keys against a per-language catalog.
///
/// Owns the immutable [`Catalog`] and registers its language tags as the
/// supported set at construction. Each call selects the best language for
/// the caller's current preference, walks the key through that language's
/// tree and renders the result; anything unresolvable degrades to returning
/// the key itself. Stateless beyond the catalog, so a single instance is
/// safely shared across threads.
#[derive(Debug)]
pub struct Translator {
    catalog: Catalog,
    supported: SupportedLanguages,
    preference: LanguagePreference,
}

impl Translator {
    /// Build a translator over `catalog` with the environment-driven
    /// preference signal.
    ///
    /// Fails only if a catalog key is not a valid language tag; container
    /// shape is not validated eagerly.
    pub fn new(catalog: Catalog) -> Result<Self> {
        Self::with_preference(catalog, LanguagePreference::default())
    }

    /// Build a translator with an explicit preference source.
    pub fn with_preference(catalog: Catalog, preference: LanguagePreference) -> Result<Self> {
        let supported = SupportedLanguages::from_tags(catalog.language_tags())?;

        Ok(Self {
            catalog,
            supported,
            preference,
        })
    }

    /// The catalog's language tags, in registration order.
    pub fn supported_languages(&self) -> Vec<&str> {
        self.catalog.language_tags().collect()
    }

    /// Translate `message_key` with an empty parameter record.
    pub fn translate(&self, message_key: &str) -> String {
        self.translate_with(message_key, &MessageParams::new())
    }

    /// Translate `message_key`, passing `params` to a builder message.
    ///
    /// Never fails: a key that resolves to nothing comes back unchanged.
    pub fn translate_with(&self, message_key: &str, params: &MessageParams) -> String {
        let language = self.select_language();
        self.resolve(language, message_key, params)
    }

    /// Build a [`LocalizedError`] for `message_key` with an empty parameter
    /// record.
    pub fn localized_error(&self, message_key: &str) -> LocalizedError {
        self.localized_error_with(message_key, &MessageParams::new())
    }

    /// Build a [`LocalizedError`] whose display text is the translation of
    /// `message_key` and whose key is `message_key` itself.
    pub fn localized_error_with(&self, message_key: &str, params: &MessageParams) -> LocalizedError {
        LocalizedError::new(self.translate_with(message_key, params), message_key)
    }

    /// Always-failing variant of [`localized_error`](Self::localized_error),
    /// for `?`-style control flow.
    pub fn fail<T>(&self, message_key: &str) -> Result<T, LocalizedError> {
        Err(self.localized_error(message_key))
    }

    /// Always-failing variant of
    /// [`localized_error_with`](Self::localized_error_with).
    pub fn fail_with<T>(&self, message_key: &str, params: &MessageParams) -> Result<T, LocalizedError> {
        Err(self.localized_error_with(message_key, params))
    }

    fn select_language(&self) -> &str {
        let requested = self.preference.requested();
        self.supported.negotiate(&requested)
    }

    fn resolve(&self, language: &str, message_key: &str, params: &MessageParams) -> String {
        let node = self
            .catalog
            .container(language)
            .and_then(|container| container.lookup(message_key));

        match node {
            // An empty literal counts as missing
            Some(MessageNode::Literal(text)) if !text.is_empty() => text.clone(),
            Some(MessageNode::Builder(builder)) => builder(params),
            _ => {
                debug!(
                    "No translation for '{}' in language '{}', returning key",
                    message_key, language
                );
                message_key.to_string()
            }
        }
    }
}
