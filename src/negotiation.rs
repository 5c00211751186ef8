//! Language negotiation over the catalog's supported-tag set.
//!
//! Wraps `fluent-langneg`: exact matches win, region-qualified requests
//! (e.g. "es-AR") resolve to their base supported tag, and anything
//! unmatchable falls back to the default tag.

use anyhow::{bail, Result};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::config::DEFAULT_LANGUAGE;

/// The set of language tags a translator resolves against.
///
/// Built once from the catalog's key set; the tags are validated here, which
/// is the only construction-time failure the component has. `tags` and
/// `identifiers` are parallel: `identifiers[i]` is the parsed form of
/// `tags[i]`.
#[derive(Debug)]
pub(crate) struct SupportedLanguages {
    tags: Vec<String>,
    identifiers: Vec<LanguageIdentifier>,
    default: LanguageIdentifier,
}

impl SupportedLanguages {
    /// Parse and register the supported tag set.
    ///
    /// Fails on the first tag that is not a valid language identifier.
    pub(crate) fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut registered = Vec::new();
        let mut identifiers = Vec::new();

        for tag in tags {
            let identifier: LanguageIdentifier = match tag.parse() {
                Ok(identifier) => identifier,
                Err(_) => bail!("Invalid language tag '{}' in catalog", tag),
            };
            registered.push(tag.to_string());
            identifiers.push(identifier);
        }

        let default: LanguageIdentifier = DEFAULT_LANGUAGE
            .parse()
            .expect("Default language tag should always be valid");

        Ok(Self {
            tags: registered,
            identifiers,
            default,
        })
    }

    /// Map a requested tag to the best supported tag.
    ///
    /// Unparseable or unmatchable requests resolve to the default tag.
    pub(crate) fn negotiate(&self, requested: &str) -> &str {
        let requested_identifiers: Vec<LanguageIdentifier> = match requested.parse() {
            Ok(identifier) => vec![identifier],
            Err(_) => {
                warn!(
                    "Preferred language '{}' is not a valid language tag, using default",
                    requested
                );
                Vec::new()
            }
        };

        let negotiated = negotiate_languages(
            &requested_identifiers,
            &self.identifiers,
            Some(&self.default),
            NegotiationStrategy::Filtering,
        );

        match negotiated.first() {
            Some(best) => self
                .identifiers
                .iter()
                .position(|identifier| identifier == *best)
                .map(|index| self.tags[index].as_str())
                .unwrap_or(DEFAULT_LANGUAGE),
            None => {
                debug!("No language matched '{}', using default", requested);
                DEFAULT_LANGUAGE
            }
        }
    }
}
