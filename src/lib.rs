//! Localized message resolution with language negotiation and key fallback.
//!
//! Given a catalog of message templates keyed by language and a dotted
//! message key, the [`Translator`] negotiates the caller's preferred
//! language, walks the key through that language's message tree and renders
//! the result. Keys that resolve to nothing come back unchanged, so
//! translation never fails at runtime.
//!
//! # Architecture
//!
//! - `catalog`: the immutable per-language message trees and parameter types
//! - `negotiation`: supported-tag set and best-match language negotiation
//! - `config`: the preferred-language signal, read fresh on every call
//! - `translator`: the component tying selection and resolution together
//! - `error`: typed error carrying localized text plus the stable key
//!
//! # Example
//!
//! Hosts typically build one translator at startup and share it:
//!
//! ```
//! use message_translator::{Catalog, MessageContainer, MessageParams, Translator};
//! use serde_json::{json, Value};
//!
//! let catalog = Catalog::new().with_language(
//!     "en",
//!     MessageContainer::new().with_container(
//!         "order",
//!         MessageContainer::new()
//!             .with_literal("notFound", "Order not found")
//!             .with_builder("invalidStatus", |params: &MessageParams| {
//!                 let status = params
//!                     .get("status")
//!                     .and_then(Value::as_str)
//!                     .unwrap_or_default();
//!                 format!("Invalid order status: {}", status)
//!             }),
//!     ),
//! );
//!
//! let translator = Translator::new(catalog)?;
//!
//! assert_eq!(translator.translate("order.notFound"), "Order not found");
//!
//! let mut params = MessageParams::new();
//! params.insert("status".to_string(), json!("pending"));
//! assert_eq!(
//!     translator.translate_with("order.invalidStatus", &params),
//!     "Invalid order status: pending"
//! );
//!
//! // Unknown keys degrade to the key itself
//! assert_eq!(translator.translate("order.unknown"), "order.unknown");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod catalog;
mod config;
mod error;
mod negotiation;
mod translator;

pub use catalog::{Catalog, MessageBuilder, MessageContainer, MessageNode, MessageParams};
pub use config::{LanguagePreference, DEFAULT_LANGUAGE, PREFERRED_LANGUAGE_VAR};
pub use error::LocalizedError;
pub use translator::Translator;
