//! Message catalog: the immutable, per-language tree of message templates.
//!
//! A [`Catalog`] maps language tags to [`MessageContainer`]s. Each container
//! is a tree of [`MessageNode`]s addressed by dot-delimited keys, where a
//! leaf is either a literal string or a [`MessageBuilder`] rendering a
//! parameter record into a string.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Parameter record passed verbatim to message builders.
pub type MessageParams = Map<String, Value>;

/// A pure function producing a rendered message from a parameter record.
pub type MessageBuilder = Arc<dyn Fn(&MessageParams) -> String + Send + Sync>;

/// A node in a message tree.
///
/// Terminal nodes are either a literal message or a builder; `Container`
/// nodes hold further segments of the key path.
#[derive(Clone)]
pub enum MessageNode {
    /// A literal message string, returned as-is.
    Literal(String),
    /// A builder invoked with the caller's parameter record.
    Builder(MessageBuilder),
    /// A nested mapping from key segment to node.
    Container(BTreeMap<String, MessageNode>),
}

impl fmt::Debug for MessageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
            Self::Container(children) => f.debug_tuple("Container").field(children).finish(),
        }
    }
}

/// Nested message tree for a single language.
///
/// Built once with the `with_*` methods and never mutated afterwards. Shape
/// is not validated eagerly; a key that leads nowhere is discovered at
/// lookup time and handled by the caller's fallback.
#[derive(Debug, Clone, Default)]
pub struct MessageContainer {
    entries: BTreeMap<String, MessageNode>,
}

impl MessageContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal message under `segment`.
    pub fn with_literal(mut self, segment: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries
            .insert(segment.into(), MessageNode::Literal(message.into()));
        self
    }

    /// Add a parameterized message builder under `segment`.
    pub fn with_builder<F>(mut self, segment: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&MessageParams) -> String + Send + Sync + 'static,
    {
        self.entries
            .insert(segment.into(), MessageNode::Builder(Arc::new(builder)));
        self
    }

    /// Add a nested container under `segment`.
    pub fn with_container(mut self, segment: impl Into<String>, container: MessageContainer) -> Self {
        self.entries
            .insert(segment.into(), MessageNode::Container(container.entries));
        self
    }

    /// Walk a dot-delimited key through the tree.
    ///
    /// Returns `None` as soon as a segment is missing or a non-container
    /// node is hit before the last segment.
    pub(crate) fn lookup(&self, message_key: &str) -> Option<&MessageNode> {
        let mut segments = message_key.split('.').peekable();
        let mut children = &self.entries;

        loop {
            let segment = segments.next()?;
            let node = children.get(segment)?;

            if segments.peek().is_none() {
                return Some(node);
            }

            match node {
                MessageNode::Container(next) => children = next,
                _ => return None,
            }
        }
    }
}

/// Immutable mapping from language tag to that language's message tree.
///
/// Created once at startup and owned by the translator; entries keep their
/// insertion order, which is also the order languages are offered to the
/// negotiation engine.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, MessageContainer)>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the message container for `tag`.
    pub fn with_language(mut self, tag: impl Into<String>, container: MessageContainer) -> Self {
        let tag = tag.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == tag) {
            Some(entry) => entry.1 = container,
            None => self.entries.push((tag, container)),
        }
        self
    }

    /// Language tags in insertion order.
    pub fn language_tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    pub(crate) fn container(&self, tag: &str) -> Option<&MessageContainer> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == tag)
            .map(|(_, container)| container)
    }
}
