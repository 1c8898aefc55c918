// SPDX-License-Identifier: MPL-2.0
//! Message and label text.
//!
//! Text is either a literal string or a resource identifier that the host
//! resolves at render time (for example an i18n message key).

use std::fmt;

/// Opaque identifier of a host-provided resource (string, drawable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Text shown in a snackbar message or on its action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    /// Displayed verbatim.
    Literal(String),
    /// Looked up by the host when rendering.
    Resource(ResourceId),
}

impl Text {
    /// Creates text backed by a host resource.
    pub fn resource(id: impl Into<String>) -> Self {
        Text::Resource(ResourceId::new(id))
    }

    /// Resolves the text, using `lookup` for resources.
    pub fn resolve<F>(&self, lookup: F) -> String
    where
        F: FnOnce(&ResourceId) -> String,
    {
        match self {
            Text::Literal(value) => value.clone(),
            Text::Resource(id) => lookup(id),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::Literal(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::Literal(value)
    }
}

impl From<ResourceId> for Text {
    fn from(id: ResourceId) -> Self {
        Text::Resource(id)
    }
}
