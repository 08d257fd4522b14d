//! Case-preserving slug value object.
//!
//! Slugs identify roles and permissions. The platform treats slugs as
//! case-insensitive, but the original spelling is kept for display and
//! serialization: folding happens at comparison time, never at storage time.

use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A case-insensitively compared identifier that preserves its spelling.
///
/// `Slug::new("Admin") == Slug::new("ADMIN")`, yet both display and
/// serialize as originally written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Cow<'static, str>);

impl Slug {
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// The original spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folded form used for comparisons and set membership.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive match against a raw string.
    pub fn matches(&self, other: &str) -> bool {
        self.folded() == other.to_lowercase()
    }
}

impl PartialEq for Slug {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for Slug {}

// Hash must agree with the fold-aware Eq.
impl Hash for Slug {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl ValueObject for Slug {}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Slug {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
