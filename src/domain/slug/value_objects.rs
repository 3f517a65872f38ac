use super::generator::{is_canonical, slugify};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slug known to be in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] unless `value` is already a
    /// canonical slug.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_canonical(&value) {
            return Err(DomainError::Validation(format!(
                "slug must be lowercase kebab-case: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Slugify display text; `None` when nothing retainable is left.
    #[must_use]
    pub fn from_display(text: &str) -> Option<Self> {
        let value = slugify(text);
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        String::from(self)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
