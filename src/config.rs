// src/config.rs
use crate::domain::slug::is_canonical;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    slug_fallback_prefix: String,
    slug_max_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_slug_fallback_prefix() -> String {
    "business".into()
}

const fn default_slug_max_attempts() -> u32 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slug_fallback_prefix: default_slug_fallback_prefix(),
            slug_max_attempts: default_slug_max_attempts(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables.
    ///
    /// Anything unset falls back to its default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-slug fallback prefix or a
    /// zero attempt limit.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slug_fallback_prefix = lookup("SLUG_FALLBACK_PREFIX")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(default_slug_fallback_prefix);

        if !is_canonical(&slug_fallback_prefix) {
            return Err(ConfigError::Invalid(format!(
                "SLUG_FALLBACK_PREFIX must be a lowercase kebab-case slug, got {slug_fallback_prefix:?}"
            )));
        }

        let slug_max_attempts = lookup("SLUG_MAX_ATTEMPTS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or_else(default_slug_max_attempts);

        if slug_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            slug_fallback_prefix,
            slug_max_attempts,
        })
    }

    /// Prefix for generated slugs when a display name has no usable characters.
    #[must_use]
    pub fn slug_fallback_prefix(&self) -> &str {
        &self.slug_fallback_prefix
    }

    #[must_use]
    pub const fn slug_max_attempts(&self) -> u32 {
        self.slug_max_attempts
    }
}
