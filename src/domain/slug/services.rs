use std::sync::Arc;

use crate::application::ports::{ClockPort, SlugGeneratorPort};
use crate::config::AppConfig;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::registry::SlugRegistry;
use crate::domain::slug::value_objects::Slug;

/// Domain service responsible for producing unique slugs from display names.
pub struct SlugAllocator {
    registry: Arc<dyn SlugRegistry>,
    generator: Arc<SlugGeneratorPort>,
    clock: Arc<ClockPort>,
    fallback_prefix: String,
    max_attempts: u32,
}

impl SlugAllocator {
    #[must_use]
    pub fn new(
        registry: Arc<dyn SlugRegistry>,
        generator: Arc<SlugGeneratorPort>,
        clock: Arc<ClockPort>,
        fallback_prefix: impl Into<String>,
        max_attempts: u32,
    ) -> Self {
        Self {
            registry,
            generator,
            clock,
            fallback_prefix: fallback_prefix.into(),
            max_attempts,
        }
    }

    #[must_use]
    pub fn from_config(
        registry: Arc<dyn SlugRegistry>,
        generator: Arc<SlugGeneratorPort>,
        clock: Arc<ClockPort>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            registry,
            generator,
            clock,
            config.slug_fallback_prefix(),
            config.slug_max_attempts(),
        )
    }

    /// Pick a free slug for `display_name`.
    ///
    /// `current` is the slug the resource already owns, if any. A candidate
    /// equal to it counts as free, so renames that keep the slug are stable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Conflict`] when the base slug and all numbered
    /// variants are taken, and propagates registry failures unchanged.
    pub async fn allocate(&self, display_name: &str, current: Option<&Slug>) -> DomainResult<Slug> {
        let base = self.generator.slugify(display_name);
        let base_slug = if base.is_empty() {
            let seconds = self.clock.now().timestamp().unsigned_abs();
            let generated = format!("{}-{seconds}", self.fallback_prefix);
            tracing::warn!(slug = %generated, "display name has no slug characters, using generated slug");
            generated
        } else {
            base
        };

        let mut candidate = Slug::new(base_slug.clone())?;
        for n in 1..=self.max_attempts {
            if self.is_free(&candidate, current).await? {
                return Ok(candidate);
            }
            tracing::debug!(slug = %candidate, "slug taken, trying next suffix");
            candidate = Slug::new(format!("{base_slug}-{n}"))?;
        }
        if self.is_free(&candidate, current).await? {
            return Ok(candidate);
        }

        tracing::warn!(base = %base_slug, attempts = self.max_attempts, "gave up allocating slug");
        Err(DomainError::Conflict(format!(
            "no free slug for {base_slug:?} after {} attempts",
            self.max_attempts
        )))
    }

    async fn is_free(&self, slug: &Slug, current: Option<&Slug>) -> DomainResult<bool> {
        if current == Some(slug) {
            return Ok(true);
        }
        Ok(!self.registry.is_taken(slug).await?)
    }
}
