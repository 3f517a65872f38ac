use super::value_objects::Slug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Lookup of slugs already claimed by persisted resources.
#[async_trait]
pub trait SlugRegistry: Send + Sync {
    /// # Errors
    ///
    /// Returns [`crate::domain::errors::DomainError::Persistence`] when the
    /// backing store cannot be queried.
    async fn is_taken(&self, slug: &Slug) -> DomainResult<bool>;
}
