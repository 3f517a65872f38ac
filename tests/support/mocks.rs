// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use booking_core::application::ports::time::Clock;
use booking_core::domain::errors::{DomainError, DomainResult};
use booking_core::domain::slug::{Slug, SlugRegistry};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Fixed timestamp for deterministic tests.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

#[derive(Default)]
pub struct InMemorySlugRegistry {
    taken: Mutex<HashSet<String>>,
    lookups: AtomicUsize,
}

impl InMemorySlugRegistry {
    pub fn with_taken<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: Mutex::new(slugs.into_iter().map(Into::into).collect()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn claim(&self, slug: &Slug) {
        self.taken.lock().unwrap().insert(slug.as_str().to_string());
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugRegistry for InMemorySlugRegistry {
    async fn is_taken(&self, slug: &Slug) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.taken.lock().unwrap().contains(slug.as_str()))
    }
}

pub struct FailingSlugRegistry;

#[async_trait]
impl SlugRegistry for FailingSlugRegistry {
    async fn is_taken(&self, _slug: &Slug) -> DomainResult<bool> {
        Err(DomainError::Persistence("registry unavailable".into()))
    }
}
