use std::sync::Arc;

mod support;

use booking_core::application::error::ApplicationError;
use booking_core::application::ports::time::Clock;
use booking_core::config::AppConfig;
use booking_core::domain::errors::DomainError;
use booking_core::domain::slug::{Slug, SlugAllocator, SlugRegistry};
use booking_core::infrastructure::DefaultSlugGenerator;
use chrono::{DateTime, TimeZone, Utc};
use support::{FailingSlugRegistry, FixedClock, InMemorySlugRegistry, fixed_now};

fn allocator(registry: Arc<dyn SlugRegistry>, max_attempts: u32) -> SlugAllocator {
    SlugAllocator::new(
        registry,
        Arc::new(DefaultSlugGenerator),
        Arc::new(FixedClock),
        "business",
        max_attempts,
    )
}

#[tokio::test]
async fn free_base_slug_is_used_as_is() {
    let registry = Arc::new(InMemorySlugRegistry::default());
    let slug = allocator(registry.clone(), 10)
        .allocate("  Acme Corp!! ", None)
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "acme-corp");
    assert_eq!(registry.lookups(), 1);
}

#[tokio::test]
async fn collisions_get_numeric_suffixes() {
    let registry = Arc::new(InMemorySlugRegistry::with_taken(["acme", "acme-1"]));
    let slug = allocator(registry, 10).allocate("Acme?", None).await.unwrap();
    assert_eq!(slug.as_str(), "acme-2");
}

#[tokio::test]
async fn sequential_allocations_do_not_collide() {
    let registry = Arc::new(InMemorySlugRegistry::default());
    let allocator = allocator(registry.clone(), 10);

    let mut seen = Vec::new();
    for name in ["Acme!", "Acme?", "ACME"] {
        let slug = allocator.allocate(name, None).await.unwrap();
        registry.claim(&slug);
        seen.push(slug.into_inner());
    }
    assert_eq!(seen, vec!["acme", "acme-1", "acme-2"]);
}

#[tokio::test]
async fn current_slug_is_kept_on_rename() {
    let registry = Arc::new(InMemorySlugRegistry::with_taken(["acme", "acme-1"]));
    let current = Slug::new("acme-1").unwrap();
    let slug = allocator(registry, 10)
        .allocate("ACME", Some(&current))
        .await
        .unwrap();
    assert_eq!(slug, current);
}

#[tokio::test]
async fn empty_display_name_falls_back_to_generated_slug() {
    let registry = Arc::new(InMemorySlugRegistry::default());
    let slug = allocator(registry, 10).allocate("東京!!", None).await.unwrap();
    assert_eq!(slug.as_str(), format!("business-{}", fixed_now().timestamp()));
}

#[tokio::test]
async fn exhausted_attempts_report_conflict() {
    let registry = Arc::new(InMemorySlugRegistry::with_taken(["acme", "acme-1", "acme-2"]));
    let err = allocator(registry.clone(), 2)
        .allocate("acme", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
    assert_eq!(registry.lookups(), 3);
    assert!(ApplicationError::from(err).is_client_error());
}

#[tokio::test]
async fn unbounded_attempt_limit_still_terminates_on_free_suffix() {
    let registry = Arc::new(InMemorySlugRegistry::with_taken(["acme", "acme-1", "acme-2"]));
    let slug = allocator(registry.clone(), u32::MAX)
        .allocate("acme", None)
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "acme-3");
    assert_eq!(registry.lookups(), 4);
}

#[tokio::test]
async fn zero_attempt_limit_checks_only_the_base() {
    let registry = Arc::new(InMemorySlugRegistry::with_taken(["acme"]));
    let err = allocator(registry.clone(), 0)
        .allocate("acme", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
    assert_eq!(registry.lookups(), 1);
}

struct PreEpochClock;

impl Clock for PreEpochClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 55).unwrap()
    }
}

#[tokio::test]
async fn fallback_before_epoch_is_still_a_valid_slug() {
    let allocator = SlugAllocator::new(
        Arc::new(InMemorySlugRegistry::default()),
        Arc::new(DefaultSlugGenerator),
        Arc::new(PreEpochClock),
        "business",
        10,
    );
    let slug = allocator.allocate("???", None).await.unwrap();
    assert_eq!(slug.as_str(), "business-5");
}

#[tokio::test]
async fn registry_errors_propagate() {
    let err = allocator(Arc::new(FailingSlugRegistry), 10)
        .allocate("acme", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Persistence(_)));
}

#[tokio::test]
async fn config_drives_fallback_prefix() {
    let config = AppConfig::from_lookup(|key| match key {
        "SLUG_FALLBACK_PREFIX" => Some("salon".to_string()),
        _ => None,
    })
    .unwrap();
    let allocator = SlugAllocator::from_config(
        Arc::new(InMemorySlugRegistry::default()),
        Arc::new(DefaultSlugGenerator),
        Arc::new(FixedClock),
        &config,
    );
    let slug = allocator.allocate("", None).await.unwrap();
    assert!(slug.as_str().starts_with("salon-"));
}
