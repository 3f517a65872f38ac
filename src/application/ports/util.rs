// src/application/ports/util.rs
/// Converts display text into a URL-safe slug. Implementations must be pure.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
