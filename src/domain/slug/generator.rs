/// Turn display text into a canonical slug.
///
/// Lowercases the input, drops everything that is not an ASCII letter, digit,
/// whitespace or hyphen, and joins the remaining words with single hyphens.
/// Removed characters do not split words: `"O'Brien"` becomes `"obrien"`.
/// Non-ASCII letters are dropped rather than transliterated.
///
/// The result is either empty or matches `^[a-z0-9]([a-z0-9-]*[a-z0-9])?$`,
/// and `slugify(&slugify(x)) == slugify(x)`.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}

/// Whether `value` is already in canonical slug form (non-empty).
#[must_use]
pub fn is_canonical(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
