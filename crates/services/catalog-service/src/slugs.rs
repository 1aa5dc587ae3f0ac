//! Slug generation for category names.

/// Deterministic text-to-slug transform.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Default generator: transliterates to ASCII (diacritics stripped,
/// `đ` becomes `d`), lowercases, and joins words with `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator;

impl SlugGenerator for Transliterator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
