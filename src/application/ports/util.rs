// src/application/ports/util.rs

/// Turns free text into a URL-safe token: ASCII transliteration, lowercase,
/// runs of other characters collapsed into one hyphen, no edge hyphens.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
