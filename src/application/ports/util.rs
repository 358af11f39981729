// src/application/ports/util.rs

/// Turns display text into a URL-safe token: lowercase ASCII alphanumerics
/// and single hyphens, no leading or trailing hyphen. Empty output for
/// input with no alphanumeric content is the caller's problem.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
