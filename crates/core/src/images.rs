//! Airport image path derivation.
//!
//! Uploaded images are stored at `uploads/airports/{slug}-{uuid}{.ext}` where
//! `slug` comes from the airport name. The random suffix keeps repeated
//! uploads for the same airport from overwriting each other.

use uuid::Uuid;

/// Directory (relative to the media root) that holds airport images.
pub const AIRPORT_IMAGE_DIR: &str = "uploads/airports";

/// Slug used when a name has no ASCII word characters at all.
const FALLBACK_SLUG: &str = "airport";

/// Reduce `text` to a lowercase ASCII slug.
///
/// Alphanumerics and `_` are kept, runs of whitespace and `-` become a single
/// `-`, and everything else (punctuation, non-ASCII letters) is dropped.
/// Leading and trailing `-`/`_` are trimmed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Relative storage path for a new image of the airport called `airport_name`.
///
/// `extension` is given without the leading dot, e.g. `"png"`.
pub fn airport_image_path(airport_name: &str, extension: &str, suffix: Uuid) -> String {
    let mut slug = slugify(airport_name);
    if slug.is_empty() {
        slug = FALLBACK_SLUG.to_string();
    }
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    if ext.is_empty() {
        format!("{AIRPORT_IMAGE_DIR}/{slug}-{suffix}")
    } else {
        format!("{AIRPORT_IMAGE_DIR}/{slug}-{suffix}.{ext}")
    }
}
