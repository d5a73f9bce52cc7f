/// Slug used when a title contains no ASCII letters or digits.
pub const SLUG_PLACEHOLDER: &str = "fahrzeug";

/// Generate a URL- and filename-safe slug from a listing title.
///
/// Lower-cases `text`, collapses every run of characters outside `[a-z0-9]`
/// into one `-`, and trims leading and trailing hyphens. Returns
/// [`SLUG_PLACEHOLDER`] when nothing remains.
///
/// Umlauts and other non-ASCII letters count as separators, so
/// `"Großraum"` becomes `"gro-raum"`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        SLUG_PLACEHOLDER.to_owned()
    } else {
        slug
    }
}
