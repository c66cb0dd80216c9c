//! Slug-safe directory names for skill output.

use unicode_normalization::UnicodeNormalization;

/// Fallback when an id has no usable characters.
pub const EMPTY_SLUG: &str = "skill";

/// Turn a skill id into a directory name made of `[a-z0-9-]`.
///
/// Ids are NFKD-normalized so accented letters keep their base letter, every
/// other run of non-alphanumeric characters becomes one `-`, and leading or
/// trailing dashes are dropped: `"frontend/React (@vince)"` becomes
/// `"frontend-react-vince"`.
pub fn slugify(id: &str) -> String {
    let mut slug = String::with_capacity(id.len());
    let mut pending_dash = false;

    for c in id.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() || !is_combining_mark(c) {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F)
}
