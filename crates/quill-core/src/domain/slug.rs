//! URL slug generation for post titles.
//!
//! The base slug is a pure function of the title. Uniqueness is left to the
//! datastore: callers walk [`candidates`] until an insert stops colliding.

use chrono::{DateTime, Utc};

/// Base used when a title has no ASCII letters or digits at all.
pub const FALLBACK_SLUG: &str = "post";

/// Number of slugs tried before giving up on a title.
pub const MAX_SLUG_ATTEMPTS: usize = 8;

/// Lower-case the title, turn spaces into hyphens, drop everything outside
/// `[a-z0-9-]`, collapse hyphen runs and trim hyphens from both ends.
///
/// Returns an empty string when nothing eligible remains.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace(' ', "-");
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
    {
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    slug.trim_matches('-').to_string()
}

/// [`slugify`], falling back to [`FALLBACK_SLUG`] so stored slugs are never empty.
pub fn base_slug(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Second-resolution disambiguation suffix, e.g. `20240131235959`.
pub fn timestamp_suffix(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

/// Slugs to try in order: the base, the base with a timestamp suffix, then
/// the timestamped slug with a counter for collisions within the same second.
pub fn candidates(base: &str, at: DateTime<Utc>) -> Vec<String> {
    let stamped = format!("{base}-{}", timestamp_suffix(at));

    let mut out = Vec::with_capacity(MAX_SLUG_ATTEMPTS);
    out.push(base.to_string());
    out.push(stamped.clone());
    for n in 2..MAX_SLUG_ATTEMPTS {
        out.push(format!("{stamped}-{n}"));
    }
    out
}

/// Whether `slug` is `base` itself or one of its disambiguated forms
/// (`base-YYYYMMDDHHMMSS` or `base-YYYYMMDDHHMMSS-N`).
pub fn is_variant_of(slug: &str, base: &str) -> bool {
    let Some(rest) = slug.strip_prefix(base) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    let Some(rest) = rest.strip_prefix('-') else {
        return false;
    };

    let (stamp, counter) = match rest.split_once('-') {
        Some((stamp, counter)) => (stamp, Some(counter)),
        None => (rest, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    stamp.len() == 14 && all_digits(stamp) && counter.is_none_or(all_digits)
}
