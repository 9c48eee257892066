//! Small text helpers shared by the filter, classifier, size-chart and settings code.
//!
//! The functions in this module are intentionally lightweight and dependency-free
//! so the hot filter path stays allocation-light.

pub mod config;

/// What: Case-insensitive substring test against an already lower-cased needle.
///
/// Inputs:
/// - `haystack`: Free text in any case.
/// - `needle_lower`: Needle that the caller has already lower-cased.
///
/// Output:
/// - `true` when `needle_lower` occurs in the lower-cased `haystack`.
///
/// Details:
/// - An empty needle always matches, mirroring `str::contains("")`.
#[must_use]
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle_lower)
}

/// What: Check whether any entry of a free-text list mentions a token.
///
/// Inputs:
/// - `entries`: Prose entries (e.g. key specs).
/// - `needle_lower`: Lower-cased token to look for.
///
/// Output:
/// - `true` if at least one entry contains the token case-insensitively.
#[must_use]
pub fn any_contains_ci(entries: &[String], needle_lower: &str) -> bool {
    entries.iter().any(|e| contains_ci(e, needle_lower))
}

/// What: Turn free text into a URL slug.
///
/// Inputs:
/// - `s`: Arbitrary text such as a path segment or product name.
///
/// Output:
/// - Lower-case ASCII alphanumerics joined by single `-`, no leading/trailing dash.
///
/// Details:
/// - Every run of characters outside `[a-z0-9]` collapses into one dash.
#[must_use]
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for ch in s.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Drop any `?query` and `#fragment` suffix from a request path.
#[must_use]
pub fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// What: Return the last non-empty `/`-separated segment of a path.
///
/// Inputs:
/// - `path`: Request path, optionally carrying a query string or fragment.
///
/// Output:
/// - The final segment, or an empty string for `/` and empty input.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    strip_query_and_fragment(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .unwrap_or("")
}

/// What: Uppercase the first character of a word, leaving the rest untouched.
///
/// Inputs:
/// - `word`: Word to capitalise.
///
/// Output:
/// - New string with the first `char` uppercased.
#[must_use]
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What: Truncate a string to at most `max_chars` characters.
///
/// Inputs:
/// - `s`: Input text.
/// - `max_chars`: Character (not byte) limit.
///
/// Output:
/// - Borrowed prefix of `s` that ends on a char boundary.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Case-insensitive containment helpers
    ///
    /// - Input: Mixed-case haystacks and lower-case needles
    /// - Output: Matches regardless of haystack case; empty needle always matches
    fn util_contains_ci_and_any() {
        assert!(contains_ci("100% Waxed Cotton", "waxed"));
        assert!(!contains_ci("100% Waxed Cotton", "oilskin"));
        assert!(contains_ci("", ""));
        let specs = vec!["Water repellent finish".to_string(), "YKK zips".to_string()];
        assert!(any_contains_ci(&specs, "ykk"));
        assert!(any_contains_ci(&specs, "water"));
        assert!(!any_contains_ci(&specs, "wind"));
        assert!(!any_contains_ci(&[], "water"));
    }

    #[test]
    /// What: Slug and path segment helpers
    ///
    /// - Input: Paths with query strings, fragments, trailing slashes and punctuation
    /// - Output: Clean last segment and dash-joined slugs
    fn util_slugify_and_last_segment() {
        assert_eq!(slugify("Outrider Long Coat"), "outrider-long-coat");
        assert_eq!(slugify("--Swift  (Waxed) Jacket!"), "swift-waxed-jacket");
        assert_eq!(slugify(""), "");
        assert_eq!(
            last_segment("/products/mens/swift-jacket/?ref=nav#top"),
            "swift-jacket"
        );
        assert_eq!(last_segment("/"), "");
        assert_eq!(strip_query_and_fragment("/a/b?x=1"), "/a/b");
    }

    #[test]
    /// What: Capitalisation and char-aware truncation
    ///
    /// - Input: ASCII and multi-byte strings
    /// - Output: First letter uppercased; truncation never splits a char
    fn util_capitalize_and_truncate() {
        assert_eq!(capitalize_first("olive"), "Olive");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
