//! Equivalence and display ordering of URIs.
//!
//! The standard comparison traits on [`Uri`] work on the raw bytes. The
//! functions here compare URIs the way a link list is deduplicated and
//! sorted for presentation.

use crate::{imp::View, pct_enc::percent_decode, Uri};
use alloc::borrow::Cow;
use core::cmp::Ordering;

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

pub(crate) fn equals(a: View<'_>, b: View<'_>) -> bool {
    eq_ignore_case(a.scheme_str(), b.scheme_str())
        && eq_ignore_case(a.authority_str(), b.authority_str())
        && percent_decode(a.path().as_str()) == percent_decode(b.path().as_str())
        && a.query_str() == b.query_str()
        && a.fragment_str() == b.fragment_str()
}

pub(crate) fn is_same_resource(a: View<'_>, b: View<'_>) -> bool {
    a.path() == b.path()
        && a.authority_str() == b.authority_str()
        && a.query_str() == b.query_str()
        && a.scheme_str() == b.scheme_str()
}

fn hostname(v: View<'_>) -> Cow<'_, str> {
    v.authority()
        .map_or(Cow::Borrowed(""), |auth| auth.hostname())
}

pub(crate) fn sort_cmp(a: View<'_>, b: View<'_>) -> Ordering {
    a.dir_count()
        .cmp(&b.dir_count())
        .then_with(|| locale_compare(&hostname(a), &hostname(b)))
        .then_with(|| locale_compare(a.path().as_str(), b.path().as_str()))
        .then_with(|| locale_compare(a.query_str(), b.query_str()))
        .then_with(|| locale_compare(a.fragment_str(), b.fragment_str()))
        .then_with(|| locale_compare(a.scheme_str(), b.scheme_str()))
}

/// Collation key of a character: punctuation and whitespace first,
/// then digits, then letters and everything else, ignoring case.
fn collation_key(ch: char) -> (u8, char) {
    let class = if ch.is_whitespace() || ch.is_ascii_punctuation() {
        0
    } else if ch.is_numeric() {
        1
    } else {
        2
    };
    (class, ch.to_lowercase().next().unwrap_or(ch))
}

/// Compares two strings in a locale-independent approximation of
/// dictionary order.
///
/// Punctuation sorts before digits, and digits before letters. Letters
/// are compared ignoring case first, with lowercase breaking ties before
/// uppercase. No locale data is consulted.
///
/// # Examples
///
/// ```
/// use lenient_uri::cmp::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("-b", "1a"), Ordering::Less);
/// assert_eq!(locale_compare("9", "a"), Ordering::Less);
/// assert_eq!(locale_compare("same", "same"), Ordering::Equal);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key))
        .then_with(|| b.cmp(a))
}

/// Compares two URI strings for display.
///
/// URIs with fewer directory segments in their paths come first. Ties are
/// broken with [`locale_compare`] on the hostname, then the path, the
/// query, the fragment and the scheme.
///
/// # Examples
///
/// ```
/// use lenient_uri::cmp::sort_function;
///
/// let mut links = ["/a/b/c", "/a/b", "/b", "/a"];
/// links.sort_by(|a, b| sort_function(a, b));
/// assert_eq!(links, ["/a", "/b", "/a/b", "/a/b/c"]);
/// ```
#[must_use]
pub fn sort_function(a: &str, b: &str) -> Ordering {
    Uri::parse(a).sort_cmp(&Uri::parse(b))
}
