//! Sanitization and escaping of URLs taken from untrusted sources.
//!
//! Every function here returns [`Cow::Borrowed`] when its input needs no
//! change.

use crate::pct_enc::{encode_to_cow, table};
use alloc::{borrow::Cow, string::String};

pub use crate::pct_enc::percent_decode;

/// The URL that replaces a URL with an unsafe scheme.
pub const ABOUT_BLANK: &str = "about:blank";

/// Schemes that are unsafe regardless of their prefix.
const UNSAFE_SCHEMES: [&str; 3] = ["data", "mhtml", "about"];

const SCRIPT_SUFFIX: &str = "script";

/// Checks whether a non-ASCII character is kept by [`remove_invalid_characters`].
///
/// The ranges are a heuristic for internationalized text: they cover the
/// BMP from U+00A0 up, except for the surrogates and the noncharacters
/// (U+FDD0 to U+FDEF, U+FFFE and U+FFFF).
fn is_likely_safe(ch: char) -> bool {
    matches!(ch, '\u{a0}'..='\u{d7ff}' | '\u{e000}'..='\u{fdcf}' | '\u{fdf0}'..='\u{fffd}')
}

fn is_valid(ch: char) -> bool {
    table::URL_SAFE.allows(ch) || is_likely_safe(ch)
}

/// Removes every character that is neither URL-safe ASCII nor in one of the
/// likely-safe Unicode ranges.
///
/// The URL-safe ASCII characters are
/// [`URL_SAFE`](crate::pct_enc::table::URL_SAFE).
/// Characters outside the Basic Multilingual Plane are always removed.
///
/// # Examples
///
/// ```
/// use lenient_uri::sanitize::remove_invalid_characters;
///
/// assert_eq!(remove_invalid_characters("java\u{0}script:x"), "javascript:x");
/// assert_eq!(remove_invalid_characters("/caf\u{e9}/\u{1f600}"), "/caf\u{e9}/");
/// assert_eq!(remove_invalid_characters("a\"b%20c"), "ab20c");
/// ```
#[must_use]
pub fn remove_invalid_characters(url: &str) -> Cow<'_, str> {
    match url.find(|ch: char| !is_valid(ch)) {
        None => Cow::Borrowed(url),
        Some(i) => {
            let mut buf = String::with_capacity(url.len());
            buf.push_str(&url[..i]);
            buf.extend(url[i..].chars().filter(|&ch| is_valid(ch)));
            Cow::Owned(buf)
        }
    }
}

/// Checks whether a scheme may execute script or otherwise misbehave when
/// followed as a link: any word ending in `script`, `data`, `mhtml` or
/// `about`, ignoring ASCII case.
fn is_unsafe_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    let is_script = bytes.len() > SCRIPT_SUFFIX.len()
        && bytes.iter().all(|&x| x.is_ascii_alphanumeric() || x == b'_')
        && bytes[bytes.len() - SCRIPT_SUFFIX.len()..].eq_ignore_ascii_case(SCRIPT_SUFFIX.as_bytes());

    is_script
        || UNSAFE_SCHEMES
            .iter()
            .any(|unsafe_scheme| scheme.eq_ignore_ascii_case(unsafe_scheme))
}

/// Removes invalid characters, then replaces the URL with `"about:blank"`
/// if its scheme is unsafe.
///
/// Unsafe schemes are those ending in `script` (`javascript`, `vbscript`,
/// `livescript`, ...), `data`, `mhtml` and `about`, in any letter case.
/// Invalid characters are removed first so that `"java\tscript:"` is caught.
/// `"about:blank"` itself is left intact.
///
/// # Examples
///
/// ```
/// use lenient_uri::sanitize::remove_unsafe_protocol;
///
/// assert_eq!(remove_unsafe_protocol("javascript:alert(1)"), "about:blank");
/// assert_eq!(remove_unsafe_protocol("JavaScript:alert(1)"), "about:blank");
/// assert_eq!(remove_unsafe_protocol("data:text/html,<b>"), "about:blank");
/// assert_eq!(remove_unsafe_protocol("https://example.com"), "https://example.com");
/// assert_eq!(remove_unsafe_protocol("/script:x"), "/script:x");
/// ```
#[must_use]
pub fn remove_unsafe_protocol(url: &str) -> Cow<'_, str> {
    let url = remove_invalid_characters(url);
    let scheme = url.split_once(':').map(|(scheme, _)| scheme);
    if let Some(scheme) = scheme.filter(|scheme| is_unsafe_scheme(scheme)) {
        tracing::debug!(scheme, "replacing URL with unsafe scheme");
        return Cow::Borrowed(ABOUT_BLANK);
    }
    url
}

/// Percent-encodes every character outside printable ASCII (U+0020 to
/// U+007E), for embedding in an HTML attribute.
///
/// # Examples
///
/// ```
/// use lenient_uri::sanitize::escape_html;
///
/// assert_eq!(escape_html("/caf\u{e9} menu"), "/caf%C3%A9 menu");
/// assert_eq!(escape_html("a\tb"), "a%09b");
/// ```
#[must_use]
pub fn escape_html(uri: &str) -> Cow<'_, str> {
    encode_to_cow(uri, table::PRINTABLE)
}

/// Converts an IRI to a URI by percent-encoding the characters a URI may
/// not contain: `<>"{}|\^`, backtick, space, and anything outside
/// printable ASCII.
///
/// # Examples
///
/// ```
/// use lenient_uri::sanitize::from_iri;
///
/// assert_eq!(from_iri("http://例え.jp/a b"), "http://%E4%BE%8B%E3%81%88.jp/a%20b");
/// assert_eq!(from_iri("/{x}|y"), "/%7Bx%7D%7Cy");
/// assert_eq!(from_iri("/100%"), "/100%");
/// ```
#[must_use]
pub fn from_iri(iri: &str) -> Cow<'_, str> {
    encode_to_cow(iri, table::URI_FROM_IRI)
}
