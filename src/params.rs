//! Encoding and decoding of query and fragment parameters.
//!
//! Parameters are flat: a name maps to at most one value, and a name may
//! be given without a value (`"?debug"`). Array-valued parameters are not
//! supported.

use crate::pct_enc::{self, encode_uri_component, encode_uri_fragment};
use alloc::{borrow::Cow, collections::BTreeMap, string::String};

/// Decoded parameters, as returned by [`parse_query_params`].
pub type Params = BTreeMap<String, String>;

/// Encodes parameters with the given escaper, joining them with `'&'`.
///
/// Parameters are emitted in iteration order. A parameter whose value is
/// `None` is emitted as a bare name. Names are emitted as given and only
/// values are escaped.
///
/// # Examples
///
/// ```
/// use lenient_uri::{params::encode_params, pct_enc::encode_uri_component};
///
/// let params = [("q", Some("a b")), ("debug", None), ("lang", Some("en"))];
/// assert_eq!(encode_params(params, encode_uri_component), "q=a%20b&debug&lang=en");
/// ```
pub fn encode_params<I, K, V, F>(params: I, mut escape: F) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
    F: for<'a> FnMut(&'a str) -> Cow<'a, str>,
{
    let mut buf = String::new();
    for (i, (name, value)) in params.into_iter().enumerate() {
        if i != 0 {
            buf.push('&');
        }
        buf.push_str(name.as_ref());
        if let Some(value) = value {
            buf.push('=');
            buf.push_str(&escape(value.as_ref()));
        }
    }
    buf
}

fn prefixed(prefix: char, params: String) -> String {
    if params.is_empty() {
        params
    } else {
        let mut buf = String::with_capacity(params.len() + 1);
        buf.push(prefix);
        buf.push_str(&params);
        buf
    }
}

/// Encodes parameters into a query string, values escaped with
/// [`encode_uri_component`].
///
/// The result starts with `'?'` unless it is empty.
///
/// # Examples
///
/// ```
/// use lenient_uri::params::to_query_params;
///
/// assert_eq!(to_query_params([("a", Some("1")), ("b", None)]), "?a=1&b");
/// assert_eq!(to_query_params([("to", Some("a&b"))]), "?to=a%26b");
/// assert_eq!(to_query_params(Vec::<(&str, Option<&str>)>::new()), "");
/// ```
pub fn to_query_params<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    prefixed('?', encode_params(params, encode_uri_component))
}

/// Encodes parameters into a fragment string, values escaped with
/// [`encode_uri_fragment`].
///
/// The result starts with `'#'` unless it is empty.
///
/// # Examples
///
/// ```
/// use lenient_uri::params::to_hash_params;
///
/// assert_eq!(to_hash_params([("page", Some("a b\n"))]), "#page=a b");
/// ```
pub fn to_hash_params<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    prefixed('#', encode_params(params, encode_uri_fragment))
}

/// Decodes a query string into parameters.
///
/// A single leading `'?'` is stripped. The rest is split on `'&'`, then
/// each pair on its first `'='`. Names and values are percent-decoded, with
/// invalid UTF-8 replaced by `U+FFFD` and malformed escapes kept as is.
/// A pair without `'='` gets an empty value. Later duplicates override
/// earlier ones.
///
/// # Examples
///
/// ```
/// use lenient_uri::params::parse_query_params;
///
/// let params = parse_query_params("?a=1&b=&c&a=%C3%A9&d=x=y");
/// assert_eq!(params["a"], "é");
/// assert_eq!(params["b"], "");
/// assert_eq!(params["c"], "");
/// assert_eq!(params["d"], "x=y");
/// ```
#[must_use]
pub fn parse_query_params(s: &str) -> Params {
    let s = s.strip_prefix('?').unwrap_or(s);
    s.split('&')
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                pct_enc::decode_component(name),
                pct_enc::decode_component(value),
            )
        })
        .collect()
}
