//! Module for reference resolution.
//!
//! A reference is resolved against a base as follows:
//!
//! - If the base is [empty](crate::Uri::is_empty) or the reference has a scheme,
//!   the reference is returned unchanged.
//! - Otherwise, if the reference is empty, the base is returned unchanged.
//! - Otherwise, if the reference is a [self-reference](crate::Uri::is_self_reference),
//!   the base with its fragment replaced by the reference's is returned.
//! - Otherwise the target is assembled from the lowercased scheme of the base,
//!   the authority of the reference (or of the base if the reference has none),
//!   a merged path, and the query and fragment of the reference.
//!
//! The merged path is the path of the reference if it starts with `'/'`, or
//! empty if the reference has an authority. Otherwise, the directories of the
//! base and of the reference are concatenated with every `"."` dropped, and
//! each `".."` cancels out the directory before it. The file name of the
//! reference is then appended.
//!
//! This differs from [Section 5.2 of RFC 3986] in a few ways: unmatched
//! `".."` segments are kept, dot segments in an absolute reference path are
//! kept, and a reference with an empty path drops the file name of the base.
//!
//! [Section 5.2 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2

use crate::{imp::View, Uri};
use alloc::{string::String, vec::Vec};

pub(crate) fn resolve(base: View<'_>, r: View<'_>) -> String {
    let target = if base.is_empty() || r.has_scheme() {
        String::from(r.as_str())
    } else if r.is_empty() {
        String::from(base.as_str())
    } else if r.is_self_reference() {
        let base = base.components();
        let fragment = r.fragment_str();

        let mut buf = String::with_capacity(base.len() - base.fragment.len() + fragment.len() + 1);
        for s in [base.scheme, base.authority, base.path, base.query] {
            buf.push_str(s);
        }
        buf.push('#');
        buf.push_str(fragment);
        buf
    } else {
        merge(base, r)
    };

    tracing::trace!(
        base = base.as_str(),
        reference = r.as_str(),
        target = target.as_str(),
        "resolved reference"
    );
    target
}

fn merge(base: View<'_>, r: View<'_>) -> String {
    let (b, rc) = (base.components(), r.components());
    let mut buf = String::with_capacity(b.len() + rc.len());

    buf.push_str(&b.scheme.to_lowercase());
    buf.push_str(if rc.authority.is_empty() {
        b.authority
    } else {
        rc.authority
    });

    let r_path = r.path();
    if r_path.is_absolute() {
        buf.push_str(r_path.as_str());
    } else if rc.authority.is_empty() {
        let base_path = base.path();
        let dirs = collapse(base_path.dirs().chain(r_path.dirs()));
        let file = r_path.file();

        if base_path.is_absolute()
            || (!b.authority.is_empty() && (!dirs.is_empty() || !file.is_empty()))
        {
            buf.push('/');
        }
        for dir in dirs {
            buf.push_str(dir);
            buf.push('/');
        }
        buf.push_str(file);
    }

    if let Some(query) = r.query().filter(|q| !q.is_empty()) {
        buf.push('?');
        buf.push_str(query);
    }
    if let Some(fragment) = r.fragment().filter(|f| !f.is_empty()) {
        buf.push('#');
        buf.push_str(fragment);
    }
    buf
}

/// Drops every `"."` and lets each `".."` pop the directory before it.
///
/// A `".."` with nothing but `".."` before it is kept.
fn collapse<'a>(dirs: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut stack = Vec::new();
    for dir in dirs.filter(|&dir| dir != ".") {
        match stack.last() {
            Some(&top) if dir == ".." && top != ".." => {
                stack.pop();
            }
            _ => stack.push(dir),
        }
    }
    stack
}

/// Resolves `url` against `base` and returns the target as a string.
///
/// The arguments are in the same order as the `URL` constructor of the
/// WHATWG URL Standard takes them.
///
/// # Examples
///
/// ```
/// use lenient_uri::resolve::resolve_str;
///
/// assert_eq!(resolve_str("../g", "http://a/b/c/d;p?q"), "http://a/b/g");
/// assert_eq!(resolve_str("//cdn.example/x.js", "HTTPS://example.com/"), "https://cdn.example/x.js");
/// ```
#[must_use]
pub fn resolve_str(url: &str, base: &str) -> String {
    Uri::parse(base).resolve(&Uri::parse(url)).into_string()
}
