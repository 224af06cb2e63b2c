//! The ambient location of the current document.
//!
//! The location is supplied by the hosting environment and never computed
//! by this crate. It is typically used as the base when resolving links
//! found in the document.
//!
//! # Examples
//!
//! ```
//! use lenient_uri::{location::get_location, Uri};
//!
//! let loc = Some("https://example.com/docs/index.html");
//! let base = get_location(&loc);
//! let base = Uri::parse(base.as_str());
//! assert_eq!(base.resolve(&Uri::parse("intro.html")), "https://example.com/docs/intro.html");
//!
//! // Nothing is known about the location.
//! assert_eq!(get_location(&()), "");
//! ```

use alloc::{borrow::Cow, string::String};

/// A provider of the current document location.
pub trait Location {
    /// Returns the current location, or `None` if it is unavailable.
    fn location(&self) -> Option<Cow<'_, str>>;
}

impl Location for str {
    fn location(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Location for String {
    fn location(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl<T: Location + ?Sized> Location for &T {
    fn location(&self) -> Option<Cow<'_, str>> {
        (**self).location()
    }
}

impl<T: Location> Location for Option<T> {
    fn location(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Location::location)
    }
}

/// No location.
impl Location for () {
    fn location(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// Returns the location given by the provider, or an empty string if it
/// has none.
pub fn get_location<L: Location + ?Sized>(provider: &L) -> String {
    match provider.location() {
        Some(loc) => loc.into_owned(),
        None => {
            tracing::debug!("no document location available");
            String::new()
        }
    }
}

/// A location read from an environment variable.
///
/// The variable is read on every call, so changes to it are picked up.
///
/// # Examples
///
/// ```
/// use lenient_uri::location::{get_location, EnvLocation};
///
/// std::env::set_var("MY_APP_PAGE_URL", "https://example.com/");
/// let env = EnvLocation::with_var("MY_APP_PAGE_URL");
/// assert_eq!(get_location(&env), "https://example.com/");
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvLocation {
    var: Cow<'static, str>,
}

#[cfg(feature = "std")]
impl EnvLocation {
    /// The variable read by default.
    pub const DEFAULT_VAR: &'static str = "DOCUMENT_URL";

    /// Creates a provider reading [`DEFAULT_VAR`](Self::DEFAULT_VAR).
    #[must_use]
    pub fn new() -> Self {
        Self::with_var(Self::DEFAULT_VAR)
    }

    /// Creates a provider reading the given variable.
    #[must_use]
    pub fn with_var(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    /// Returns the name of the variable read.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

#[cfg(feature = "std")]
impl Default for EnvLocation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Location for EnvLocation {
    /// Returns `None` if the variable is unset or not valid Unicode.
    fn location(&self) -> Option<Cow<'_, str>> {
        std::env::var(&*self.var).ok().map(Cow::Owned)
    }
}
