#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A permissive URI/IRI value type for handling links found in documents.
//!
//! Any string parses into a [`Uri`], including URI templates such as
//! `{scheme}://example.com/{path}`, and parsing is lossless. On top of the
//! parsed value this crate provides:
//!
//! - [reference resolution](Uri::resolve) against a base;
//! - [query and fragment parameter](params) encoding and decoding;
//! - [sanitization](sanitize) against script-executing schemes, and escaping
//!   for HTML attributes;
//! - [equivalence and display ordering](cmp) of URIs;
//! - access to the [ambient document location](location).
//!
//! See the documentation of [`Uri`] for more details.
//!
//! # Examples
//!
//! ```
//! use lenient_uri::{sanitize, Uri};
//!
//! let base = Uri::parse("https://example.com/blog/2024/post.html");
//!
//! for href in ["../about/", "#comments", "javascript:alert(1)"] {
//!     let href = sanitize::remove_unsafe_protocol(href);
//!     let target = base.resolve(&Uri::parse(&*href));
//!     println!("{target}");
//! }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables [`location::EnvLocation`] and `std` support
//!   in `tracing`.
//!
//! - `serde`: Implements `Serialize` for `Uri<T>` and `Deserialize` for
//!   `Uri<&str>` and `Uri<String>`.
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]: a `debug` event when an unsafe
//! scheme is replaced or no location is available, and a `trace` event for
//! each resolved reference. No subscriber is installed by this crate.

extern crate alloc;

pub mod cmp;
pub mod component;
pub mod location;
pub mod params;
pub mod pct_enc;
pub mod resolve;
pub mod sanitize;

mod fmt;
mod imp;
mod parse;

pub use imp::{Components, Parse, Uri};
pub use params::Params;
