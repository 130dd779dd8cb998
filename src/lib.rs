//! Build URLs from path segments and typed query parameters
//!
//! Gluing URLs together by hand tends to go wrong in small ways: a
//! forgotten `?`, an `&` in a search term that was never encoded, or a
//! trailing `?` when every optional parameter turned out to be missing.
//! This library puts the encoding rules in one place.
//!
//! URLs are built in two steps:
//!
//! 1. Typed values become [`QueryParameter`]s through encoders such as
//!    [`string`], [`int`], [`float`], [`bool`], [`maybe`] and [`list`].
//!    Keys and values are percent-encoded here, following RFC 3986.
//!    Encoders may return [`QueryParameter::Absent`] to leave a parameter
//!    out entirely.
//! 2. A builder ([`absolute`], [`relative`], [`cross_origin`] or
//!    [`custom`]) joins the path segments and appends the querystring
//!    produced by [`to_query`].
//!
//! ## Usage
//!
//! ```
//! use url_builder::{absolute, bool, bracketed_list, float, int, list, maybe, string};
//!
//! let url = absolute(
//!     &["products"],
//!     &[
//!         string("search", "hat"),
//!         list(int, "sizes", [1, 2, 3]),
//!         maybe(float, "maxprice", None::<f64>),
//!         bool("discounted", true),
//!     ],
//! );
//! assert_eq!(url, "/products?search=hat&sizes=1%2C2%2C3&discounted=true");
//!
//! let url = absolute(&["products"], &[bracketed_list(int, "sizes", [1, 2, 3])]);
//! assert_eq!(url, "/products?sizes=%5B1%2C2%2C3%5D");
//! ```
//!
//! Path segments are used verbatim; encode them with [`percent_encode`]
//! if they may contain reserved characters.
//!
//! ## Serde
//!
//! Flat structs and maps can be turned into parameters with
//! [`to_parameters`], which picks the matching encoder for each field:
//!
//! ```
//! use serde::Serialize;
//! use url_builder::{cross_origin, to_parameters};
//!
//! #[derive(Serialize)]
//! struct Page {
//!     q: &'static str,
//!     page: u32,
//!     lang: Option<&'static str>,
//! }
//!
//! let parameters = to_parameters(&Page { q: "rust url", page: 2, lang: None }).unwrap();
//! assert_eq!(
//!     cross_origin("https://example.com", &["search"], &parameters),
//!     "https://example.com/search?q=rust%20url&page=2"
//! );
//! ```
//!
//! The `tracing` feature logs the fields that this bridge omits or rejects.

mod builder;
mod config;
mod encode;
mod error;
pub mod query;
mod ser;

#[doc(inline)]
pub use builder::{Root, absolute, cross_origin, custom, relative};
pub use config::{Config, ListFormat};
#[doc(inline)]
pub use encode::percent_encode;
pub use error::{Error, Result};
#[doc(inline)]
pub use query::{
    QueryParameter, bool, bracketed_list, float, int, list, maybe, non_empty_string, string,
    to_query,
};
#[doc(inline)]
pub use ser::{ParameterSerializer, to_parameters, to_query_string};
