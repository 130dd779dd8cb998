//! Typed query parameters and the querystring they serialize to.
//!
//! Every encoder in this module takes a raw, unencoded key plus a typed
//! value and returns a [`QueryParameter`] whose key and value are already
//! percent-encoded. Encoders that may decide a parameter should not appear
//! at all return [`QueryParameter::Absent`], which [`to_query`] drops.

use std::fmt;

use crate::encode::percent_encode;

/// A single `key=value` pair of a querystring, or the decision to omit it.
///
/// Values are created by the encoders in this module ([`string`], [`int`],
/// [`list`], ...). The key and value of a [`QueryParameter::Pair`] are
/// final percent-encoded text, which is why the variant cannot be built
/// outside this crate.
///
/// ```
/// use url_builder::{QueryParameter, non_empty_string, string};
///
/// let p = string("name", "Carrot City");
/// assert_eq!(p.key(), Some("name"));
/// assert_eq!(p.value(), Some("Carrot%20City"));
///
/// assert_eq!(non_empty_string("name", ""), QueryParameter::Absent);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryParameter {
    /// A parameter that will be written as `key=value`.
    #[non_exhaustive]
    Pair { key: String, value: String },
    /// A parameter that will be left out of the querystring.
    Absent,
}

impl QueryParameter {
    /// Wraps an already-encoded value under a raw key.
    fn encoded(key: &str, value: String) -> Self {
        QueryParameter::Pair {
            key: percent_encode(key).into_owned(),
            value,
        }
    }

    /// The encoded key, unless this is [`QueryParameter::Absent`].
    pub fn key(&self) -> Option<&str> {
        match self {
            QueryParameter::Pair { key, .. } => Some(key),
            QueryParameter::Absent => None,
        }
    }

    /// The encoded value, unless this is [`QueryParameter::Absent`].
    pub fn value(&self) -> Option<&str> {
        match self {
            QueryParameter::Pair { value, .. } => Some(value),
            QueryParameter::Absent => None,
        }
    }

    /// Whether this parameter will be left out of the querystring.
    pub fn is_absent(&self) -> bool {
        matches!(self, QueryParameter::Absent)
    }
}

/// Writes `key=value`, or nothing at all for an absent parameter.
impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParameter::Pair { key, value } => write!(f, "{key}={value}"),
            QueryParameter::Absent => Ok(()),
        }
    }
}

/// A string parameter. Both key and value are percent-encoded.
///
/// The parameter is present even if `value` is empty.
///
/// ```
/// use url_builder::{absolute, string};
///
/// assert_eq!(absolute(&["products"], &[string("search", "hat")]), "/products?search=hat");
/// assert_eq!(absolute(&["products"], &[string("search", "")]), "/products?search=");
/// ```
pub fn string(key: &str, value: &str) -> QueryParameter {
    QueryParameter::encoded(key, percent_encode(value).into_owned())
}

/// Like [`string`], but absent when `value` is exactly `""`.
///
/// Whitespace is not trimmed: `" "` still produces a parameter.
pub fn non_empty_string(key: &str, value: &str) -> QueryParameter {
    if value.is_empty() {
        QueryParameter::Absent
    } else {
        string(key, value)
    }
}

/// An integer parameter, written in base 10.
///
/// Works for every primitive integer type.
///
/// ```
/// use url_builder::{int, to_query};
///
/// assert_eq!(to_query(&[int("page", 2), int("offset", -10i64)]), "?page=2&offset=-10");
/// ```
pub fn int<I: itoa::Integer>(key: &str, value: I) -> QueryParameter {
    let mut buffer = itoa::Buffer::new();
    // digits and `-` never need encoding
    QueryParameter::encoded(key, buffer.format(value).to_owned())
}

/// A floating point parameter, written in its shortest round-trip form.
///
/// `4.2` becomes `4.2` rather than `4.2000000000000002`, and whole
/// numbers drop their fraction: `10.0` becomes `10`. Very large and very
/// small magnitudes use an exponent (`1e21`, `1e-7`). NaN and the
/// infinities are written as `NaN`, `inf` and `-inf`.
///
/// ```
/// use url_builder::{float, to_query};
///
/// assert_eq!(to_query(&[float("maxprice", 9.99)]), "?maxprice=9.99");
/// assert_eq!(to_query(&[float("maxprice", 25.0)]), "?maxprice=25");
/// ```
pub fn float<F: ryu::Float>(key: &str, value: F) -> QueryParameter {
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format(value);
    // ryu writes whole numbers as `10.0`; the minimal form is `10`
    let formatted = formatted.strip_suffix(".0").unwrap_or(formatted);
    QueryParameter::encoded(key, percent_encode(formatted).into_owned())
}

/// A boolean parameter, written as `true` or `false`.
pub fn bool(key: &str, value: bool) -> QueryParameter {
    let value = if value { "true" } else { "false" };
    QueryParameter::encoded(key, value.to_owned())
}

/// Applies `encoder` to an optional value, or returns
/// [`QueryParameter::Absent`] for `None`.
///
/// ```
/// use url_builder::{QueryParameter, float, maybe};
///
/// assert_eq!(maybe(float, "maxprice", None::<f64>), QueryParameter::Absent);
/// assert_eq!(maybe(float, "maxprice", Some(9.99)), float("maxprice", 9.99));
/// ```
pub fn maybe<T, F>(encoder: F, key: &str, value: Option<T>) -> QueryParameter
where
    F: FnOnce(&str, T) -> QueryParameter,
{
    match value {
        Some(value) => encoder(key, value),
        None => QueryParameter::Absent,
    }
}

/// Joins several values into a single comma-separated parameter.
///
/// Each element is run through `encoder` on its own, and elements for
/// which it returns [`QueryParameter::Absent`] are skipped. The joined
/// text is then percent-encoded once more as one value, so the commas
/// end up as `%2C`.
///
/// An empty sequence gives [`QueryParameter::Absent`].
///
/// ```
/// use url_builder::{absolute, int, list, string};
///
/// assert_eq!(
///     absolute(&["products"], &[string("search", "hat"), list(int, "sizes", [1, 2, 3])]),
///     "/products?search=hat&sizes=1%2C2%2C3"
/// );
/// ```
pub fn list<T, F, I>(encoder: F, key: &str, values: I) -> QueryParameter
where
    F: FnMut(&str, T) -> QueryParameter,
    I: IntoIterator<Item = T>,
{
    match join_values(encoder, values) {
        Some(joined) => string(key, &joined),
        None => QueryParameter::Absent,
    }
}

/// Like [`list`], but the joined values are wrapped in `[` and `]`.
///
/// ```
/// use url_builder::{absolute, bracketed_list, int, string};
///
/// assert_eq!(
///     absolute(&["products"], &[string("search", "hat"), bracketed_list(int, "sizes", [1, 2, 3])]),
///     "/products?search=hat&sizes=%5B1%2C2%2C3%5D"
/// );
/// ```
pub fn bracketed_list<T, F, I>(encoder: F, key: &str, values: I) -> QueryParameter
where
    F: FnMut(&str, T) -> QueryParameter,
    I: IntoIterator<Item = T>,
{
    match join_values(encoder, values) {
        Some(joined) => string(key, &format!("[{joined}]")),
        None => QueryParameter::Absent,
    }
}

/// Encodes each value with an empty key and joins the present ones with
/// commas. Returns `None` only for an empty input.
fn join_values<T, F, I>(mut encoder: F, values: I) -> Option<String>
where
    F: FnMut(&str, T) -> QueryParameter,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter().peekable();
    values.peek()?;

    let mut joined = String::new();
    let mut first = true;
    for value in values {
        if let QueryParameter::Pair { value, .. } = encoder("", value) {
            if !first {
                joined.push(',');
            }
            first = false;
            joined.push_str(&value);
        }
    }
    Some(joined)
}

/// Serializes parameters into a querystring, including the leading `?`.
///
/// Absent parameters are dropped and the rest keep their order. If
/// nothing is left, the result is empty rather than a lone `?`.
///
/// ```
/// use url_builder::{QueryParameter, int, string, to_query};
///
/// assert_eq!(to_query(&[]), "");
/// assert_eq!(to_query(&[QueryParameter::Absent]), "");
/// assert_eq!(to_query(&[string("q", "cat"), int("page", 3)]), "?q=cat&page=3");
/// ```
pub fn to_query(parameters: &[QueryParameter]) -> String {
    let mut query = String::new();
    for parameter in parameters {
        let QueryParameter::Pair { key, value } = parameter else {
            continue;
        };
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}
