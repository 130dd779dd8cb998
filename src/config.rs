use crate::error::Result;
use crate::query::{QueryParameter, to_query};
use crate::ser::ParameterSerializer;

/// Configuration for turning `Serialize` values into query parameters.
///
/// The encoder functions ([`string`](crate::string), [`list`](crate::list),
/// ...) take no configuration. `Config` only controls the choices the serde
/// bridge has to make on the caller's behalf.
///
/// ```
/// use serde::Serialize;
/// use url_builder::{Config, ListFormat};
///
/// #[derive(Serialize)]
/// struct Search<'a> {
///     q: &'a str,
///     sizes: Vec<u8>,
/// }
///
/// let search = Search { q: "", sizes: vec![1, 2] };
///
/// let config = Config::new();
/// assert_eq!(config.serialize_query(&search).unwrap(), "?q=&sizes=1%2C2");
///
/// let config = Config::new()
///     .list_format(ListFormat::Bracketed)
///     .skip_empty_strings(true);
/// assert_eq!(config.serialize_query(&search).unwrap(), "?sizes=%5B1%2C2%5D");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) list_format: ListFormat,
    pub(crate) skip_empty_strings: bool,
}

/// How sequences are written when they appear as a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    /// Use the `a=1%2C2` format, as [`list`](crate::list) does.
    Comma,
    /// Use the `a=%5B1%2C2%5D` format, as [`bracketed_list`](crate::bracketed_list) does.
    Bracketed,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            list_format: ListFormat::Comma,
            skip_empty_strings: false,
        }
    }

    /// Specifies how sequences should be formatted.
    ///
    /// The default is `Comma`.
    pub const fn list_format(mut self, list_format: ListFormat) -> Self {
        self.list_format = list_format;
        self
    }

    /// When `true`, empty strings are encoded with
    /// [`non_empty_string`](crate::non_empty_string) and left out of the
    /// query. The default is `false`, which keeps them as `key=`.
    pub const fn skip_empty_strings(mut self, skip_empty_strings: bool) -> Self {
        self.skip_empty_strings = skip_empty_strings;
        self
    }

    /// Serializes a struct or map into query parameters using this `Config`.
    ///
    /// Parameters come out in field order. Absent ones (from `None`
    /// fields, empty sequences, or skipped empty strings) are not included.
    pub fn serialize_parameters<T: serde::Serialize + ?Sized>(
        self,
        input: &T,
    ) -> Result<Vec<QueryParameter>> {
        let mut serializer = ParameterSerializer::new(self);
        input.serialize(&mut serializer)?;
        Ok(serializer.into_parameters())
    }

    /// Serializes a struct or map into a querystring, including the leading
    /// `?`, using this `Config`.
    pub fn serialize_query<T: serde::Serialize + ?Sized>(self, input: &T) -> Result<String> {
        let parameters = self.serialize_parameters(input)?;
        Ok(to_query(&parameters))
    }
}
