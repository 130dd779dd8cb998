use std::fmt;

use serde::ser;

/// Errors raised while turning a `Serialize` value into query parameters.
///
/// The plain encoders and URL builders never fail; only the serde bridge
/// in [`to_parameters`](crate::to_parameters) returns this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A message produced by a `Serialize` implementation.
    Custom(String),
    /// A value that has no flat querystring representation, such as a
    /// nested struct or a list of lists.
    Unsupported(&'static str),
    /// A top-level value that is not a struct or map.
    TopLevel(&'static str),
}

/// Result type returned by the serde bridge.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Custom(msg) => f.write_str(msg),
            Error::Unsupported(what) => {
                write!(f, "unsupported value: {what} cannot be a query parameter")
            }
            Error::TopLevel(what) => write!(
                f,
                "cannot serialize {what} at the top level. Try serializing a struct."
            ),
        }
    }
}

impl std::error::Error for Error {}

impl ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Error::Custom(msg.to_string())
    }
}
