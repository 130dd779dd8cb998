//! Assembling complete URLs from a root, path segments, query parameters
//! and a fragment.
//!
//! Path segments are written verbatim. If a segment may contain `/`, `?`
//! or `#`, run it through [`percent_encode`](crate::percent_encode) first.

use std::fmt;

use crate::query::{QueryParameter, to_query};

/// Where a URL starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Root {
    /// `/path`: relative to the host of the current page.
    Absolute,
    /// `path`: relative to the current path.
    Relative,
    /// `https://example.com:8042/path`: the given prefix, used as is,
    /// followed by `/`.
    CrossOrigin(String),
}

/// Writes the prefix that goes in front of the first path segment.
impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Absolute => f.write_str("/"),
            Root::Relative => Ok(()),
            Root::CrossOrigin(pre_path) => write!(f, "{pre_path}/"),
        }
    }
}

/// Creates an absolute URL.
///
/// ```
/// use url_builder::{absolute, int, string};
///
/// assert_eq!(absolute(&[], &[]), "/");
/// assert_eq!(absolute(&["packages", "elm", "core"], &[]), "/packages/elm/core");
/// assert_eq!(
///     absolute(&["products"], &[string("search", "hat"), int("page", 2)]),
///     "/products?search=hat&page=2"
/// );
/// ```
pub fn absolute(segments: &[&str], parameters: &[QueryParameter]) -> String {
    assemble(String::from("/"), segments, parameters, None)
}

/// Creates a relative URL.
///
/// ```
/// use url_builder::{relative, string};
///
/// assert_eq!(relative(&[], &[]), "");
/// assert_eq!(relative(&["blog", "42"], &[string("lang", "en")]), "blog/42?lang=en");
/// ```
pub fn relative(segments: &[&str], parameters: &[QueryParameter]) -> String {
    assemble(String::new(), segments, parameters, None)
}

/// Creates a URL on another origin.
///
/// `pre_path` is copied as is and should not end with a `/`.
///
/// ```
/// use url_builder::{cross_origin, string};
///
/// assert_eq!(cross_origin("https://example.com", &[], &[]), "https://example.com/");
/// assert_eq!(
///     cross_origin("https://example.com:8042", &["over", "there"], &[string("name", "ferret")]),
///     "https://example.com:8042/over/there?name=ferret"
/// );
/// ```
pub fn cross_origin(pre_path: &str, segments: &[&str], parameters: &[QueryParameter]) -> String {
    let mut url = String::with_capacity(pre_path.len() + 1);
    url.push_str(pre_path);
    url.push('/');
    assemble(url, segments, parameters, None)
}

/// Creates a URL from any [`Root`], with an optional fragment.
///
/// ```
/// use url_builder::{Root, custom, string};
///
/// assert_eq!(custom(&Root::Absolute, &["x"], &[], Some("frag")), "/x#frag");
/// assert_eq!(
///     custom(
///         &Root::CrossOrigin("https://example.com".to_owned()),
///         &["docs", "guide"],
///         &[string("v", "2")],
///         Some("install"),
///     ),
///     "https://example.com/docs/guide?v=2#install"
/// );
/// ```
pub fn custom(
    root: &Root,
    segments: &[&str],
    parameters: &[QueryParameter],
    fragment: Option<&str>,
) -> String {
    assemble(root.to_string(), segments, parameters, fragment)
}

/// Appends the path, query and fragment to an already written root prefix.
fn assemble(
    mut url: String,
    segments: &[&str],
    parameters: &[QueryParameter],
    fragment: Option<&str>,
) -> String {
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            url.push('/');
        }
        url.push_str(segment);
    }
    url.push_str(&to_query(parameters));
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::query::{int, string};

    #[test]
    fn root_prefixes() {
        assert_eq!(Root::Absolute.to_string(), "/");
        assert_eq!(Root::Relative.to_string(), "");
        assert_eq!(
            Root::CrossOrigin("https://example.com:8042".to_owned()).to_string(),
            "https://example.com:8042/"
        );
    }

    #[test]
    fn segments_are_verbatim() {
        assert_eq!(absolute(&["a b", "c%20d"], &[]), "/a b/c%20d");
        assert_eq!(relative(&["a/b"], &[]), "a/b");
        assert_eq!(absolute(&["", ""], &[]), "//");
    }

    #[test]
    fn custom_matches_shorthands() {
        let params = [string("q", "x"), int("n", 1)];
        let segments = ["a", "b"];
        assert_eq!(
            custom(&Root::Absolute, &segments, &params, None),
            absolute(&segments, &params)
        );
        assert_eq!(
            custom(&Root::Relative, &segments, &params, None),
            relative(&segments, &params)
        );
        assert_eq!(
            custom(&Root::CrossOrigin("http://h".to_owned()), &segments, &params, None),
            cross_origin("http://h", &segments, &params)
        );
    }

    #[test]
    fn fragment_after_query() {
        assert_eq!(
            custom(&Root::Relative, &["a"], &[int("n", 1)], Some("top")),
            "a?n=1#top"
        );
        assert_eq!(custom(&Root::Relative, &[], &[], Some("")), "#");
    }
}
