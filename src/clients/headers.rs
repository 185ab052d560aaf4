//! Header lines and the header-contributor capability.
//!
//! Headers travel through the client as ordered `"Name: Value"` lines in a
//! [`HeaderSet`]. Any type implementing [`HeaderContributor`] can supply
//! lines to an outgoing request; the communicator never needs to know
//! where they come from.

use std::fmt;

use crate::clients::errors::InvalidHeaderError;

/// An ordered sequence of `"Name: Value"` header lines.
///
/// Order is preserved and duplicates are kept: merging two sets simply
/// appends, so a later line may shadow an earlier one with the same name
/// on the server side.
///
/// # Example
///
/// ```rust
/// use profit365_api::HeaderSet;
///
/// let mut headers = HeaderSet::new();
/// headers.push_header("ClientID", "11111111-1111-1111-1111-111111111111");
/// headers.push("X-Trace: abc");
///
/// assert_eq!(headers.len(), 2);
/// assert_eq!(headers.get("clientid"), Some("11111111-1111-1111-1111-111111111111"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet(Vec<String>);

impl HeaderSet {
    /// Creates an empty header set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a raw `"Name: Value"` line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    /// Appends a line built from a name and a value.
    pub fn push_header(&mut self, name: &str, value: impl fmt::Display) {
        self.0.push(format!("{name}: {value}"));
    }

    /// Appends every line of `lines`, in order.
    pub fn extend_from_slice(&mut self, lines: &[String]) {
        self.0.extend_from_slice(lines);
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value of the first line whose name matches `name`
    /// (case-insensitive), if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find_map(|line| {
            split_header_line(line)
                .ok()
                .filter(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    /// Returns the header names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|line| split_header_line(line).ok().map(|(name, _)| name))
            .collect()
    }

    /// Splits every line into `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderError`] for the first line that has no `:`
    /// separator or an empty name.
    pub fn pairs(&self) -> Result<Vec<(&str, &str)>, InvalidHeaderError> {
        self.0.iter().map(|line| split_header_line(line)).collect()
    }
}

impl From<Vec<String>> for HeaderSet {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits a `"Name: Value"` line at the first colon.
///
/// Whitespace around the name and the value is trimmed.
pub(crate) fn split_header_line(line: &str) -> Result<(&str, &str), InvalidHeaderError> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| InvalidHeaderError::new(line))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidHeaderError::new(line));
    }
    Ok((name, value.trim()))
}

/// A source of header lines for outgoing requests.
///
/// Implementors return a fresh [`HeaderSet`] on every call. The result must
/// depend only on the implementor's own state: no caching is expected and
/// no side effects are allowed.
///
/// Contributors compose: a pair `(a, b)` contributes `a`'s lines followed by
/// `b`'s, and a `Vec<Box<dyn HeaderContributor>>` contributes each element's
/// lines in order.
///
/// # Example
///
/// ```rust
/// use profit365_api::{HeaderContributor, HeaderSet};
///
/// struct Tracing(&'static str);
///
/// impl HeaderContributor for Tracing {
///     fn component_result(&self) -> HeaderSet {
///         let mut headers = HeaderSet::new();
///         headers.push_header("X-Request-Id", self.0);
///         headers
///     }
/// }
///
/// let combined = (Tracing("a"), Tracing("b")).component_result();
/// assert_eq!(combined.lines(), ["X-Request-Id: a", "X-Request-Id: b"]);
/// ```
pub trait HeaderContributor {
    /// Returns the header lines this component contributes.
    fn component_result(&self) -> HeaderSet;
}

impl<T: HeaderContributor + ?Sized> HeaderContributor for &T {
    fn component_result(&self) -> HeaderSet {
        (**self).component_result()
    }
}

impl<T: HeaderContributor + ?Sized> HeaderContributor for Box<T> {
    fn component_result(&self) -> HeaderSet {
        (**self).component_result()
    }
}

impl<A: HeaderContributor, B: HeaderContributor> HeaderContributor for (A, B) {
    fn component_result(&self) -> HeaderSet {
        let mut headers = self.0.component_result();
        headers.extend_from_slice(self.1.component_result().lines());
        headers
    }
}

impl HeaderContributor for Vec<Box<dyn HeaderContributor + Send + Sync>> {
    fn component_result(&self) -> HeaderSet {
        let mut headers = HeaderSet::new();
        for contributor in self {
            headers.extend_from_slice(contributor.component_result().lines());
        }
        headers
    }
}

impl HeaderContributor for HeaderSet {
    fn component_result(&self) -> HeaderSet {
        self.clone()
    }
}
