//! The externally supplied path prefix.

use std::fmt;

/// Path fragment prepended to intercepted targets.
///
/// Stored verbatim; the marker rule concatenates it as-is while the socket
/// rule trims trailing slashes first (see [`Prefix::trimmed`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive a prefix from an ingress path value (e.g. an `X-Ingress-Path`
    /// header). One trailing slash is dropped; an empty result means there is
    /// nothing to rewrite into and yields `None`.
    pub fn from_ingress_path(value: &str) -> Option<Self> {
        let value = value.strip_suffix('/').unwrap_or(value);
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix with every trailing `/` removed.
    pub fn trimmed(&self) -> &str {
        self.0.trim_end_matches('/')
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Prefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_all_trailing_slashes() {
        assert_eq!(Prefix::new("/gw").trimmed(), "/gw");
        assert_eq!(Prefix::new("/gw///").trimmed(), "/gw");
        assert_eq!(Prefix::new("/").trimmed(), "");
    }

    #[test]
    fn as_str_is_verbatim() {
        assert_eq!(Prefix::new("/gw/").as_str(), "/gw/");
        assert_eq!(Prefix::from("/x").to_string(), "/x");
    }

    #[test]
    fn from_ingress_path_drops_one_trailing_slash() {
        assert_eq!(
            Prefix::from_ingress_path("/api/hassio_ingress/abc/"),
            Some(Prefix::new("/api/hassio_ingress/abc"))
        );
        assert_eq!(Prefix::from_ingress_path("/gw"), Some(Prefix::new("/gw")));
        assert_eq!(Prefix::from_ingress_path("/gw//"), Some(Prefix::new("/gw/")));
    }

    #[test]
    fn from_ingress_path_empty_is_none() {
        assert_eq!(Prefix::from_ingress_path(""), None);
        assert_eq!(Prefix::from_ingress_path("/"), None);
    }
}
