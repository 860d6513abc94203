//! Path rewriting shared by all interceptors.
//!
//! Two rules live here and are deliberately not unified:
//! - the marker rule used for fetch and legacy requests, which concatenates the
//!   raw prefix onto targets starting with [`MARKER`];
//! - the socket rule ([`PathRewriter::rewrite`]), which resolves the path to an
//!   absolute one and joins it to the trimmed prefix with exactly one slash.

mod marker;
mod resolve;

use crate::prefix::Prefix;
use url::Url;

pub use marker::{concat_marked, MARKER};
pub use resolve::absolute_path;

/// Rewrites paths into the configured prefix.
///
/// Holds the two values every rewrite depends on: the prefix and the document
/// base location. Both are fixed at construction, so a given input always
/// produces the same output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewriter {
    prefix: Prefix,
    base: Url,
}

impl PathRewriter {
    pub fn new(prefix: impl Into<Prefix>, base: Url) -> Self {
        Self {
            prefix: prefix.into(),
            base,
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Rewrites `path` under the prefix.
    ///
    /// Relative paths are first resolved against the base location. If that
    /// resolution fails the input is returned unchanged; this never panics.
    ///
    /// # Examples
    ///
    /// - prefix `/gw`, `"/chat"` → `"/gw/chat"`
    /// - prefix `/gw/`, `"//chat"` → `"/gw/chat"`
    /// - prefix `/gw`, base `https://h/app/`, `"chat"` → `"/gw/app/chat"`
    pub fn rewrite(&self, path: &str) -> String {
        match absolute_path(&self.base, path) {
            Ok(absolute) => join(self.prefix.trimmed(), &absolute),
            Err(err) => {
                tracing::debug!(path, error = %err, "cannot resolve path, leaving it unchanged");
                path.to_string()
            }
        }
    }

    /// Applies the marker rule: `Some(prefix + target)` when `target` starts
    /// with [`MARKER`], `None` otherwise.
    pub fn concat_marked(&self, target: &str) -> Option<String> {
        concat_marked(&self.prefix, target)
    }
}

fn join(trimmed_prefix: &str, absolute: &str) -> String {
    format!("{}/{}", trimmed_prefix, absolute.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter(prefix: &str, base: &str) -> PathRewriter {
        PathRewriter::new(prefix, Url::parse(base).unwrap())
    }

    #[test]
    fn absolute_path_joined_with_single_slash() {
        let r = rewriter("/gw", "https://example.com/");
        assert_eq!(r.rewrite("/chat"), "/gw/chat");
        assert_eq!(r.rewrite("/a/b/c"), "/gw/a/b/c");
    }

    #[test]
    fn slashes_normalized_on_both_sides() {
        let r = rewriter("/gw///", "https://example.com/");
        assert_eq!(r.rewrite("///chat"), "/gw/chat");
        assert_eq!(r.rewrite("/"), "/gw/");
    }

    #[test]
    fn root_prefix_yields_plain_absolute_path() {
        let r = rewriter("/", "https://example.com/");
        assert_eq!(r.rewrite("/chat"), "/chat");
    }

    #[test]
    fn relative_path_resolved_against_base() {
        let r = rewriter("/gw", "https://example.com/app/index.html");
        assert_eq!(r.rewrite("chat"), "/gw/app/chat");
        assert_eq!(r.rewrite("../chat"), "/gw/chat");
    }

    #[test]
    fn query_of_relative_path_is_dropped_by_resolution() {
        let r = rewriter("/gw", "https://example.com/app/");
        assert_eq!(r.rewrite("ws?room=1"), "/gw/app/ws");
    }

    #[test]
    fn unresolvable_path_is_identity() {
        let r = rewriter("/gw", "data:text/plain,hello");
        assert_eq!(r.rewrite("chat"), "chat");
        // absolute paths never need the base
        assert_eq!(r.rewrite("/chat"), "/gw/chat");
    }

    #[test]
    fn rewrite_is_deterministic() {
        let r = rewriter("/gw", "https://example.com/app/");
        assert_eq!(r.rewrite("socket"), r.rewrite("socket"));
    }

    #[test]
    fn concat_marked_delegates_to_raw_prefix() {
        let r = rewriter("/gw/", "https://example.com/");
        assert_eq!(r.concat_marked("/api/x").as_deref(), Some("/gw//api/x"));
        assert_eq!(r.concat_marked("/other"), None);
    }
}
