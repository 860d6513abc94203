//! Request interceptor for the fetch-style API.

use std::sync::Arc;

use crate::rewrite::PathRewriter;

/// First argument of a fetch call: a plain target string or the platform's
/// richer request object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestInput<R> {
    Path(String),
    Request(R),
}

impl<R> From<&str> for RequestInput<R> {
    fn from(value: &str) -> Self {
        RequestInput::Path(value.to_string())
    }
}

impl<R> From<String> for RequestInput<R> {
    fn from(value: String) -> Self {
        RequestInput::Path(value)
    }
}

/// Asynchronous fetch-style request capability.
pub trait Fetch {
    type Request;
    type Init;
    /// Pending result for the eventual response.
    type Response;

    fn fetch(&self, input: RequestInput<Self::Request>, init: Option<Self::Init>) -> Self::Response;
}

/// Fetch wrapper that prefixes plain targets under the marker segment.
///
/// Request objects and unmarked strings are forwarded untouched.
#[derive(Debug, Clone)]
pub struct InterceptingFetch<F> {
    inner: F,
    rewriter: Arc<PathRewriter>,
}

impl<F> InterceptingFetch<F> {
    pub fn new(inner: F, rewriter: Arc<PathRewriter>) -> Self {
        Self { inner, rewriter }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: Fetch> Fetch for InterceptingFetch<F> {
    type Request = F::Request;
    type Init = F::Init;
    type Response = F::Response;

    fn fetch(&self, input: RequestInput<Self::Request>, init: Option<Self::Init>) -> Self::Response {
        let input = match input {
            RequestInput::Path(path) => match self.rewriter.concat_marked(&path) {
                Some(rewritten) => {
                    tracing::trace!(channel = "fetch", from = %path, to = %rewritten, "rewrote target");
                    RequestInput::Path(rewritten)
                }
                None => RequestInput::Path(path),
            },
            other => other,
        };
        self.inner.fetch(input, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use url::Url;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(RequestInput<u32>, Option<&'static str>)>>,
    }

    impl Fetch for Recorder {
        type Request = u32;
        type Init = &'static str;
        type Response = usize;

        fn fetch(&self, input: RequestInput<u32>, init: Option<&'static str>) -> usize {
            let mut calls = self.calls.borrow_mut();
            calls.push((input, init));
            calls.len()
        }
    }

    fn intercepting() -> InterceptingFetch<Recorder> {
        let rewriter = PathRewriter::new("/gw", Url::parse("https://example.com/").unwrap());
        InterceptingFetch::new(Recorder::default(), Arc::new(rewriter))
    }

    #[test]
    fn marked_path_prefixed() {
        let f = intercepting();
        f.fetch("/api/widgets".into(), None);
        assert_eq!(
            f.inner().calls.borrow()[0].0,
            RequestInput::Path("/gw/api/widgets".to_string())
        );
    }

    #[test]
    fn unmarked_path_unchanged() {
        let f = intercepting();
        f.fetch("/other/path".into(), None);
        assert_eq!(
            f.inner().calls.borrow()[0].0,
            RequestInput::Path("/other/path".to_string())
        );
    }

    #[test]
    fn request_object_unchanged() {
        let f = intercepting();
        f.fetch(RequestInput::Request(7), None);
        assert_eq!(f.inner().calls.borrow()[0].0, RequestInput::Request(7));
    }

    #[test]
    fn init_and_response_pass_through() {
        let f = intercepting();
        assert_eq!(f.fetch("/api/a".into(), Some("POST")), 1);
        assert_eq!(f.fetch("/b".into(), None), 2);
        let calls = f.inner().calls.borrow();
        assert_eq!(calls[0].1, Some("POST"));
        assert_eq!(calls[1].1, None);
    }
}
