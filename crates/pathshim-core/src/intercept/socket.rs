//! Socket interceptor: a factory that rewrites the target before construction.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::rewrite::PathRewriter;

/// Target handed to a socket constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketTarget {
    Plain(String),
    Url(Url),
}

impl SocketTarget {
    /// Promotes a plain string to a structured URL when it parses as one;
    /// anything else stays plain.
    pub fn parsed(self) -> Self {
        match self {
            SocketTarget::Plain(s) => match Url::parse(&s) {
                Ok(url) => SocketTarget::Url(url),
                Err(_) => SocketTarget::Plain(s),
            },
            url => url,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SocketTarget::Plain(s) => s,
            SocketTarget::Url(u) => u.as_str(),
        }
    }
}

impl fmt::Display for SocketTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SocketTarget {
    fn from(value: &str) -> Self {
        SocketTarget::Plain(value.to_string())
    }
}

impl From<String> for SocketTarget {
    fn from(value: String) -> Self {
        SocketTarget::Plain(value)
    }
}

impl From<Url> for SocketTarget {
    fn from(value: Url) -> Self {
        SocketTarget::Url(value)
    }
}

/// Persistent-socket constructor.
pub trait SocketFactory {
    type Socket;

    fn connect(&self, target: SocketTarget, protocols: Option<Vec<String>>) -> Self::Socket;
}

/// Socket factory that routes every target through [`PathRewriter::rewrite`].
///
/// There is no marker check here. Plain strings that parse as URLs have only
/// their path replaced; scheme, host, port, query and fragment survive.
#[derive(Debug, Clone)]
pub struct InterceptingSocketFactory<S> {
    inner: S,
    rewriter: Arc<PathRewriter>,
}

impl<S> InterceptingSocketFactory<S> {
    pub fn new(inner: S, rewriter: Arc<PathRewriter>) -> Self {
        Self { inner, rewriter }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The target the native constructor will receive for `target`.
    ///
    /// URLs with an opaque path (`mailto:x`, `localhost:8080/chat`) have no
    /// path to replace and are returned unchanged.
    pub fn rewrite_target(&self, target: SocketTarget) -> SocketTarget {
        match target.parsed() {
            SocketTarget::Plain(s) => SocketTarget::Plain(self.rewriter.rewrite(&s)),
            SocketTarget::Url(url) if url.cannot_be_a_base() => SocketTarget::Url(url),
            SocketTarget::Url(mut url) => {
                let path = self.rewriter.rewrite(url.path());
                url.set_path(&path);
                SocketTarget::Url(url)
            }
        }
    }
}

impl<S: SocketFactory> SocketFactory for InterceptingSocketFactory<S> {
    type Socket = S::Socket;

    fn connect(&self, target: SocketTarget, protocols: Option<Vec<String>>) -> Self::Socket {
        let from = target.to_string();
        let target = self.rewrite_target(target);
        tracing::trace!(channel = "socket", from = %from, to = %target, "rewrote target");
        self.inner.connect(target, protocols)
    }
}
