//! Legacy-request interceptor for the connection-opening operation.

use std::sync::Arc;

use crate::rewrite::PathRewriter;

/// The `open(method, url, ...rest)` operation of a legacy request object.
///
/// `Request` is the object the operation is invoked on; `Arg` is the type of
/// the positional arguments that may follow the url.
pub trait Opener {
    type Request;
    type Arg;
    type Output;

    fn open(
        &self,
        request: &mut Self::Request,
        method: &str,
        url: &str,
        rest: Vec<Self::Arg>,
    ) -> Self::Output;
}

/// Opener wrapper that prefixes urls under the marker segment.
#[derive(Debug, Clone)]
pub struct InterceptingOpener<O> {
    inner: O,
    rewriter: Arc<PathRewriter>,
}

impl<O> InterceptingOpener<O> {
    pub fn new(inner: O, rewriter: Arc<PathRewriter>) -> Self {
        Self { inner, rewriter }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: Opener> Opener for InterceptingOpener<O> {
    type Request = O::Request;
    type Arg = O::Arg;
    type Output = O::Output;

    fn open(
        &self,
        request: &mut Self::Request,
        method: &str,
        url: &str,
        rest: Vec<Self::Arg>,
    ) -> Self::Output {
        match self.rewriter.concat_marked(url) {
            Some(rewritten) => {
                tracing::trace!(channel = "open", method, from = url, to = %rewritten, "rewrote target");
                self.inner.open(request, method, &rewritten, rest)
            }
            None => self.inner.open(request, method, url, rest),
        }
    }
}
