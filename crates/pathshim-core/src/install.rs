//! One-time installation of the interceptors over the native capabilities.
//!
//! Rather than replacing globals in place, installation takes the three
//! natives and hands back patched capabilities with identical interfaces.
//! Callers that need a single process-wide installation keep a [`Registry`].

use std::sync::{Arc, OnceLock};

use crate::error::InstallError;
use crate::intercept::{InterceptingFetch, InterceptingOpener, InterceptingSocketFactory};
use crate::rewrite::PathRewriter;

/// The platform's own implementations, before interception.
#[derive(Debug, Clone)]
pub struct Natives<F, O, S> {
    pub fetch: F,
    pub opener: O,
    pub sockets: S,
}

/// Capabilities every caller should use after installation.
#[derive(Debug, Clone)]
pub struct Patched<F, O, S> {
    pub fetch: InterceptingFetch<F>,
    pub opener: InterceptingOpener<O>,
    pub sockets: InterceptingSocketFactory<S>,
    rewriter: Arc<PathRewriter>,
}

impl<F, O, S> Patched<F, O, S> {
    pub fn rewriter(&self) -> &PathRewriter {
        &self.rewriter
    }
}

/// Wraps each native in its interceptor, all sharing `rewriter`.
pub fn install<F, O, S>(rewriter: PathRewriter, natives: Natives<F, O, S>) -> Patched<F, O, S> {
    tracing::info!(
        prefix = %rewriter.prefix(),
        base = %rewriter.base(),
        "installing fetch, open and socket interceptors"
    );
    let rewriter = Arc::new(rewriter);
    Patched {
        fetch: InterceptingFetch::new(natives.fetch, Arc::clone(&rewriter)),
        opener: InterceptingOpener::new(natives.opener, Arc::clone(&rewriter)),
        sockets: InterceptingSocketFactory::new(natives.sockets, Arc::clone(&rewriter)),
        rewriter,
    }
}

/// Holds at most one installation for its whole lifetime.
pub struct Registry<F, O, S> {
    slot: OnceLock<Patched<F, O, S>>,
}

impl<F, O, S> Default for Registry<F, O, S> {
    fn default() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }
}

impl<F, O, S> Registry<F, O, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the interceptors. Fails if this registry already holds an
    /// installation; the existing one stays in effect.
    pub fn install(
        &self,
        rewriter: PathRewriter,
        natives: Natives<F, O, S>,
    ) -> Result<&Patched<F, O, S>, InstallError> {
        if self.slot.get().is_some() {
            return Err(InstallError::AlreadyInstalled);
        }
        self.slot
            .set(install(rewriter, natives))
            .map_err(|_| InstallError::AlreadyInstalled)?;
        self.slot.get().ok_or(InstallError::AlreadyInstalled)
    }

    pub fn get(&self) -> Option<&Patched<F, O, S>> {
        self.slot.get()
    }

    pub fn is_installed(&self) -> bool {
        self.slot.get().is_some()
    }
}
