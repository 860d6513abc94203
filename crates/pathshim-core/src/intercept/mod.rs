//! Interceptors for the three outgoing-call channels.
//!
//! Each channel is a trait describing the native capability. The interceptor
//! wraps a native of that trait and implements the same trait with the same
//! associated types, so callers cannot tell the two apart. All rewriting
//! happens synchronously before the one delegated call.

mod fetch;
mod open;
mod socket;

pub use fetch::{Fetch, InterceptingFetch, RequestInput};
pub use open::{InterceptingOpener, Opener};
pub use socket::{InterceptingSocketFactory, SocketFactory, SocketTarget};
