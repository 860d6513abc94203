pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub mod install;
pub mod intercept;
pub mod prefix;
pub mod rewrite;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use install::{install, Natives, Patched, Registry};
pub use prefix::Prefix;
pub use rewrite::{PathRewriter, MARKER};
