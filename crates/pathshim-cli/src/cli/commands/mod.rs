//! CLI command handlers, one file per channel.

mod config;
mod fetch;
mod open;
mod rewrite_path;
mod socket;

pub use config::run_config;
pub use fetch::run_fetch;
pub use open::run_open;
pub use rewrite_path::run_rewrite_path;
pub use socket::run_socket;
