//! `pathshim config` – print the effective configuration as TOML.

use anyhow::Result;
use pathshim_core::config::ShimConfig;

pub fn run_config(cfg: &ShimConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
