//! CLI for pathshim: dry runs of the interceptors.

mod commands;
mod natives;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pathshim_core::config::{self, ShimConfig};
use pathshim_core::{install, Prefix};
use std::path::PathBuf;

use commands::{run_config, run_fetch, run_open, run_rewrite_path, run_socket};

/// Top-level CLI for pathshim.
#[derive(Debug, Parser)]
#[command(name = "pathshim")]
#[command(about = "pathshim: show how intercepted requests are rewritten under a prefix", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Values that take precedence over the config file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Prefix to rewrite into (e.g. /gw).
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Derive the prefix from an ingress path value; one trailing slash is dropped.
    #[arg(long, global = true, conflicts_with = "prefix")]
    pub ingress_path: Option<String>,

    /// Document base location used to resolve relative socket paths.
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Config file to read instead of the XDG default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Overrides {
    /// Applies the overrides on top of `cfg`.
    pub fn apply(&self, mut cfg: ShimConfig) -> Result<ShimConfig> {
        if let Some(ingress) = &self.ingress_path {
            let prefix = Prefix::from_ingress_path(ingress)
                .with_context(|| format!("ingress path {ingress:?} yields an empty prefix"))?;
            cfg.prefix = prefix.as_str().to_string();
        }
        if let Some(prefix) = &self.prefix {
            cfg.prefix = prefix.clone();
        }
        if let Some(base) = &self.base {
            cfg.base_url = base.clone();
        }
        Ok(cfg)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a path through the socket path rewriter.
    RewritePath {
        /// Absolute or relative path.
        path: String,
    },

    /// Issue a fetch through the request interceptor.
    Fetch {
        /// Request target.
        target: String,

        /// Pass the target as a request object instead of a plain string.
        #[arg(long)]
        request: bool,

        /// Request options forwarded as-is (e.g. a method).
        #[arg(long)]
        init: Option<String>,
    },

    /// Open a legacy request through the legacy-request interceptor.
    Open {
        /// HTTP method.
        method: String,

        /// Request target.
        url: String,

        /// Further positional arguments (async, user, password).
        rest: Vec<String>,
    },

    /// Construct a socket through the socket interceptor.
    Socket {
        /// Socket target: a path or a full URL.
        target: String,

        /// Sub-protocol to request; repeat for several.
        #[arg(long = "protocol", value_name = "NAME")]
        protocols: Vec<String>,
    },

    /// Print the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.overrides.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        let cfg = cli.overrides.apply(cfg)?;
        tracing::debug!("effective config: {:?}", cfg);

        let patched = install(cfg.rewriter()?, natives::dry_run());

        match cli.command {
            CliCommand::RewritePath { path } => run_rewrite_path(patched.rewriter(), &path),
            CliCommand::Fetch {
                target,
                request,
                init,
            } => run_fetch(&patched.fetch, target, request, init),
            CliCommand::Open { method, url, rest } => run_open(&patched.opener, &method, &url, rest),
            CliCommand::Socket { target, protocols } => {
                run_socket(&patched.sockets, target, protocols)
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
