//! `pathshim rewrite-path <path>` – show the socket path rewrite.

use pathshim_core::PathRewriter;

pub fn run_rewrite_path(rewriter: &PathRewriter, path: &str) {
    println!("{}", rewriter.rewrite(path));
}
