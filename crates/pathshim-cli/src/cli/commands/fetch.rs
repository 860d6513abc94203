//! `pathshim fetch <target>` – show the target a fetch call would issue.

use pathshim_core::intercept::{Fetch, RequestInput};

pub fn run_fetch<F>(fetch: &F, target: String, as_request: bool, init: Option<String>)
where
    F: Fetch<Request = String, Init = String, Response = String>,
{
    let input = if as_request {
        RequestInput::Request(target)
    } else {
        RequestInput::Path(target)
    };
    println!("{}", fetch.fetch(input, init));
}
