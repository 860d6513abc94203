//! `pathshim open <method> <url> [rest..]` – show the legacy open call.

use pathshim_core::intercept::Opener;

pub fn run_open<O, R>(opener: &O, method: &str, url: &str, rest: Vec<String>)
where
    O: Opener<Request = R, Arg = String, Output = String>,
    R: Default,
{
    let mut request = R::default();
    println!("{}", opener.open(&mut request, method, url, rest));
}
