//! Dry-run natives: instead of performing the call, describe what the
//! platform would have been asked to do.

use pathshim_core::intercept::{Fetch, Opener, RequestInput, SocketFactory, SocketTarget};
use pathshim_core::Natives;

pub struct DescribeFetch;

impl Fetch for DescribeFetch {
    /// A request object, represented by its url.
    type Request = String;
    type Init = String;
    type Response = String;

    fn fetch(&self, input: RequestInput<String>, init: Option<String>) -> String {
        let target = match input {
            RequestInput::Path(path) => path,
            RequestInput::Request(url) => format!("Request({url})"),
        };
        match init {
            Some(init) => format!("fetch {target} init={init}"),
            None => format!("fetch {target}"),
        }
    }
}

/// Stand-in for a legacy request object.
#[derive(Debug, Default)]
pub struct DryRequest;

pub struct DescribeOpener;

impl Opener for DescribeOpener {
    type Request = DryRequest;
    type Arg = String;
    type Output = String;

    fn open(&self, _request: &mut DryRequest, method: &str, url: &str, rest: Vec<String>) -> String {
        let mut line = format!("open {method} {url}");
        for arg in rest {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

pub struct DescribeSockets;

impl SocketFactory for DescribeSockets {
    type Socket = String;

    fn connect(&self, target: SocketTarget, protocols: Option<Vec<String>>) -> String {
        match protocols {
            Some(protocols) => format!("socket {target} protocols={}", protocols.join(",")),
            None => format!("socket {target}"),
        }
    }
}

pub fn dry_run() -> Natives<DescribeFetch, DescribeOpener, DescribeSockets> {
    Natives {
        fetch: DescribeFetch,
        opener: DescribeOpener,
        sockets: DescribeSockets,
    }
}
