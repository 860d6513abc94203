//! Native stand-ins that record every delegated call.

use std::sync::{Arc, Mutex};

use pathshim_core::intercept::{Fetch, Opener, RequestInput, SocketFactory, SocketTarget};
use pathshim_core::Natives;

/// A request object as the platform would model it (never rewritten).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch {
        input: RequestInput<FakeRequest>,
        init: Option<String>,
    },
    Open {
        method: String,
        url: String,
        rest: Vec<String>,
    },
    Socket {
        target: SocketTarget,
        protocols: Option<Vec<String>>,
    },
}

pub type Log = Arc<Mutex<Vec<Call>>>;

#[derive(Clone)]
pub struct RecordingFetch(pub Log);

impl Fetch for RecordingFetch {
    type Request = FakeRequest;
    type Init = String;
    type Response = usize;

    fn fetch(&self, input: RequestInput<FakeRequest>, init: Option<String>) -> usize {
        let mut log = self.0.lock().unwrap();
        log.push(Call::Fetch { input, init });
        log.len()
    }
}

/// Each legacy request remembers how often it was opened.
#[derive(Debug, Default)]
pub struct LegacyRequest {
    pub opened: u32,
}

#[derive(Clone)]
pub struct RecordingOpener(pub Log);

impl Opener for RecordingOpener {
    type Request = LegacyRequest;
    type Arg = String;
    type Output = ();

    fn open(&self, request: &mut LegacyRequest, method: &str, url: &str, rest: Vec<String>) {
        request.opened += 1;
        self.0.lock().unwrap().push(Call::Open {
            method: method.to_string(),
            url: url.to_string(),
            rest,
        });
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordedSocket {
    pub target: SocketTarget,
}

#[derive(Clone)]
pub struct RecordingSockets(pub Log);

impl SocketFactory for RecordingSockets {
    type Socket = RecordedSocket;

    fn connect(&self, target: SocketTarget, protocols: Option<Vec<String>>) -> RecordedSocket {
        self.0.lock().unwrap().push(Call::Socket {
            target: target.clone(),
            protocols,
        });
        RecordedSocket { target }
    }
}

pub fn natives() -> (Natives<RecordingFetch, RecordingOpener, RecordingSockets>, Log) {
    let log: Log = Arc::default();
    let natives = Natives {
        fetch: RecordingFetch(Arc::clone(&log)),
        opener: RecordingOpener(Arc::clone(&log)),
        sockets: RecordingSockets(Arc::clone(&log)),
    };
    (natives, log)
}

pub fn calls(log: &Log) -> Vec<Call> {
    log.lock().unwrap().clone()
}
