//! Browser natives backed by `web-sys`.
//!
//! Each type forwards to the window's own implementation. Wrapping them with
//! [`install_in_window`] gives the patched capabilities the rest of a wasm
//! application should hold instead of calling `web_sys` directly.

use url::Url;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Array, Promise};
use web_sys::{Request, RequestInit, WebSocket, Window, XmlHttpRequest};

use crate::install::{install, Natives, Patched};
use crate::intercept::{Fetch, Opener, RequestInput, SocketFactory, SocketTarget};
use crate::prefix::Prefix;
use crate::rewrite::PathRewriter;

/// `window.fetch`.
#[derive(Debug, Clone)]
pub struct WindowFetch {
    window: Window,
}

impl WindowFetch {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Fetch for WindowFetch {
    type Request = Request;
    type Init = RequestInit;
    type Response = Promise;

    fn fetch(&self, input: RequestInput<Request>, init: Option<RequestInit>) -> Promise {
        match (input, init) {
            (RequestInput::Path(path), None) => self.window.fetch_with_str(&path),
            (RequestInput::Path(path), Some(init)) => {
                self.window.fetch_with_str_and_init(&path, &init)
            }
            (RequestInput::Request(request), None) => self.window.fetch_with_request(&request),
            (RequestInput::Request(request), Some(init)) => {
                self.window.fetch_with_request_and_init(&request, &init)
            }
        }
    }
}

/// `XMLHttpRequest.prototype.open`.
///
/// Trailing arguments follow the platform order: `async`, `user`, `password`.
/// Their count picks the overload.
#[derive(Debug, Clone, Copy, Default)]
pub struct XhrOpener;

impl Opener for XhrOpener {
    type Request = XmlHttpRequest;
    type Arg = JsValue;
    type Output = Result<(), JsValue>;

    fn open(
        &self,
        request: &mut XmlHttpRequest,
        method: &str,
        url: &str,
        rest: Vec<JsValue>,
    ) -> Result<(), JsValue> {
        let asynchronous = rest.first().map(JsValue::is_truthy);
        let user = rest.get(1).and_then(JsValue::as_string);
        let password = rest.get(2).and_then(JsValue::as_string);
        match (asynchronous, rest.len()) {
            (None, _) => request.open(method, url),
            (Some(a), 1) => request.open_with_async(method, url, a),
            (Some(a), 2) => request.open_with_async_and_user(method, url, a, user.as_deref()),
            (Some(a), _) => request.open_with_async_and_user_and_password(
                method,
                url,
                a,
                user.as_deref(),
                password.as_deref(),
            ),
        }
    }
}

/// `new WebSocket(url, protocols?)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeWebSocket;

impl SocketFactory for NativeWebSocket {
    type Socket = Result<WebSocket, JsValue>;

    fn connect(
        &self,
        target: SocketTarget,
        protocols: Option<Vec<String>>,
    ) -> Result<WebSocket, JsValue> {
        match protocols {
            None => WebSocket::new(target.as_str()),
            Some(protocols) => {
                let list: Array = protocols.into_iter().map(JsValue::from).collect();
                WebSocket::new_with_str_sequence(target.as_str(), &list)
            }
        }
    }
}

/// `document.baseURI`, falling back to `location.href`.
pub fn base_location(window: &Window) -> Option<Url> {
    let from_document = window
        .document()
        .and_then(|d| d.base_uri().ok().flatten());
    let raw = match from_document {
        Some(uri) => uri,
        None => window.location().href().ok()?,
    };
    Url::parse(&raw).ok()
}

/// Patched browser capabilities for the current window.
pub type WindowCapabilities = Patched<WindowFetch, XhrOpener, NativeWebSocket>;

/// Builds the rewriter from the window's base location and wraps the
/// browser natives with it.
pub fn install_in_window(prefix: impl Into<Prefix>) -> Result<WindowCapabilities, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let base = base_location(&window)
        .ok_or_else(|| JsValue::from_str("cannot determine document base location"))?;
    let natives = Natives {
        fetch: WindowFetch::new(window),
        opener: XhrOpener,
        sockets: NativeWebSocket,
    };
    Ok(install(PathRewriter::new(prefix, base), natives))
}
