//! `pathshim socket <target>` – show the target a socket would connect to.

use pathshim_core::intercept::SocketFactory;

pub fn run_socket<S>(sockets: &S, target: String, protocols: Vec<String>)
where
    S: SocketFactory<Socket = String>,
{
    let protocols = if protocols.is_empty() {
        None
    } else {
        Some(protocols)
    };
    println!("{}", sockets.connect(target.into(), protocols));
}
