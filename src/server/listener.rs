// Listener module
// Binds the public socket; address reuse is set before bind so a quick restart
// or a second instance on the same port does not fail with EADDRINUSE

use std::io;
use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::logger;

/// Bind `addr` with `SO_REUSEADDR` (and `SO_REUSEPORT` on unix), listening
/// with the configured backlog. Must be called from within a Tokio runtime.
pub fn create_reusable_listener(addr: SocketAddr, server: &ServerConfig) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    configure(&socket)?;

    socket.bind(&addr.into())?;
    socket.listen(server.backlog)?;
    logger::log_debug(&format!("Listening on {addr} (backlog {})", server.backlog));

    TcpListener::from_std(socket.into())
}

fn configure(socket: &Socket) -> io::Result<()> {
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
            backlog: 16,
        }
    }

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = create_reusable_listener("127.0.0.1:0".parse().expect("valid addr"), &server_config())
            .expect("bind succeeds");
        let local = listener.local_addr().expect("bound address");
        assert!(local.ip().is_loopback());
        assert_ne!(local.port(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_second_instance_shares_port() {
        let cfg = server_config();
        let first = create_reusable_listener("127.0.0.1:0".parse().expect("valid addr"), &cfg)
            .expect("first bind");
        let addr = first.local_addr().expect("bound address");

        let second = create_reusable_listener(addr, &cfg).expect("port is shared");
        assert_eq!(second.local_addr().expect("bound address"), addr);
    }
}
