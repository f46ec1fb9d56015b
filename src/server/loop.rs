// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `state.shutdown` is notified.
///
/// In-flight connections keep running in their own tasks after the loop returns.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let shutdown = Arc::clone(&state.shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_serves_requests_and_stops_on_shutdown() {
        let mut cfg = Config::load_from("does/not/exist/tracker").expect("defaults load");
        cfg.logging.access_log = false;
        let state = Arc::new(AppState::new(&cfg).expect("state builds"));

        let listener =
            create_reusable_listener("127.0.0.1:0".parse().expect("valid addr"), &cfg.server)
                .expect("bind");
        let addr = listener.local_addr().expect("bound address");
        let server = tokio::spawn(serve(listener, Arc::clone(&state)));

        let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
        stream
            .write_all(b"GET /missing HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .expect("write request");
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.expect("read response");

        assert!(raw.starts_with("HTTP/1.1 404"), "{raw}");
        assert!(raw.to_ascii_lowercase().contains("access-control-allow-origin: *"));
        assert!(raw.ends_with("Page not found"));

        state.shutdown.notify_one();
        server.await.expect("server task finishes");
    }
}
