use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3001;
const LIVENESS_BODY: &str = "Backend server is running!";

/// Placeholder backend: one liveness route, nothing else. Catalog, cart and
/// order routes are future work; anything but `GET /` falls through to
/// Axum's default not-found handling.
fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { LIVENESS_BODY }))
        .layer(cors)
}

/// Listen port: `PORT` env override, else the fixed default. Unparsable
/// values fall back to the default.
fn port_from(value: Option<String>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port_from(std::env::var("PORT").ok());
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server is listening on port {}", port);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn liveness_probe_returns_fixed_body() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app()).await.expect("serve app") });

        let mut stream = tokio::net::TcpStream::connect(addr)
            .await
            .expect("connect server");
        let request = format!("GET / HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n", addr);
        stream
            .write_all(request.as_bytes())
            .await
            .expect("write request");

        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("read response");

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.ends_with(LIVENESS_BODY));
    }

    #[tokio::test]
    async fn unknown_route_falls_through_to_not_found() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app()).await.expect("serve app") });

        let mut stream = tokio::net::TcpStream::connect(addr)
            .await
            .expect("connect server");
        let request = format!(
            "GET /api/catalog HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            addr
        );
        stream
            .write_all(request.as_bytes())
            .await
            .expect("write request");

        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("read response");

        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[test]
    fn port_falls_back_to_default() {
        assert_eq!(port_from(None), DEFAULT_PORT);
        assert_eq!(port_from(Some("not-a-port".into())), DEFAULT_PORT);
        assert_eq!(port_from(Some("8080".into())), 8080);
    }
}
