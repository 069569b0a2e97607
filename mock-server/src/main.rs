use mock_server::ROUTES;
use tokio::net::TcpListener;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Serves the mock pricing API until Ctrl-C.
///
/// The bind address comes from the first argument or `MOCK_ITAD_ADDR`.
/// Point the client at it with `ClientConfig::with_base_url`; any
/// non-empty key is accepted.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MOCK_ITAD_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    let listener = TcpListener::bind(&addr).await?;
    let base = format!("http://{}", listener.local_addr()?);
    println!("mock pricing API on {base}");
    for (method, path) in ROUTES {
        println!("  {method:<4} {base}{path}?key=<any>");
    }

    mock_server::run_until(listener, async {
        // A failed signal handler just means we run until killed.
        let _ = tokio::signal::ctrl_c().await;
        println!("shutting down");
    })
    .await
}
