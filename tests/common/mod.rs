//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Once;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use corrlog::context::store;
use corrlog::http::propagate_correlation;
use corrlog::logging;
use tokio::net::TcpListener;

static INIT: Once = Once::new();

/// Initialize the logging runtime once per test process.
pub fn init_logging() {
    INIT.call_once(logging::init);
}

/// Start a test service on an ephemeral port and return its address.
///
/// Routes:
/// - `/whoami` sleeps briefly, then returns the task's correlation id
/// - `/attr` records a global attribute through the MDAL facade
pub async fn start_test_service() -> SocketAddr {
    init_logging();

    let app = Router::new()
        .route(
            "/whoami",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                store::get_corr_id()
            }),
        )
        .route(
            "/attr",
            get(|| async {
                let mdal = logging::get_mdal_logger("test.attr");
                mdal.add_global_attribute("handled", "yes");
                "ok"
            }),
        )
        .layer(middleware::from_fn(propagate_correlation));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}
