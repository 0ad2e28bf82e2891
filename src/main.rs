//! Demo echo service wired with correlation propagation.
//!
//! Exercises the full flow end to end: inbound header decode, activity
//! logging inside the handler, and outbound header encode.

use std::time::Duration;

use axum::{middleware, routing::post, Router};
use clap::Parser;
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use corrlog::http::propagate_correlation;
use corrlog::logging::{self, ActivityEventStatus};

#[derive(Parser, Debug)]
#[command(name = "corrlog-demo", about = "Echo service demonstrating correlation propagation")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let app = Router::new()
        .route("/echo", post(echo))
        .layer(middleware::from_fn(propagate_correlation))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&args.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "corrlog demo service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn echo(body: String) -> String {
    let mdal = logging::get_mdal_logger("demo.echo");
    mdal.add_context("echo");
    mdal.add_global_attribute("endpoint", "echo");

    let mut event = Map::new();
    event.insert(
        "status".to_string(),
        Value::String(ActivityEventStatus::Success.to_string()),
    );
    event.insert("bytes".to_string(), Value::from(body.len()));
    mdal.log_event(&event);

    mdal.remove_top_context();
    body
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
