//! roster-api-mock - standalone mock of the employee records backend
//!
//! Long-running dev server that:
//! - Serves the four Employee routes against an in-memory store
//! - Seeds a handful of sample records on startup
//! - Lets roster-desk run without the production backend

use std::sync::Arc;

use roster_api_mock::EmployeeStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenv::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_api_mock=info,tower_http=info".into()),
        )
        .init();

    let port: u16 = std::env::var("MOCK_HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5205);

    let store = Arc::new(EmployeeStore::with_samples().await);
    let app = roster_api_mock::router(store);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("roster-api-mock listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
