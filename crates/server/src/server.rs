use axum::{Router, routing::post};

use crate::settlement;

/// Builds the settlement router.
///
/// All routes take the expense set in the request body, so everything is
/// `POST` even though the computations are reads. The router carries no
/// state: authorization and storage belong to the collaborating layer.
pub fn router() -> Router {
    Router::new()
        .route("/settlements", post(settlement::settle_all))
        .route("/settlements/user", post(settlement::settle_for_user))
        .route("/balances/user", post(settlement::net_balance))
        .route("/expenses/total", post(settlement::expenses_total))
        .route("/expenses/check", post(settlement::check_expense))
}

pub async fn run() {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router()).await
}

pub fn spawn_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
