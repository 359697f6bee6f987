use crate::db::NewOrder;
use crate::error::OrdexError;
use crate::router::OrdexState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

/// GET / -> liveness probe; never touches the database.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": 200, "message": "OK"}))
}

/// POST /orders -> insert one row via the primary.
///
/// Payload shape errors (missing field, wrong type) are rejected by the
/// `Json` extractor before this body runs, so only database failures
/// surface from here.
pub async fn create_order(
    State(state): State<OrdexState>,
    Json(payload): Json<NewOrder>,
) -> Result<impl IntoResponse, OrdexError> {
    let created = state.store.insert_order(&payload).await?;
    info!(order_id = created.order_id, "order created on primary");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "order created on primary",
            "data": created,
        })),
    ))
}

/// GET /orders -> the 20 most recent rows from the replica, newest first.
pub async fn list_orders(
    State(state): State<OrdexState>,
) -> Result<impl IntoResponse, OrdexError> {
    let orders = state.store.list_recent().await?;
    Ok(Json(json!({ "data": orders })))
}
