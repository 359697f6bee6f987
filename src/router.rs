use crate::db::OrderStore;
use crate::handlers::orders;
use axum::{
    Router,
    routing::{get, post},
};

/// Shared application state: the two static pools behind `OrderStore` are
/// the only cross-request state in the process.
#[derive(Clone)]
pub struct OrdexState {
    pub store: OrderStore,
}

impl OrdexState {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }
}

pub fn ordex_router(state: OrdexState) -> Router {
    Router::new()
        .route("/", get(orders::health))
        .route("/orders", get(orders::list_orders))
        .route("/orders", post(orders::create_order))
        .with_state(state)
}
