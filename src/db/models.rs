use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted order row. Rows are insert-only; this service never
/// updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub total_amount: f64,
    pub status: Option<String>,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Order-creation payload as received on `POST /orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer_id: i64,
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
}

/// What the primary hands back for a successful insert.
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct OrderCreated {
    pub order_id: i64,
    pub created_at: DateTime<Utc>,
}
