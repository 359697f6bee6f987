//! SQL DDL for initializing the order table.
//! Executed against the primary only; the replica receives it through replication.

/// Postgres schema with:
/// - `order_id` BIGSERIAL PRIMARY KEY, assigned by the store
/// - `status` / `payment_method` nullable varchars
/// - `created_at` defaulted by the database
///
/// `IF NOT EXISTS` keeps re-runs idempotent.
pub const PG_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id BIGSERIAL PRIMARY KEY,
    customer_id BIGINT NOT NULL,
    total_amount DOUBLE PRECISION NOT NULL,
    status VARCHAR(20),
    payment_method VARCHAR(50),
    created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;
