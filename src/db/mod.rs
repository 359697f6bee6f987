//! Database module: models, schema, and the primary/replica store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payloads
//! - `schema.rs`: SQL DDL for initializing the database (Postgres)
//! - `postgres.rs`: `OrderStore` routing writes to the primary, reads to the replica

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::{NewOrder, Order, OrderCreated};
pub use postgres::OrderStore;
pub use schema::PG_INIT;
