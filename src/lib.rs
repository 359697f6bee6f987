pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;

pub use db::OrderStore;
pub use error::OrdexError;
