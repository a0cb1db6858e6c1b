//! Database module: the single `portfolios` table.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and insert payloads
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: storage operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbPortfolio, NewPortfolio};
pub use schema::SQLITE_INIT;
pub use sqlite::PortfolioStorage;
