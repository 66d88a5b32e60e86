//! # innkeep-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `HotelRepository` port defined in `innkeep-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `innkeep-app` (for port traits) and `innkeep-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod hotel_repo;
mod pool;

pub use error::StorageError;
pub use hotel_repo::SqliteHotelRepository;
pub use pool::{Config, Database};
