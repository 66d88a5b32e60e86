//! # innkeep-adapter-storage-memory
//!
//! Volatile persistence adapter: hotels live in process memory and vanish on
//! restart.
//!
//! ## Responsibilities
//! - Implement the `HotelRepository` port defined in `innkeep-app::ports`
//! - Assign monotonically increasing ids, never reused after a delete
//! - Serialize every operation on one lock so the id counter and the map stay
//!   consistent under parallel requests
//!
//! ## Dependency rule
//! Depends on `innkeep-app` (for port traits) and `innkeep-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod hotel_repo;

pub use error::StorageError;
pub use hotel_repo::InMemoryHotelRepository;
