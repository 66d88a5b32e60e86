//! # innkeep-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** storage adapters must implement:
//!   - `HotelRepository` — id assignment and CRUD for hotels
//! - Define the **driving/inbound** use-case struct:
//!   - `HotelService` — paginated list, create, get, partial update, delete
//! - Turn storage-level absence into domain `NotFound` errors
//!
//! ## Dependency rule
//! Depends on `innkeep-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
