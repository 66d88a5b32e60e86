//! # innkeep-domain
//!
//! Pure domain model for the innkeep hotel catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Hotels** and their validated **Rating**
//! - Define the create input ([`hotel::NewHotel`]) and the sparse update
//!   input ([`hotel::HotelPatch`]) with its field-by-field merge
//! - Offset **pagination** arithmetic over an ordered snapshot
//! - Derive `OpenAPI` schemas for the types that appear on the wire
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod hotel;
pub mod page;
