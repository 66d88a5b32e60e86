//! Hotel repository port — persistence for hotels.

use std::future::Future;

use innkeep_domain::error::InnkeepError;
use innkeep_domain::hotel::{Hotel, HotelPatch, NewHotel};
use innkeep_domain::id::HotelId;

/// Repository for persisting and querying [`Hotel`]s.
///
/// Implementations own id assignment: ids increase monotonically over the
/// lifetime of the store and are never reused, even after a delete.
/// A missing record is reported as `None`/`false`, never as an error.
pub trait HotelRepository {
    /// Store a new hotel under a freshly assigned id.
    fn create(&self, hotel: NewHotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send;

    /// Get a hotel by its unique identifier.
    fn get_by_id(
        &self,
        id: HotelId,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send;

    /// Get all hotels in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Hotel>, InnkeepError>> + Send;

    /// Merge `patch` into the stored hotel and return the result.
    ///
    /// Returns `None` without touching anything when `id` is unknown.
    fn update(
        &self,
        id: HotelId,
        patch: HotelPatch,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send;

    /// Delete a hotel, returning `true` if it existed.
    fn delete(&self, id: HotelId) -> impl Future<Output = Result<bool, InnkeepError>> + Send;
}
