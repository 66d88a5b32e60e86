//! Shared application state for axum handlers.

use std::sync::Arc;

use innkeep_app::ports::HotelRepository;
use innkeep_app::services::hotel_service::HotelService;

/// Application state shared across all axum handlers.
///
/// Generic over the hotel repository to avoid dynamic dispatch; the storage
/// backend is picked once at startup. `Clone` is implemented manually so the
/// repository itself does not need to be `Clone` — only the `Arc` is cloned.
pub struct AppState<R> {
    /// Hotel CRUD service.
    pub hotel_service: Arc<HotelService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            hotel_service: Arc::clone(&self.hotel_service),
        }
    }
}

impl<R> AppState<R>
where
    R: HotelRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(hotel_service: HotelService<R>) -> Self {
        Self {
            hotel_service: Arc::new(hotel_service),
        }
    }
}
