//! Hotel service — use-cases for managing hotels.

use innkeep_domain::error::{InnkeepError, NotFoundError};
use innkeep_domain::hotel::{Hotel, HotelPatch, NewHotel};
use innkeep_domain::id::HotelId;
use innkeep_domain::page::{Page, PageRequest};

use crate::ports::HotelRepository;

fn not_found(id: HotelId) -> InnkeepError {
    NotFoundError {
        entity: "Hotel",
        id: id.to_string(),
    }
    .into()
}

/// Application service for hotel CRUD operations.
pub struct HotelService<R> {
    repo: R,
}

impl<R: HotelRepository> HotelService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return one page of hotels, in the repository's stable order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_hotels(
        &self,
        request: PageRequest,
        sort: Option<String>,
    ) -> Result<Page<Hotel>, InnkeepError> {
        let hotels = self.repo.get_all().await?;
        Ok(Page::from_items(hotels, request, sort))
    }

    /// Store a validated hotel and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, hotel), fields(hotel_name = %hotel.name))]
    pub async fn create_hotel(&self, hotel: NewHotel) -> Result<Hotel, InnkeepError> {
        let created = self.repo.create(hotel).await?;
        tracing::debug!(id = %created.id, "hotel created");
        Ok(created)
    }

    /// Look up a hotel by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no hotel with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_hotel(&self, id: HotelId) -> Result<Hotel, InnkeepError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Apply a partial update to an existing hotel.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no hotel with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_hotel(&self, id: HotelId, patch: HotelPatch) -> Result<Hotel, InnkeepError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no hotel with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_hotel(&self, id: HotelId) -> Result<(), InnkeepError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
