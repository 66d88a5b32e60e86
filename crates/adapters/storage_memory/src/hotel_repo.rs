//! In-memory implementation of [`HotelRepository`].

use std::collections::BTreeMap;
use std::future::{Future, ready};
use std::sync::{Mutex, MutexGuard, PoisonError};

use innkeep_app::ports::HotelRepository;
use innkeep_domain::error::InnkeepError;
use innkeep_domain::hotel::{Hotel, HotelPatch, NewHotel};
use innkeep_domain::id::HotelId;

use crate::error::StorageError;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    // Ids only grow, so key order is insertion order.
    hotels: BTreeMap<HotelId, Hotel>,
}

/// Volatile hotel repository.
///
/// One [`Mutex`] guards both the id counter and the records. It is never held
/// across an `.await`: every method does its work synchronously and hands back
/// an already-completed future.
#[derive(Debug, Default)]
pub struct InMemoryHotelRepository {
    inner: Mutex<Inner>,
}

impl InMemoryHotelRepository {
    /// Create an empty repository whose first id will be `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The map is never left half-written, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, hotel: NewHotel) -> Result<Hotel, StorageError> {
        let mut inner = self.lock();
        let next = inner
            .last_id
            .checked_add(1)
            .ok_or(StorageError::IdsExhausted)?;
        inner.last_id = next;

        let hotel = hotel.into_hotel(HotelId::new(next));
        inner.hotels.insert(hotel.id, hotel.clone());
        tracing::trace!(id = %hotel.id, "hotel inserted");
        Ok(hotel)
    }
}

impl HotelRepository for InMemoryHotelRepository {
    fn create(&self, hotel: NewHotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send {
        ready(self.insert(hotel).map_err(InnkeepError::from))
    }

    fn get_by_id(
        &self,
        id: HotelId,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send {
        let result = self.lock().hotels.get(&id).cloned();
        ready(Ok(result))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hotel>, InnkeepError>> + Send {
        let result: Vec<Hotel> = self.lock().hotels.values().cloned().collect();
        ready(Ok(result))
    }

    fn update(
        &self,
        id: HotelId,
        patch: HotelPatch,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send {
        let result = self.lock().hotels.get_mut(&id).map(|hotel| {
            patch.apply(hotel);
            hotel.clone()
        });
        ready(Ok(result))
    }

    fn delete(&self, id: HotelId) -> impl Future<Output = Result<bool, InnkeepError>> + Send {
        let removed = self.lock().hotels.remove(&id).is_some();
        ready(Ok(removed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn test_hotel(name: &str) -> NewHotel {
        Hotel::builder()
            .city("Paris")
            .description("Nice")
            .name(name)
            .rating(4)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_starting_at_one() {
        let repo = InMemoryHotelRepository::new();

        let a = repo.create(test_hotel("A")).await.unwrap();
        let b = repo.create(test_hotel("B")).await.unwrap();

        assert_eq!(a.id, HotelId::new(1));
        assert_eq!(b.id, HotelId::new(2));
    }

    #[tokio::test]
    async fn should_not_reuse_id_after_delete() {
        let repo = InMemoryHotelRepository::new();
        let a = repo.create(test_hotel("A")).await.unwrap();
        let b = repo.create(test_hotel("B")).await.unwrap();

        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.create(test_hotel("C")).await.unwrap();

        assert!(c.id > b.id);
        assert!(c.id > a.id);
    }

    #[tokio::test]
    async fn should_return_identical_record_after_create() {
        let repo = InMemoryHotelRepository::new();
        let created = repo.create(test_hotel("A")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_hotel_not_found() {
        let repo = InMemoryHotelRepository::new();
        assert!(repo.get_by_id(HotelId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_in_insertion_order() {
        let repo = InMemoryHotelRepository::new();
        for name in ["C", "A", "B"] {
            repo.create(test_hotel(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[tokio::test]
    async fn should_merge_only_supplied_fields_on_update() {
        let repo = InMemoryHotelRepository::new();
        let created = repo.create(test_hotel("A")).await.unwrap();

        let patch = HotelPatch {
            city: Some("X".to_string()),
            ..HotelPatch::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.city, "X");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.rating, created.rating);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_hotel() {
        let repo = InMemoryHotelRepository::new();
        let patch = HotelPatch {
            name: Some("Ghost".to_string()),
            ..HotelPatch::default()
        };
        assert!(repo.update(HotelId::new(3), patch).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_twice() {
        let repo = InMemoryHotelRepository::new();
        let created = repo.create(test_hotel("A")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_assign_unique_ids_under_concurrent_creates() {
        let repo = Arc::new(InMemoryHotelRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(test_hotel(&format!("H{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.get());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&64));
    }

    #[tokio::test]
    async fn should_fail_when_id_space_is_exhausted() {
        let repo = InMemoryHotelRepository::new();
        repo.lock().last_id = i64::MAX;

        let result = repo.create(test_hotel("A")).await;
        assert!(matches!(result, Err(InnkeepError::Storage(_))));
    }
}
