//! `SQLite` implementation of [`HotelRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::HotelRepository;
use innkeep_domain::error::InnkeepError;
use innkeep_domain::hotel::{Hotel, HotelPatch, NewHotel, Rating};
use innkeep_domain::id::HotelId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Hotel`].
struct Wrapper(Hotel);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Hotel> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let city: String = row.try_get("city")?;
        let description: String = row.try_get("description")?;
        let name: String = row.try_get("name")?;
        let rating: i64 = row.try_get("rating")?;

        let rating = Rating::new(rating).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Hotel {
            id: HotelId::new(id),
            city,
            description,
            name,
            rating,
        }))
    }
}

const INSERT: &str = "INSERT INTO hotels (city, description, name, rating) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM hotels WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM hotels ORDER BY id";
const UPDATE_RETURNING: &str = "UPDATE hotels SET \
    city = COALESCE(?, city), \
    description = COALESCE(?, description), \
    name = COALESCE(?, name), \
    rating = COALESCE(?, rating) \
    WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM hotels WHERE id = ?";

/// `SQLite`-backed hotel repository.
///
/// Ids come from an `AUTOINCREMENT` primary key, so they are never reused.
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HotelRepository for SqliteHotelRepository {
    async fn create(&self, hotel: NewHotel) -> Result<Hotel, InnkeepError> {
        let result = sqlx::query(INSERT)
            .bind(&hotel.city)
            .bind(&hotel.description)
            .bind(&hotel.name)
            .bind(i64::from(hotel.rating))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(hotel.into_hotel(HotelId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: HotelId) -> Result<Option<Hotel>, InnkeepError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Hotel>, InnkeepError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: HotelId, patch: HotelPatch) -> Result<Option<Hotel>, InnkeepError> {
        // One statement, so the merge is atomic and takes the write lock up front.
        let row: Option<Wrapper> = sqlx::query_as(UPDATE_RETURNING)
            .bind(patch.city)
            .bind(patch.description)
            .bind(patch.name)
            .bind(patch.rating.map(i64::from))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn delete(&self, id: HotelId) -> Result<bool, InnkeepError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
