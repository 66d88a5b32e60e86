//! Hotel — the single resource managed by innkeep.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{InnkeepError, ValidationError};
use crate::id::HotelId;

/// Star rating of a hotel, always within `1..=5`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] when `value` is outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(ValidationError::RatingOutOfRange(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored hotel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hotel {
    pub id: HotelId,
    pub city: String,
    pub description: String,
    pub name: String,
    pub rating: Rating,
}

impl Hotel {
    /// Create a builder for the fields of a hotel that does not exist yet.
    #[must_use]
    pub fn builder() -> NewHotelBuilder {
        NewHotelBuilder::default()
    }
}

/// A validated hotel waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHotel {
    pub city: String,
    pub description: String,
    pub name: String,
    pub rating: Rating,
}

impl NewHotel {
    /// Attach the id chosen by the store.
    #[must_use]
    pub fn into_hotel(self, id: HotelId) -> Hotel {
        Hotel {
            id,
            city: self.city,
            description: self.description,
            name: self.name,
            rating: self.rating,
        }
    }
}

/// Step-by-step builder for [`NewHotel`].
#[derive(Debug, Default)]
pub struct NewHotelBuilder {
    city: Option<String>,
    description: Option<String>,
    name: Option<String>,
    rating: Option<i64>,
}

impl NewHotelBuilder {
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Consume the builder, validate, and return a [`NewHotel`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if a field is missing or the
    /// rating is outside `1..=5`.
    pub fn build(self) -> Result<NewHotel, InnkeepError> {
        Ok(NewHotel {
            city: self.city.ok_or(ValidationError::MissingField("city"))?,
            description: self
                .description
                .ok_or(ValidationError::MissingField("description"))?,
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            rating: Rating::new(self.rating.ok_or(ValidationError::MissingField("rating"))?)?,
        })
    }
}

/// Sparse update: only the fields set to `Some` overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPatch {
    pub city: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub rating: Option<Rating>,
}

impl HotelPatch {
    /// Build a patch from raw wire values, validating the rating if supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] when `rating` is supplied
    /// and outside `1..=5`.
    pub fn new(
        city: Option<String>,
        description: Option<String>,
        name: Option<String>,
        rating: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            city,
            description,
            name,
            rating: rating.map(Rating::new).transpose()?,
        })
    }

    /// `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.description.is_none()
            && self.name.is_none()
            && self.rating.is_none()
    }

    /// Overwrite the supplied fields of `hotel`, leaving the rest untouched.
    /// The id is never changed.
    pub fn apply(self, hotel: &mut Hotel) {
        if let Some(city) = self.city {
            hotel.city = city;
        }
        if let Some(description) = self.description {
            hotel.description = description;
        }
        if let Some(name) = self.name {
            hotel.name = name;
        }
        if let Some(rating) = self.rating {
            hotel.rating = rating;
        }
    }
}
