//! Hotel catalog with proximity-ranked search for Stayfind.
//!
//! This crate provides:
//! - The [`Hotel`] record model and an in-memory [`RecordStore`]
//! - The price-then-distance [`search`] ranking pipeline with pagination
//! - A [`CatalogService`] facade wiring a store to a configured distance
//!   algorithm
//!
//! The ranking core is pure and stateless: it reads an immutable snapshot
//! of records and produces fresh output, so concurrent queries against the
//! same snapshot are always safe.
//!
//! # Example
//!
//! ```
//! use stayfind_catalog::{CatalogService, InMemoryStore, NewHotel, SearchQuery};
//! use stayfind_geo::DistanceAlgorithm;
//!
//! let service = CatalogService::new(InMemoryStore::new(), DistanceAlgorithm::Haversine);
//! service.create(NewHotel {
//!     name: "Hotel Adlon".into(),
//!     price: 320.0,
//!     latitude: 52.5163,
//!     longitude: 13.3777,
//! }).unwrap();
//!
//! let results = service.search(&SearchQuery::new(52.52, 13.40)).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

mod error;
mod search;
mod service;
mod store;

pub use error::{CatalogError, CatalogErrorCode, Result};
pub use search::search;
pub use service::CatalogService;
pub use store::{InMemoryStore, RecordStore};

use serde::{Deserialize, Serialize};

/// A hotel record.
///
/// Owned by the record store; the search core only ever reads it. The id
/// is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Store-assigned identity, stable for the lifetime of the record.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Price per night, in the catalog's base currency.
    pub price: f64,
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl Hotel {
    /// The record's location as a geo coordinate.
    #[inline]
    pub fn coordinate(&self) -> stayfind_geo::Coordinate {
        stayfind_geo::Coordinate::new(self.latitude, self.longitude)
    }
}

/// Payload for creating or replacing a hotel record; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    /// Display name.
    pub name: String,
    /// Price per night, in the catalog's base currency.
    pub price: f64,
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

/// A hotel annotated with its distance from a query point.
///
/// Derived fresh per query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHotel {
    /// The underlying record.
    pub hotel: Hotel,
    /// Distance from the query point in meters.
    pub distance_meters: f64,
}

/// Parameters of one proximity search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Query point latitude in degrees.
    pub latitude: f64,
    /// Query point longitude in degrees.
    pub longitude: f64,
    /// 1-based page number.
    pub page: u32,
    /// Number of results per page.
    pub page_size: u32,
}

impl SearchQuery {
    /// Default page size when the caller does not specify one.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Creates a query for the first page with the default page size.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// The query point as a geo coordinate.
    #[inline]
    pub fn coordinate(&self) -> stayfind_geo::Coordinate {
        stayfind_geo::Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new(52.52, 13.40);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, SearchQuery::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_query_builders() {
        let query = SearchQuery::new(0.0, 0.0).page(3).page_size(25);
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_ranked_hotel_serializes_flat() {
        let ranked = RankedHotel {
            hotel: Hotel {
                id: 1,
                name: "Test".into(),
                price: 99.5,
                latitude: 50.0,
                longitude: 10.0,
            },
            distance_meters: 1234.5,
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["hotel"]["id"], 1);
        assert_eq!(json["distance_meters"], 1234.5);
    }
}
