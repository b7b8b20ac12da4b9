//! Catalog facade combining a record store with a configured distance
//! algorithm.

use crate::error::{CatalogError, Result};
use crate::store::RecordStore;
use crate::{search, Hotel, NewHotel, RankedHotel, SearchQuery};
use stayfind_geo::DistanceAlgorithm;
use tracing::{debug, info};

/// One catalog: the record store plus the deployment's distance algorithm.
///
/// The algorithm is fixed at construction time; queries cannot override it.
#[derive(Debug)]
pub struct CatalogService<S: RecordStore> {
    store: S,
    algorithm: DistanceAlgorithm,
}

impl<S: RecordStore> CatalogService<S> {
    /// Creates a service over the given store and algorithm.
    pub fn new(store: S, algorithm: DistanceAlgorithm) -> Self {
        info!(algorithm = %algorithm, "catalog service configured");
        Self { store, algorithm }
    }

    /// The configured distance algorithm.
    pub fn algorithm(&self) -> DistanceAlgorithm {
        self.algorithm
    }

    /// All records, in id order.
    pub fn hotels(&self) -> Vec<Hotel> {
        self.store.snapshot()
    }

    /// Looks up one record by id.
    pub fn hotel(&self, id: u64) -> Result<Hotel> {
        self.store.get(id).ok_or(CatalogError::NotFound { id })
    }

    /// Creates a record, rejecting duplicate display names.
    pub fn create(&self, hotel: NewHotel) -> Result<Hotel> {
        if self.store.contains_name(&hotel.name) {
            return Err(CatalogError::DuplicateName { name: hotel.name });
        }
        let created = self.store.insert(hotel);
        debug!(id = created.id, name = %created.name, "hotel created");
        Ok(created)
    }

    /// Replaces the record with the given id.
    pub fn update(&self, id: u64, hotel: NewHotel) -> Result<Hotel> {
        let updated = self.store.update(id, hotel)?;
        debug!(id = updated.id, "hotel updated");
        Ok(updated)
    }

    /// Removes the record with the given id.
    pub fn delete(&self, id: u64) -> Result<Hotel> {
        let removed = self.store.remove(id)?;
        debug!(id = removed.id, "hotel deleted");
        Ok(removed)
    }

    /// Runs a proximity search against a snapshot of the store.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<RankedHotel>> {
        let snapshot = self.store.snapshot();
        debug!(
            latitude = query.latitude,
            longitude = query.longitude,
            page = query.page,
            page_size = query.page_size,
            records = snapshot.len(),
            "searching catalog"
        );
        search(&snapshot, query, self.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;

    fn service() -> CatalogService<InMemoryStore> {
        CatalogService::new(InMemoryStore::new(), DistanceAlgorithm::Haversine)
    }

    fn hotel(name: &str, price: f64, latitude: f64, longitude: f64) -> NewHotel {
        NewHotel {
            name: name.to_string(),
            price,
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_create_then_fetch() {
        let service = service();
        let created = service.create(hotel("Adlon", 320.0, 52.5163, 13.3777)).unwrap();
        assert_eq!(service.hotel(created.id).unwrap(), created);
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let service = service();
        service.create(hotel("Adlon", 320.0, 52.5163, 13.3777)).unwrap();
        let err = service.create(hotel("Adlon", 99.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
        assert_eq!(err.code(), crate::CatalogErrorCode::DuplicateName);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let service = service();
        assert!(matches!(service.hotel(5), Err(CatalogError::NotFound { id: 5 })));
        assert!(matches!(service.delete(5), Err(CatalogError::NotFound { id: 5 })));
        assert!(matches!(
            service.update(5, hotel("X", 1.0, 0.0, 0.0)),
            Err(CatalogError::NotFound { id: 5 })
        ));
    }

    #[test]
    fn test_search_ranks_store_snapshot() {
        let service = service();
        service.create(hotel("Pricey", 200.0, 50.001, 10.001)).unwrap();
        service.create(hotel("Cheap far", 100.0, 50.5, 10.5)).unwrap();
        service.create(hotel("Cheap near", 100.0, 50.01, 10.01)).unwrap();

        let results = service.search(&SearchQuery::new(50.0, 10.0)).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.hotel.name.as_str()).collect();
        assert_eq!(names, vec!["Cheap near", "Cheap far", "Pricey"]);
    }

    #[test]
    fn test_search_empty_store_is_empty() {
        let service = service();
        assert!(service.search(&SearchQuery::new(0.0, 0.0)).unwrap().is_empty());
    }
}
