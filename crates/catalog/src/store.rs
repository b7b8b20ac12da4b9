//! In-memory record storage.
//!
//! The store owns the hotel records and hands the search pipeline an
//! immutable snapshot per query. Snapshots are materialized in id order,
//! which is the stable baseline order for ranking ties.

use crate::error::{CatalogError, Result};
use crate::{Hotel, NewHotel};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Read/write access to the hotel records backing one catalog.
pub trait RecordStore: Send + Sync {
    /// A point-in-time copy of every record, in id order.
    fn snapshot(&self) -> Vec<Hotel>;

    /// Looks up a single record by id.
    fn get(&self, id: u64) -> Option<Hotel>;

    /// Inserts a record, assigning it the next free id.
    fn insert(&self, hotel: NewHotel) -> Hotel;

    /// Replaces the record with the given id.
    fn update(&self, id: u64, hotel: NewHotel) -> Result<Hotel>;

    /// Removes the record with the given id, returning it.
    fn remove(&self, id: u64) -> Result<Hotel>;

    /// Whether any record carries this display name.
    fn contains_name(&self, name: &str) -> bool;

    /// Number of records in the store.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory store with monotonically increasing ids.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    hotels: RwLock<BTreeMap<u64, Hotel>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    /// Creates an empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self {
            hotels: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_records(records: impl IntoIterator<Item = NewHotel>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }
}

impl RecordStore for InMemoryStore {
    fn snapshot(&self) -> Vec<Hotel> {
        // BTreeMap iteration gives id order for free.
        self.hotels.read().unwrap_or_else(|e| e.into_inner()).values().cloned().collect()
    }

    fn get(&self, id: u64) -> Option<Hotel> {
        self.hotels.read().unwrap_or_else(|e| e.into_inner()).get(&id).cloned()
    }

    fn insert(&self, hotel: NewHotel) -> Hotel {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = Hotel {
            id,
            name: hotel.name,
            price: hotel.price,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
        };
        self.hotels
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, record.clone());
        record
    }

    fn update(&self, id: u64, hotel: NewHotel) -> Result<Hotel> {
        let mut hotels = self.hotels.write().unwrap_or_else(|e| e.into_inner());
        match hotels.get_mut(&id) {
            Some(existing) => {
                existing.name = hotel.name;
                existing.price = hotel.price;
                existing.latitude = hotel.latitude;
                existing.longitude = hotel.longitude;
                Ok(existing.clone())
            }
            None => Err(CatalogError::NotFound { id }),
        }
    }

    fn remove(&self, id: u64) -> Result<Hotel> {
        self.hotels
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id)
            .ok_or(CatalogError::NotFound { id })
    }

    fn contains_name(&self, name: &str) -> bool {
        self.hotels
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .any(|h| h.name == name)
    }

    fn len(&self) -> usize {
        self.hotels.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
