//! Proximity-ranked search over a record snapshot.
//!
//! The pipeline annotates every record with its distance from the query
//! point, sorts by price then distance, and returns one page of the sorted
//! sequence. It never mutates its input and holds no state of its own, so
//! a given (snapshot, query, algorithm) triple always yields the same
//! output. O(n log n) in the snapshot size; fine for catalog-sized
//! snapshots, a spatial index would be needed for anything larger.

use crate::error::{CatalogError, Result};
use crate::{Hotel, RankedHotel, SearchQuery};
use std::cmp::Ordering;
use stayfind_geo::DistanceAlgorithm;

/// Ranks a snapshot of records against a query point and returns one page.
///
/// Ordering is price ascending with distance ascending as the tie-break;
/// records with equal price and distance keep their snapshot order. A page
/// past the end of the result set is an empty Vec, as is an empty
/// snapshot. `page` and `page_size` below 1 are rejected up front.
///
/// A Vincenty convergence failure on any record fails the whole query; a
/// partially ranked result would be misordered.
pub fn search(
    records: &[Hotel],
    query: &SearchQuery,
    algorithm: DistanceAlgorithm,
) -> Result<Vec<RankedHotel>> {
    if query.page < 1 {
        return Err(CatalogError::InvalidPage(query.page));
    }
    if query.page_size < 1 {
        return Err(CatalogError::InvalidPageSize(query.page_size));
    }

    let origin = query.coordinate();

    #[cfg(feature = "parallel")]
    let annotated: Result<Vec<RankedHotel>> = {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(|hotel| rank_one(hotel, &origin, algorithm))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let annotated: Result<Vec<RankedHotel>> = records
        .iter()
        .map(|hotel| rank_one(hotel, &origin, algorithm))
        .collect();

    let mut ranked = annotated?;

    // Stable sort: equal (price, distance) pairs keep snapshot order.
    ranked.sort_by(|a, b| {
        a.hotel
            .price
            .partial_cmp(&b.hotel.price)
            .unwrap_or(Ordering::Equal)
            .then(
                a.distance_meters
                    .partial_cmp(&b.distance_meters)
                    .unwrap_or(Ordering::Equal),
            )
    });

    let offset = (query.page as usize - 1) * query.page_size as usize;

    Ok(ranked
        .into_iter()
        .skip(offset)
        .take(query.page_size as usize)
        .collect())
}

#[inline]
fn rank_one(
    hotel: &Hotel,
    origin: &stayfind_geo::Coordinate,
    algorithm: DistanceAlgorithm,
) -> Result<RankedHotel> {
    let distance_meters = algorithm.distance_meters(origin, &hotel.coordinate())?;
    Ok(RankedHotel {
        hotel: hotel.clone(),
        distance_meters,
    })
}
