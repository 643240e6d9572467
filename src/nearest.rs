//! Nearest stream selection and distance ranking
use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    distance::haversine_km,
    position::{GeoPosition, Positioned},
};

/// Returns the record nearest to `query`.
/// The first record wins on ties. Records whose distance is
/// NaN (unknown coordinates) are never selected, so this returns
/// [None] for an empty input or when no record has a usable position.
pub fn nearest<I>(records: I, query: GeoPosition) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Positioned,
{
    nearest_with_distance(records, query).map(|(record, _)| record)
}

/// Same as [nearest], also returns the distance in km
pub fn nearest_with_distance<I>(records: I, query: GeoPosition) -> Option<(I::Item, f64)>
where
    I: IntoIterator,
    I::Item: Positioned,
{
    let mut best: Option<(I::Item, f64)> = None;
    let mut min_distance = f64::INFINITY;
    for record in records {
        let distance = haversine_km(query, record.position());
        // NaN never compares lower
        if distance < min_distance {
            min_distance = distance;
            best = Some((record, distance));
        }
    }
    best
}

/// Orders NaN distances after any number
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Pairs every record with its distance to `query` (in km) and
/// sorts by increasing distance. Sorting is stable: equally distant
/// records keep their input order. Records with unknown positions
/// are kept, at the end.
pub fn rank<I>(records: I, query: GeoPosition) -> Vec<(I::Item, f64)>
where
    I: IntoIterator,
    I::Item: Positioned,
{
    records
        .into_iter()
        .map(|record| {
            let distance = haversine_km(query, record.position());
            (record, distance)
        })
        .sorted_by(|(_, a), (_, b)| nan_last(*a, *b))
        .collect()
}
