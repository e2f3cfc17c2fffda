//! Path length of a track.
//!
//! Haversine distance on the mean Earth radius, elevation is not taken into account.
//!

use geo::{point, HaversineDistance};

use igcinfo_formats::Fix;

/// Distance in km between two fixes.
///
#[inline]
pub fn distance(from: &Fix, to: &Fix) -> f64 {
    let p1 = point!(x: from.longitude, y: from.latitude);
    let p2 = point!(x: to.longitude, y: to.latitude);
    p1.haversine_distance(&p2) / 1_000.
}

/// Sum of the distances between consecutive fixes, in km.  0 for fewer than two fixes.
///
pub fn total_distance(fixes: &[Fix]) -> f64 {
    fixes.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
