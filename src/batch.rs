use log::debug;
use rayon::prelude::*;

use crate::{Error, GeodeticPoint, PlaneCoordinate, TransverseMercator};

/// Projects every point in parallel. Each point keeps its own result, so a
/// point at the pole doesn't spoil the rest of the batch.
///
/// # Usage
///
/// ```
/// use heimen::{GeodeticPoint, TransverseMercator, batch::project_batch};
///
/// let tm = TransverseMercator::grs80(GeodeticPoint::create(135.0, 36.0).unwrap()).unwrap();
/// let points = [
///     GeodeticPoint::create(135.0, 36.0).unwrap(),
///     GeodeticPoint::create(135.0, 90.0).unwrap(),
/// ];
///
/// let results = project_batch(&tm, &points);
///
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn project_batch(tm: &TransverseMercator, points: &[GeodeticPoint]) -> Vec<Result<PlaneCoordinate, Error>> {
    debug!("Projecting {} points about {}", points.len(), tm.origin());

    points
        .par_iter()
        .map(|point| tm.project(point))
        .collect()
}

/// Inverse of [`project_batch`].
pub fn unproject_batch(tm: &TransverseMercator, coords: &[PlaneCoordinate]) -> Vec<Result<GeodeticPoint, Error>> {
    debug!("Unprojecting {} points about {}", coords.len(), tm.origin());

    coords
        .par_iter()
        .map(|coord| tm.unproject(coord))
        .collect()
}
