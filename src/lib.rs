//! Projection of geographic coordinates onto Gauss-Krüger plane rectangular
//! coordinates about an arbitrary origin, using the Krüger series in the
//! third flattening truncated at order 5.
//!
//! ```
//! let p = heimen::project_grs80(136.0, 37.0, 135.0, 36.0).unwrap();
//!
//! assert!((p.x - 111_424.668_583).abs() < 1e-3);
//! assert!((p.y - 89_004.028_314).abs() < 1e-3);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::cast_precision_loss,
    clippy::many_single_char_names
)]

use thiserror::Error;

pub mod batch;
pub mod ellipsoid;
pub mod geodetic;
pub mod plane;
pub mod poslist;
pub mod zones;

pub use ellipsoid::Ellipsoid;
pub use geodetic::GeodeticPoint;
pub use plane::{PlaneCoordinate, PlanePoint};
pub use projections::{
    conformal::{conformal_coordinate, ConformalCoordinate},
    series::SeriesCoefficients,
    transverse_mercator::{Trace, TransverseMercator},
};
pub use zones::JapanZone;

pub mod projections {
    pub mod conformal;
    pub mod series;
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Ellipsoid parameters are not valid: {0}")]
    InvalidEllipsoid(String),
    #[error("Central scale factor {0} must be a positive finite number")]
    InvalidScale(f64),
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Argument of {what} is out of domain: {value}")]
    Domain {
        what: &'static str,
        value: f64,
    },
    #[error("Malformed coordinate text at line {line}: {msg}")]
    MalformedInput {
        line: usize,
        msg: String,
    },
    #[error("Zone {0} not in range [1, 19]")]
    InvalidZone(i32),
}

/// Projects `(longitude, latitude)` to plane coordinates relative to
/// `(origin_longitude, origin_latitude)`. All angles are in degrees.
///
/// # Errors
///
/// * [`Error::InvalidCoord`] if either point is out of range or not finite
/// * [`Error::InvalidEllipsoid`] / [`Error::InvalidScale`] for bad parameters
/// * [`Error::Domain`] at the poles
///
/// # Usage
///
/// ```
/// use heimen::{project, Ellipsoid, Error};
///
/// let p = project(135.0, 36.0, 135.0, 36.0, Ellipsoid::GRS80, 0.9999).unwrap();
/// assert!(p.x.abs() < 1e-7);
/// assert_eq!(p.y, 0.0);
///
/// let pole = project(135.0, 90.0, 135.0, 36.0, Ellipsoid::GRS80, 0.9999);
/// assert!(matches!(pole, Err(Error::Domain { .. })));
/// ```
pub fn project(
    longitude: f64,
    latitude: f64,
    origin_longitude: f64,
    origin_latitude: f64,
    ellipsoid: Ellipsoid,
    central_scale: f64,
) -> Result<PlaneCoordinate, Error> {
    let origin = GeodeticPoint::create(origin_longitude, origin_latitude)?;
    let point = GeodeticPoint::create(longitude, latitude)?;

    TransverseMercator::new(ellipsoid, origin, central_scale)?.project(&point)
}

/// [`project`] on GRS80 with central scale factor `0.9999`.
///
/// # Errors
///
/// See [`project`].
pub fn project_grs80(
    longitude: f64,
    latitude: f64,
    origin_longitude: f64,
    origin_latitude: f64,
) -> Result<PlaneCoordinate, Error> {
    project(longitude, latitude, origin_longitude, origin_latitude, Ellipsoid::GRS80, constants::PLANE_M0)
}

/// Maps plane coordinates relative to `(origin_longitude, origin_latitude)`
/// back to `(longitude, latitude)` in degrees.
///
/// # Errors
///
/// Same parameter errors as [`project`], plus [`Error::InvalidCoord`] for
/// non-finite plane coordinates and [`Error::Domain`] when the coordinates lie
/// too far from the origin to map back to a finite latitude and longitude.
///
/// # Usage
///
/// ```
/// use heimen::{unproject, Ellipsoid};
///
/// let p = unproject(11_543.6883, 22_916.2436, 139.0 + 50.0 / 60.0, 36.0, Ellipsoid::GRS80, 0.9999).unwrap();
///
/// assert!((p.longitude() - 140.087855042).abs() < 1e-8);
/// assert!((p.latitude() - 36.103774792).abs() < 1e-8);
/// ```
pub fn unproject(
    x: f64,
    y: f64,
    origin_longitude: f64,
    origin_latitude: f64,
    ellipsoid: Ellipsoid,
    central_scale: f64,
) -> Result<GeodeticPoint, Error> {
    let origin = GeodeticPoint::create(origin_longitude, origin_latitude)?;

    TransverseMercator::new(ellipsoid, origin, central_scale)?.unproject(&PlaneCoordinate::new(x, y))
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
