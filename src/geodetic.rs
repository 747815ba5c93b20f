use std::fmt::Display;

use crate::Error;

/// Geographic longitude/latitude in degrees on the reference ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl GeodeticPoint {
    /// Internal-only constructor that doesn't check the bounds of lon/lat
    pub(crate) fn new(lon: f64, lat: f64) -> GeodeticPoint {
        Self {
            longitude: lon,
            latitude: lat,
        }
    }

    /// Tries to create a geodetic point from a lon/lat pair. First checks if the
    /// values are valid:
    /// * Longitude must be in range [-180,180]
    /// * Latitude must be in range [-90,90]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use heimen::GeodeticPoint;
    ///
    /// let coord = GeodeticPoint::create(139.741357, 35.658099);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.longitude(), 139.741357);
    /// assert_eq!(coord.latitude(), 35.658099);
    ///
    /// assert!(GeodeticPoint::create(0.0, 100.0).is_err());
    /// assert!(GeodeticPoint::create(-200.0, 0.0).is_err());
    /// assert!(GeodeticPoint::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lon: f64, lat: f64) -> Result<GeodeticPoint, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(GeodeticPoint::new(lon, lat))
        }
    }

    /// Returns the longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl Display for GeodeticPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        write!(
            f,
            "{lon} {lat}",
        )
    }
}
