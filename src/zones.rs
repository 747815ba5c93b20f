use std::fmt::Display;

use crate::{Error, geodetic::GeodeticPoint, utility::dm_to_degrees};

pub(crate) mod zonespec {
    pub(crate) const MINZONE: i32 = 1;
    pub(crate) const MAXZONE: i32 = 19;
}

// Origins of the plane rectangular coordinate system of Japan as
// (latitude degrees, minutes, longitude degrees, minutes), zones I..XIX
const ORIGINS: [(f64, f64, f64, f64); 19] = [
    (33., 0., 129., 30.),
    (33., 0., 131., 0.),
    (36., 0., 132., 10.),
    (33., 0., 133., 30.),
    (36., 0., 134., 20.),
    (36., 0., 136., 0.),
    (36., 0., 137., 10.),
    (36., 0., 138., 30.),
    (36., 0., 139., 50.),
    (40., 0., 140., 50.),
    (44., 0., 140., 15.),
    (44., 0., 142., 15.),
    (44., 0., 144., 15.),
    (26., 0., 142., 0.),
    (26., 0., 127., 30.),
    (26., 0., 124., 0.),
    (26., 0., 131., 0.),
    (20., 0., 136., 0.),
    (26., 0., 154., 0.),
];

const ROMAN: [&str; 19] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X",
    "XI", "XII", "XIII", "XIV", "XV", "XVI", "XVII", "XVIII", "XIX",
];

/// One of the 19 zones of the Japanese plane rectangular coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JapanZone(u8);

impl JapanZone {
    /// Tries to create a zone from its number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the number is outside `[1, 19]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use heimen::JapanZone;
    ///
    /// let zone = JapanZone::from_number(9).unwrap();
    /// assert_eq!(zone.to_string(), "IX");
    ///
    /// let origin = zone.origin();
    /// assert_eq!(origin.latitude(), 36.0);
    /// assert!((origin.longitude() - 139.833333333).abs() < 1e-8);
    ///
    /// assert!(JapanZone::from_number(0).is_err());
    /// assert!(JapanZone::from_number(20).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_number(zone: i32) -> Result<JapanZone, Error> {
        if !(zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        Ok(JapanZone(zone as u8))
    }

    /// All zones in ascending order.
    pub fn all() -> impl Iterator<Item = JapanZone> {
        (1..=19).map(JapanZone)
    }

    pub fn number(&self) -> i32 {
        i32::from(self.0)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// Returns the zone origin.
    pub fn origin(&self) -> GeodeticPoint {
        let (lat_d, lat_m, lon_d, lon_m) = ORIGINS[self.index()];
        GeodeticPoint::new(dm_to_degrees(lon_d, lon_m), dm_to_degrees(lat_d, lat_m))
    }
}

impl Display for JapanZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ROMAN[self.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zones_have_origins() {
        let zones = JapanZone::all().collect::<Vec<_>>();
        assert_eq!(zones.len(), 19);
        for zone in zones {
            let origin = zone.origin();
            assert!(GeodeticPoint::create(origin.longitude(), origin.latitude()).is_ok());
        }
    }

    #[test]
    fn zone_origins() {
        let i = JapanZone::from_number(1).unwrap().origin();
        assert_eq!((i.longitude(), i.latitude()), (129.5, 33.));

        let xix = JapanZone::from_number(19).unwrap().origin();
        assert_eq!((xix.longitude(), xix.latitude()), (154., 26.));
    }

    #[test]
    fn invalid_zone() {
        assert!(matches!(JapanZone::from_number(-1), Err(Error::InvalidZone(-1))));
    }
}
