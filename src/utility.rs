use crate::Error;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

/// Converts a sexagesimal `degrees, minutes` pair to decimal degrees.
pub(crate) fn dm_to_degrees(degrees: f64, minutes: f64) -> f64 {
    degrees + minutes / f64::from(dms::DM)
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn remainder(&self, denom: Self) -> Self;
    fn atanh_checked(&self, what: &'static str) -> Result<Self, Error>
    where Self: Sized;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Reduces an angle in degrees to `[-180, 180)`.
    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(f64::from(dms::TD));
        let hd = f64::from(dms::HD);

        if value.abs().eps_eq(hd) {
            -hd
        }
        else {
            value
        }
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }

    /// `0.5 * ln((1 + x) / (1 - x))`, defined only on the open interval (-1, 1).
    fn atanh_checked(&self, what: &'static str) -> Result<f64, Error> {
        if self.is_nan() || self.abs() >= 1.0 {
            return Err(Error::Domain { what, value: *self });
        }

        Ok(0.5 * ((1.0 + *self) / (1.0 - *self)).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atanh_rejects_boundary() {
        assert!(1.0_f64.atanh_checked("test").is_err());
        assert!((-1.0_f64).atanh_checked("test").is_err());
        assert!(f64::NAN.atanh_checked("test").is_err());
    }

    #[test]
    fn atanh_matches_std() {
        for x in [-0.9_f64, -0.25, 0.0, 0.3, 0.75] {
            let ours = x.atanh_checked("test").unwrap();
            assert!((ours - x.atanh()).abs() < 1e-14);
        }
    }

    #[test]
    fn normalizes_longitude() {
        assert!(190.0_f64.ang_normalize().eps_eq(-170.0));
        assert!(180.0_f64.ang_normalize().eps_eq(-180.0));
        assert!((-45.0_f64).ang_normalize().eps_eq(-45.0));
    }

    #[test]
    fn converts_degrees_minutes() {
        assert!(dm_to_degrees(139.0, 50.0).eps_eq(139.0 + 50.0 / 60.0));
    }
}
