use crate::{Error, constants::{GRS80_A, GRS80_INV_F, BESSEL_A, BESSEL_INV_F}};

/// Reference ellipsoid described by its semi-major axis and inverse flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    #[cfg_attr(feature = "serde", serde(alias = "a"))]
    pub semi_major_axis: f64,
    /// Inverse flattening `1/f`
    #[cfg_attr(feature = "serde", serde(alias = "F", alias = "rf"))]
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    /// GRS80, the ellipsoid of JGD2000/JGD2011.
    pub const GRS80: Ellipsoid = Ellipsoid::new(GRS80_A, GRS80_INV_F);

    /// Bessel 1841, the ellipsoid of the Tokyo datum.
    pub const BESSEL: Ellipsoid = Ellipsoid::new(BESSEL_A, BESSEL_INV_F);

    /// Creates an ellipsoid without validating it. Validation happens when the
    /// third flattening is derived.
    pub const fn new(semi_major_axis: f64, inverse_flattening: f64) -> Ellipsoid {
        Self {
            semi_major_axis,
            inverse_flattening,
        }
    }

    /// Returns the third flattening `n = 1 / (2F - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if the semi-major axis is not a
    /// positive finite number, or if the inverse flattening would put `n`
    /// outside the open interval `(0, 1)`.
    ///
    /// # Usage
    ///
    /// ```
    /// use heimen::Ellipsoid;
    ///
    /// let n = Ellipsoid::GRS80.third_flattening().unwrap();
    /// assert!((n - 0.001_679_220_395).abs() < 1e-12);
    ///
    /// assert!(Ellipsoid::new(6_378_137.0, 0.5).third_flattening().is_err());
    /// ```
    pub fn third_flattening(&self) -> Result<f64, Error> {
        let a = self.semi_major_axis;
        let rf = self.inverse_flattening;

        if !a.is_finite() || a <= 0. {
            return Err(Error::InvalidEllipsoid(format!("Semi-major axis {a} must be a positive finite number.")));
        }
        // n < 1 <=> 2F - 1 > 1 <=> F > 1
        if !rf.is_finite() || rf <= 1. {
            return Err(Error::InvalidEllipsoid(format!("Inverse flattening {rf} must be a finite number greater than 1.")));
        }

        Ok(1. / (2. * rf - 1.))
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::GRS80
    }
}
