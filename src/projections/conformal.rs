use crate::{Error, utility::GeoMath};

/// Conformal coordinates on the transverse sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformalCoordinate {
    pub xi: f64,
    pub eta: f64,
}

/// Maps geodetic latitude `phi` and longitude difference `dlambda` (both in
/// radians) to the conformal pair `(xi, eta)`.
///
/// Fails with [`Error::Domain`] at the poles, where `sin(phi) = ±1`, and where
/// `sin(dlambda) / t'` reaches ±1.
pub fn conformal_coordinate(phi: f64, dlambda: f64, n: f64) -> Result<ConformalCoordinate, Error> {
    let sin_phi = phi.sin();
    let c = (2. * n.sqrt()) / (1. + n);

    let t = (sin_phi.atanh_checked("sin(latitude)")?
        - c * (c * sin_phi).atanh_checked("eccentric sin(latitude)")?)
        .sinh();
    let t_ = (1. + t * t).sqrt();

    let (sin_dl, cos_dl) = dlambda.sin_cos();

    let xi = (t / cos_dl).atan();
    let eta = (sin_dl / t_).atanh_checked("sin(longitude difference) / t'")?;

    Ok(ConformalCoordinate { xi, eta })
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: f64 = 0.001_679_220_394_628_744_5;

    #[test]
    fn equator_on_central_meridian() {
        let c = conformal_coordinate(0., 0., N).unwrap();
        assert_eq!(c.xi, 0.);
        assert_eq!(c.eta, 0.);
    }

    #[test]
    fn pole_is_a_domain_error() {
        let result = conformal_coordinate(90_f64.to_radians(), 0., N);
        assert!(matches!(result, Err(Error::Domain { .. })));
    }

    #[test]
    fn conformal_latitude_is_below_geodetic() {
        let phi = 36_f64.to_radians();
        let c = conformal_coordinate(phi, 0., N).unwrap();
        assert!(c.xi < phi);
        assert!(phi - c.xi < 0.25_f64.to_radians());
    }

    #[test]
    fn eta_is_odd_in_longitude() {
        let phi = 36_f64.to_radians();
        let east = conformal_coordinate(phi, 0.02, N).unwrap();
        let west = conformal_coordinate(phi, -0.02, N).unwrap();
        assert_eq!(east.xi, west.xi);
        assert!((east.eta + west.eta).abs() < 1e-15);
    }

    #[test]
    fn quarter_turn_on_equator_is_a_domain_error() {
        let result = conformal_coordinate(0., 90_f64.to_radians(), N);
        assert!(matches!(result, Err(Error::Domain { .. })));
    }
}
