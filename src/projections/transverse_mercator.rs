use lazy_static::lazy_static;
use num::Complex;

use crate::{
    Error,
    constants::{GRS80_INV_F, PLANE_M0},
    ellipsoid::Ellipsoid,
    geodetic::GeodeticPoint,
    plane::{PlaneCoordinate, PlanePoint},
    projections::{conformal::{conformal_coordinate, ConformalCoordinate}, series::SeriesCoefficients},
    utility::{GeoMath, dms},
    zones::JapanZone,
};

lazy_static! {
    static ref JAPAN_ZONES: Vec<TransverseMercator> = JapanZone::all()
        .map(|zone| TransverseMercator::with_n(
            Ellipsoid::GRS80,
            1. / (2. * GRS80_INV_F - 1.),
            zone.origin(),
            PLANE_M0,
        ))
        .collect();
}

/// Intermediate values of a single forward projection, filled in when passed
/// to [`TransverseMercator::project_traced`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trace {
    /// Third flattening
    pub n: f64,
    /// Scaled rectifying radius `m0 * a / (1 + n) * A0`
    pub a_bar: f64,
    /// Scaled meridian arc length at the origin latitude
    pub s0: f64,
    /// Conformal northing on the transverse sphere
    pub xi: f64,
    /// Conformal easting on the transverse sphere
    pub eta: f64,
    /// `sum_k alpha_k sin(2k xi) cosh(2k eta)`
    pub sum_x: f64,
    /// `sum_k alpha_k cos(2k xi) sinh(2k eta)`
    pub sum_y: f64,
}

/// Gauss-Krüger projection about a fixed origin. All per-ellipsoid constants
/// are derived once at construction, so a single instance can project any
/// number of points, from any number of threads.
#[derive(Clone, Debug)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    origin: GeodeticPoint,
    m0: f64,
    n: f64,
    series: SeriesCoefficients,
    a_bar: f64,
    s0: f64,
}

impl TransverseMercator {
    /// Builds a projection about `origin` with central scale factor `central_scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if the ellipsoid is degenerate and
    /// [`Error::InvalidScale`] if `central_scale` is not a positive finite number.
    ///
    /// # Usage
    ///
    /// ```
    /// use heimen::{Ellipsoid, GeodeticPoint, TransverseMercator};
    ///
    /// let origin = GeodeticPoint::create(135.0, 36.0).unwrap();
    /// let tm = TransverseMercator::new(Ellipsoid::GRS80, origin, 0.9999).unwrap();
    ///
    /// let p = tm.project(&GeodeticPoint::create(136.0, 37.0).unwrap()).unwrap();
    /// assert!((p.x - 111_424.668_583).abs() < 1e-3);
    /// assert!((p.y - 89_004.028_314).abs() < 1e-3);
    ///
    /// assert!(TransverseMercator::new(Ellipsoid::GRS80, origin, 0.0).is_err());
    /// ```
    pub fn new(ellipsoid: Ellipsoid, origin: GeodeticPoint, central_scale: f64) -> Result<TransverseMercator, Error> {
        let n = ellipsoid.third_flattening()?;

        if !central_scale.is_finite() || central_scale <= 0. {
            return Err(Error::InvalidScale(central_scale));
        }

        Ok(TransverseMercator::with_n(ellipsoid, n, origin, central_scale))
    }

    /// GRS80 projection with the plane rectangular scale factor `0.9999`.
    ///
    /// # Errors
    ///
    /// Never fails for a validated origin; the `Result` mirrors [`TransverseMercator::new`].
    pub fn grs80(origin: GeodeticPoint) -> Result<TransverseMercator, Error> {
        TransverseMercator::new(Ellipsoid::GRS80, origin, PLANE_M0)
    }

    /// Returns the shared GRS80 projection for a zone of the Japanese plane
    /// rectangular coordinate system.
    ///
    /// ```
    /// use heimen::{GeodeticPoint, JapanZone, TransverseMercator};
    ///
    /// let tm = TransverseMercator::japan_zone(JapanZone::from_number(9).unwrap());
    /// let p = tm.project(&GeodeticPoint::create(140.08785504166664, 36.103774791666666).unwrap()).unwrap();
    ///
    /// assert!((p.x - 11_543.6883).abs() < 1e-4);
    /// assert!((p.y - 22_916.2436).abs() < 1e-4);
    /// ```
    pub fn japan_zone(zone: JapanZone) -> &'static TransverseMercator {
        &JAPAN_ZONES[zone.index()]
    }

    /// Infallible constructor for parameters that are already known to be valid.
    pub(crate) fn with_n(ellipsoid: Ellipsoid, n: f64, origin: GeodeticPoint, m0: f64) -> TransverseMercator {
        let a = ellipsoid.semi_major_axis;
        let series = SeriesCoefficients::new(n);

        let a_bar = ((m0 * a) / (1. + n)) * series.a[0];
        let s0 = series.meridian_arc(origin.latitude.to_radians(), m0, a, n);

        Self {
            ellipsoid,
            origin,
            m0,
            n,
            series,
            a_bar,
            s0,
        }
    }

    #[inline]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    #[inline]
    pub fn origin(&self) -> GeodeticPoint {
        self.origin
    }

    #[inline]
    pub fn central_scale(&self) -> f64 {
        self.m0
    }

    #[inline]
    pub fn series(&self) -> &SeriesCoefficients {
        &self.series
    }

    /// Projects a geodetic point to origin-relative plane coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] at the poles and wherever the conformal
    /// transform leaves its domain.
    pub fn project(&self, point: &GeodeticPoint) -> Result<PlaneCoordinate, Error> {
        self.project_traced(point, None)
    }

    /// Same as [`TransverseMercator::project`], also recording the intermediate
    /// values of the computation into `trace` when one is given.
    ///
    /// # Errors
    ///
    /// See [`TransverseMercator::project`].
    pub fn project_traced(&self, point: &GeodeticPoint, trace: Option<&mut Trace>) -> Result<PlaneCoordinate, Error> {
        let phi = point.latitude.to_radians();
        let dlambda = point.longitude.to_radians() - self.origin.longitude.to_radians();

        let ConformalCoordinate { xi, eta } = conformal_coordinate(phi, dlambda, self.n)?;

        // Ascending harmonic order, accumulated apart from xi/eta
        let (sum_x, sum_y) = self.series.alpha
            .iter()
            .enumerate()
            .fold((0_f64, 0_f64), |(sx, sy), (i, ak)| {
                let k = (i + 1) as f64;
                (
                    sx + ak * ((2. * xi * k).sin() * (2. * eta * k).cosh()),
                    sy + ak * ((2. * xi * k).cos() * (2. * eta * k).sinh()),
                )
            });

        let x = self.a_bar * (xi + sum_x) - self.s0;
        let y = self.a_bar * (eta + sum_y);

        if let Some(trace) = trace {
            *trace = Trace {
                n: self.n,
                a_bar: self.a_bar,
                s0: self.s0,
                xi,
                eta,
                sum_x,
                sum_y,
            };
        }

        if !x.is_finite() {
            return Err(Error::Domain { what: "projected x", value: x });
        }
        if !y.is_finite() {
            return Err(Error::Domain { what: "projected y", value: y });
        }

        Ok(PlaneCoordinate { x, y })
    }

    /// Projects a point and carries its altitude through unchanged.
    ///
    /// # Errors
    ///
    /// See [`TransverseMercator::project`].
    pub fn project_with_altitude(&self, point: &GeodeticPoint, altitude: f64) -> Result<PlanePoint, Error> {
        Ok(self.project(point)?.with_altitude(altitude))
    }

    /// Maps plane coordinates back to a geodetic point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] for non-finite input and
    /// [`Error::Domain`] when the input lies so far from the origin that the
    /// series no longer yields a finite latitude or longitude.
    ///
    /// # Usage
    ///
    /// ```
    /// use heimen::{GeodeticPoint, TransverseMercator};
    ///
    /// let tm = TransverseMercator::grs80(GeodeticPoint::create(135.0, 36.0).unwrap()).unwrap();
    /// let point = GeodeticPoint::create(136.0, 37.0).unwrap();
    ///
    /// let back = tm.unproject(&tm.project(&point).unwrap()).unwrap();
    ///
    /// assert!((back.longitude() - 136.0).abs() < 1e-9);
    /// assert!((back.latitude() - 37.0).abs() < 1e-9);
    /// ```
    pub fn unproject(&self, coord: &PlaneCoordinate) -> Result<GeodeticPoint, Error> {
        if !coord.x.is_finite() || !coord.y.is_finite() {
            return Err(Error::InvalidCoord(format!("Plane coordinate {coord} is not finite.")));
        }

        let zeta = Complex::new((coord.x + self.s0) / self.a_bar, coord.y / self.a_bar);

        let sum = self.series.beta
            .iter()
            .enumerate()
            .fold(Complex::new(0_f64, 0_f64), |acc, (i, bk)| {
                acc + (zeta * (2. * (i + 1) as f64)).sin() * *bk
            });
        let zeta_ = zeta - sum;

        let chi = (zeta_.re.sin() / zeta_.im.cosh()).asin();

        let lat = self.series.delta
            .iter()
            .enumerate()
            .fold(chi, |acc, (i, dk)| acc + dk * (2. * chi * (i + 1) as f64).sin());

        let cos_xi = zeta_.re.cos();
        let dlon = if cos_xi.is_zero() {
            f64::from(dms::QD).copysign(zeta_.im)
        } else {
            (zeta_.im.sinh() / cos_xi).atan().to_degrees()
        };

        let lon = (self.origin.longitude + dlon).ang_normalize();
        let lat = lat.to_degrees();

        if !lat.is_finite() {
            return Err(Error::Domain { what: "unprojected latitude", value: lat });
        }
        if !lon.is_finite() {
            return Err(Error::Domain { what: "unprojected longitude", value: lon });
        }

        Ok(GeodeticPoint::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn origin() -> GeodeticPoint {
        GeodeticPoint::create(135., 36.).unwrap()
    }

    #[test]
    fn trace_records_intermediates() {
        let tm = TransverseMercator::grs80(origin()).unwrap();
        let mut trace = Trace::default();
        let p = tm
            .project_traced(&GeodeticPoint::create(136., 37.).unwrap(), Some(&mut trace))
            .unwrap();

        assert_eq!(trace.n, Ellipsoid::GRS80.third_flattening().unwrap());
        assert_relative_eq!(p.x, trace.a_bar * (trace.xi + trace.sum_x) - trace.s0);
        assert_relative_eq!(p.y, trace.a_bar * (trace.eta + trace.sum_y));
        assert!(trace.eta > 0.);
    }

    #[test]
    fn traced_and_untraced_agree() {
        let tm = TransverseMercator::grs80(origin()).unwrap();
        let point = GeodeticPoint::create(134.2, 35.1).unwrap();
        let mut trace = Trace::default();

        assert_eq!(
            tm.project(&point).unwrap(),
            tm.project_traced(&point, Some(&mut trace)).unwrap()
        );
    }

    #[test]
    fn zone_table_matches_fresh_projection() {
        let zone = JapanZone::from_number(6).unwrap();
        let cached = TransverseMercator::japan_zone(zone);
        let fresh = TransverseMercator::grs80(zone.origin()).unwrap();
        let point = GeodeticPoint::create(135.5, 34.7).unwrap();

        assert_eq!(cached.project(&point).unwrap(), fresh.project(&point).unwrap());
    }

    #[test]
    fn rejects_invalid_scale() {
        for m0 in [0., -0.9999, f64::NAN, f64::INFINITY] {
            let result = TransverseMercator::new(Ellipsoid::GRS80, origin(), m0);
            assert!(matches!(result, Err(Error::InvalidScale(_))));
        }
    }

    #[test]
    fn altitude_passes_through() {
        let tm = TransverseMercator::grs80(origin()).unwrap();
        let point = GeodeticPoint::create(135.01, 36.01).unwrap();
        let p = tm.project_with_altitude(&point, 42.5).unwrap();
        let q = tm.project(&point).unwrap();

        assert_eq!((p.x, p.y, p.z), (q.x, q.y, 42.5));
    }

    #[test]
    fn unproject_origin() {
        let tm = TransverseMercator::grs80(origin()).unwrap();
        let back = tm.unproject(&PlaneCoordinate::new(0., 0.)).unwrap();

        assert_relative_eq!(back.longitude(), 135., epsilon = 1e-10);
        assert_relative_eq!(back.latitude(), 36., epsilon = 1e-10);
    }

    #[test]
    fn unproject_rejects_nan() {
        let tm = TransverseMercator::grs80(origin()).unwrap();
        assert!(tm.unproject(&PlaneCoordinate::new(f64::NAN, 0.)).is_err());
    }

    #[test]
    fn unproject_far_easting_is_a_domain_error() {
        let tm = TransverseMercator::grs80(origin()).unwrap();

        assert!(matches!(
            tm.unproject(&PlaneCoordinate::new(0., 1e10)),
            Err(Error::Domain { .. })
        ));
        assert!(matches!(
            tm.unproject(&PlaneCoordinate::new(0., -1e10)),
            Err(Error::Domain { .. })
        ));
    }

    #[test]
    fn unproject_never_returns_non_finite() {
        let tm = TransverseMercator::grs80(origin()).unwrap();

        for x in [-1e12, -1e7, 0., 1e5, 1e12] {
            for y in [-1e10, -1e7, -1e5, 0., 1e5, 1e7, 1e10] {
                if let Ok(p) = tm.unproject(&PlaneCoordinate::new(x, y)) {
                    assert!(p.longitude().is_finite(), "{x} {y} -> {p}");
                    assert!(p.latitude().is_finite(), "{x} {y} -> {p}");
                }
            }
        }
    }

    #[test]
    fn bessel_differs_from_grs80() {
        let point = GeodeticPoint::create(136., 37.).unwrap();
        let grs80 = TransverseMercator::grs80(origin()).unwrap().project(&point).unwrap();
        let bessel = TransverseMercator::new(Ellipsoid::BESSEL, origin(), 0.9999)
            .unwrap()
            .project(&point)
            .unwrap();

        assert!((grs80.x - bessel.x).abs() > 1e-3);
        assert!((grs80.x - bessel.x).abs() < 100.);
    }
}
