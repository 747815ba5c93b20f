// ================================
// Krüger series in the third flattening n
// ================================

/// Number of harmonics kept in the forward and inverse sums.
pub(crate) const ORDER: usize = 5;

/// Coefficients of the Krüger series, truncated at order 5 in `n`
/// (the latitude series `delta` carries the order-6 term as well).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesCoefficients {
    /// Meridian arc coefficients `A0..A5`
    pub a: [f64; ORDER + 1],
    /// Forward coefficients `alpha1..alpha5`
    pub alpha: [f64; ORDER],
    /// Inverse coefficients `beta1..beta5`
    pub beta: [f64; ORDER],
    /// Conformal to geodetic latitude coefficients `delta1..delta6`
    pub delta: [f64; ORDER + 1],
}

impl SeriesCoefficients {
    #[allow(clippy::unreadable_literal)]
    pub fn new(n: f64) -> SeriesCoefficients {
        let n2 = n.powi(2);
        let n3 = n.powi(3);
        let n4 = n.powi(4);
        let n5 = n.powi(5);
        let n6 = n.powi(6);

        let a = [
            1. + n2 / 4. + n4 / 64.,
            -(3. / 2.) * (n - n3 / 8. - n5 / 64.),
            (15. / 16.) * (n2 - n4 / 4.),
            -(35. / 48.) * (n3 - (5. / 16.) * n5),
            (315. / 512.) * n4,
            -(693. / 1280.) * n5,
        ];

        let alpha = [
            (1. / 2.) * n - (2. / 3.) * n2 + (5. / 16.) * n3 + (41. / 180.) * n4 - (127. / 288.) * n5,
            (13. / 48.) * n2 - (3. / 5.) * n3 + (557. / 1440.) * n4 + (281. / 630.) * n5,
            (61. / 240.) * n3 - (103. / 140.) * n4 + (15061. / 26880.) * n5,
            (49561. / 161280.) * n4 - (179. / 168.) * n5,
            (34729. / 80640.) * n5,
        ];

        let beta = [
            (1. / 2.) * n - (2. / 3.) * n2 + (37. / 96.) * n3 - (1. / 360.) * n4 - (81. / 512.) * n5,
            (1. / 48.) * n2 + (1. / 15.) * n3 - (437. / 1440.) * n4 + (46. / 105.) * n5,
            (17. / 480.) * n3 - (37. / 840.) * n4 - (209. / 4480.) * n5,
            (4397. / 161280.) * n4 - (11. / 504.) * n5,
            (4583. / 161280.) * n5,
        ];

        let delta = [
            2. * n - (2. / 3.) * n2 - 2. * n3 + (116. / 45.) * n4 + (26. / 45.) * n5 - (2854. / 675.) * n6,
            (7. / 3.) * n2 - (8. / 5.) * n3 - (227. / 45.) * n4 + (2704. / 315.) * n5 + (2323. / 945.) * n6,
            (56. / 15.) * n3 - (136. / 35.) * n4 - (1262. / 105.) * n5 + (73814. / 2835.) * n6,
            (4279. / 630.) * n4 - (332. / 35.) * n5 - (399572. / 14175.) * n6,
            (4174. / 315.) * n5 - (144838. / 6237.) * n6,
            (601676. / 22275.) * n6,
        ];

        Self {
            a,
            alpha,
            beta,
            delta,
        }
    }

    /// Meridian arc length from the equator to `phi0` (radians), scaled by the
    /// central scale factor `m0`:
    ///
    /// `S0 = m0 * a / (1 + n) * (A0 * phi0 + sum_k A_k * sin(2 k phi0))`
    pub fn meridian_arc(&self, phi0: f64, m0: f64, a: f64, n: f64) -> f64 {
        let sum = self.a[1..]
            .iter()
            .enumerate()
            .fold(0_f64, |acc, (i, ak)| acc + ak * (2. * phi0 * (i + 1) as f64).sin());

        ((m0 * a) / (1. + n)) * (self.a[0] * phi0 + sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const N: f64 = 0.001_679_220_394_628_744_5;

    #[test]
    fn zero_flattening_is_a_sphere() {
        let s = SeriesCoefficients::new(0.);
        assert_eq!(s.a, [1., 0., 0., 0., 0., 0.]);
        assert_eq!(s.alpha, [0.; ORDER]);
        assert_eq!(s.beta, [0.; ORDER]);
        assert_eq!(s.delta, [0.; ORDER + 1]);
    }

    #[test]
    fn leading_terms() {
        let s = SeriesCoefficients::new(N);
        assert_relative_eq!(s.alpha[0], N / 2., max_relative = 1e-2);
        assert_relative_eq!(s.beta[0], N / 2., max_relative = 1e-2);
        assert_relative_eq!(s.delta[0], 2. * N, max_relative = 1e-2);
        assert_relative_eq!(s.a[1], -1.5 * N, max_relative = 1e-5);
    }

    #[test]
    fn deterministic() {
        assert_eq!(SeriesCoefficients::new(N), SeriesCoefficients::new(N));
    }

    #[test]
    fn meridian_arc_to_pole() {
        // Quarter meridian of GRS80 is 10001965.7293 m
        let s = SeriesCoefficients::new(N);
        let quarter = s.meridian_arc(std::f64::consts::FRAC_PI_2, 1., 6_378_137., N);
        assert!((quarter - 10_001_965.729_3).abs() < 1e-3, "{quarter}");
    }

    #[test]
    fn meridian_arc_at_equator_is_zero() {
        let s = SeriesCoefficients::new(N);
        assert_eq!(s.meridian_arc(0., 0.9999, 6_378_137., N), 0.);
    }
}
