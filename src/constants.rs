// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_INV_F: f64 = 298.257222101;

// Bessel 1841 semi-major axis a
#[allow(clippy::unreadable_literal)]
pub(crate) const BESSEL_A: f64 = 6_377_397.155;
// Bessel 1841 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const BESSEL_INV_F: f64 = 299.152813;

// Plane rectangular central scale factor
pub(crate) const PLANE_M0: f64 = 9999.0 / 10_000.;
