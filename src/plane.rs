use std::fmt::Display;

/// Origin-relative plane rectangular coordinate in meters.
///
/// `x` grows northwards along the central meridian and `y` grows eastwards,
/// following the surveying convention.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneCoordinate {
    pub x: f64,
    pub y: f64,
}

impl PlaneCoordinate {
    pub fn new(x: f64, y: f64) -> PlaneCoordinate {
        Self { x, y }
    }

    /// Attaches an altitude to this coordinate.
    ///
    /// ```
    /// use heimen::PlaneCoordinate;
    ///
    /// let p = PlaneCoordinate::new(10.0, 20.0).with_altitude(35.5);
    /// assert_eq!((p.x, p.y, p.z), (10.0, 20.0, 35.5));
    /// ```
    pub fn with_altitude(self, z: f64) -> PlanePoint {
        PlanePoint {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

/// A projected point carrying the source altitude through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Display for PlaneCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        write!(f, "{x} {y}")
    }
}

impl Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        let mut buf = ryu::Buffer::new();
        let z = buf.format(self.z);
        write!(f, "{x} {y} {z}")
    }
}
