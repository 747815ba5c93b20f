//! Reader for whitespace-separated coordinate text, as found in GML
//! `posList` elements: one point per line, two or three numbers per point.

use std::str::FromStr;

use crate::{Error, GeodeticPoint, PlaneCoordinate, ThisOrThat};

/// Axis order of the first two numbers on each line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrder {
    /// `lat lon [alt]`, the order used by JGD-referenced GML
    #[default]
    LatLon,
    /// `lon lat [alt]`
    LonLat,
}

impl FromStr for AxisOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latlon" | "lat-lon" => Ok(AxisOrder::LatLon),
            "lonlat" | "lon-lat" => Ok(AxisOrder::LonLat),
            _ => Err(Error::MalformedInput { line: 0, msg: format!("Unknown axis order '{s}'") }),
        }
    }
}

/// A parsed point with its optional altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosEntry {
    pub point: GeodeticPoint,
    pub altitude: Option<f64>,
}

/// Parses coordinate text into points. Blank lines are skipped; line numbers
/// in errors are 1-based.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if a line does not hold two or three
/// numbers, or holds a coordinate outside the valid range.
///
/// # Usage
///
/// ```
/// use heimen::poslist::{parse, AxisOrder};
///
/// let text = "36.0 135.0 12.5\n\n36.5 135.25\n";
/// let entries = parse(text, AxisOrder::LatLon).unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].point.longitude(), 135.0);
/// assert_eq!(entries[0].altitude, Some(12.5));
/// assert_eq!(entries[1].altitude, None);
///
/// assert!(parse("36.0 abc", AxisOrder::LatLon).is_err());
/// ```
pub fn parse(text: &str, order: AxisOrder) -> Result<Vec<PosEntry>, Error> {
    rows(text)
        .map(|row| {
            let (line_no, values) = row?;

            let lat_first = order == AxisOrder::LatLon;
            let lat = lat_first.ternary(values[0], values[1]);
            let lon = lat_first.ternary(values[1], values[0]);

            let point = GeodeticPoint::create(lon, lat).map_err(|err| Error::MalformedInput {
                line: line_no,
                msg: err.to_string(),
            })?;

            Ok(PosEntry {
                point,
                altitude: values.get(2).copied(),
            })
        })
        .collect()
}

/// Parses `x y [alt]` plane coordinate text with the same line rules as [`parse`].
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if a line does not hold two or three numbers.
///
/// ```
/// use heimen::poslist::parse_plane;
///
/// let rows = parse_plane("11543.6883 22916.2436 4.0").unwrap();
/// assert_eq!(rows[0].0.x, 11543.6883);
/// assert_eq!(rows[0].1, Some(4.0));
/// ```
pub fn parse_plane(text: &str) -> Result<Vec<(PlaneCoordinate, Option<f64>)>, Error> {
    rows(text)
        .map(|row| {
            let (_, values) = row?;
            Ok((PlaneCoordinate::new(values[0], values[1]), values.get(2).copied()))
        })
        .collect()
}

// Non-blank lines as (1-based line number, 2 or 3 values)
fn rows(text: &str) -> impl Iterator<Item = Result<(usize, Vec<f64>), Error>> + '_ {
    text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1).map(|values| (i + 1, values)))
}

fn parse_line(line: &str, line_no: usize) -> Result<Vec<f64>, Error> {
    let values = line
        .split_whitespace()
        .map(|token| token.parse::<f64>().map_err(|err| Error::MalformedInput {
            line: line_no,
            msg: format!("'{token}' is not a number: {err}"),
        }))
        .collect::<Result<Vec<_>, _>>()?;

    if !(2..=3).contains(&values.len()) {
        return Err(Error::MalformedInput {
            line: line_no,
            msg: format!("Expected 2 or 3 values, found {}", values.len()),
        });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lon_lat_order() {
        let entries = parse("135.5 34.7 3", AxisOrder::LonLat).unwrap();
        assert_eq!(entries[0].point.longitude(), 135.5);
        assert_eq!(entries[0].point.latitude(), 34.7);
        assert_eq!(entries[0].altitude, Some(3.));
    }

    #[test]
    fn keeps_double_precision() {
        let entries = parse("35.658099123456789 139.741357123456789", AxisOrder::LatLon).unwrap();
        assert_eq!(entries[0].point.latitude(), 35.658_099_123_456_789);
        assert_eq!(entries[0].point.longitude(), 139.741_357_123_456_789);
    }

    #[test]
    fn reports_line_number() {
        let text = "36.0 135.0\n\n   \n36.0 135.0 1.0 2.0\n";
        match parse(text, AxisOrder::LatLon) {
            Err(Error::MalformedInput { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            parse("95.0 135.0", AxisOrder::LatLon),
            Err(Error::MalformedInput { line: 1, .. })
        ));
    }

    #[test]
    fn plane_rows() {
        let rows = parse_plane("1.5 -2.5\n\n3 4 5\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (PlaneCoordinate::new(1.5, -2.5), None));
        assert_eq!(rows[1], (PlaneCoordinate::new(3., 4.), Some(5.)));
        assert!(parse_plane("1.0").is_err());
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(parse("\n\n", AxisOrder::LatLon).unwrap().is_empty());
    }

    #[test]
    fn axis_order_from_str() {
        assert_eq!("LonLat".parse::<AxisOrder>().unwrap(), AxisOrder::LonLat);
        assert_eq!("lat-lon".parse::<AxisOrder>().unwrap(), AxisOrder::LatLon);
        assert!("xy".parse::<AxisOrder>().is_err());
    }
}
