use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Valid latitudes in degrees, bounds included.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitudes in degrees, bounds included.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Fractional digits used when a coordinate is rendered without an explicit precision.
pub const DEFAULT_PRECISION: usize = 6;

/// A validated WGS84-style `(latitude, longitude)` pair in degrees.
///
/// The fields are private so that every value in circulation satisfies
/// [`LATITUDE_RANGE`] and [`LONGITUDE_RANGE`]. Deserialization goes through
/// [`Coordinate::try_new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// The component that failed the range check, with the offending value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutOfRange {
    Latitude(f64),
    Longitude(f64),
}

impl Coordinate {
    /// Builds a coordinate, checking latitude before longitude.
    ///
    /// # Errors
    /// Returns the first component that falls outside its range. `NaN` is never in range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, OutOfRange> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(OutOfRange::Latitude(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(OutOfRange::Longitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Renders `"<lat>, <lon>"`, six fractional digits unless a precision is given (`{:.2}`).
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.precision$}, {:.precision$}", self.latitude, self.longitude)
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude(value) => write!(f, "latitude {value} is out of range -90..90"),
            Self::Longitude(value) => write!(f, "longitude {value} is out of range -180..180"),
        }
    }
}

impl std::error::Error for OutOfRange {}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = OutOfRange;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::try_new(raw.latitude, raw.longitude)
    }
}

/// Where a coordinate came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSource {
    /// Reported by the platform location service.
    Geolocation,
    /// Typed in by the user.
    Manual,
    #[default]
    Unknown,
}

/// A coordinate tagged with its origin, serialized flat:
/// `{"latitude": .., "longitude": .., "source": "manual"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub source: CoordinateSource,
}

impl Location {
    #[must_use]
    pub const fn manual(coordinate: Coordinate) -> Self {
        Self { coordinate, source: CoordinateSource::Manual }
    }

    #[must_use]
    pub const fn geolocation(coordinate: Coordinate) -> Self {
        Self { coordinate, source: CoordinateSource::Geolocation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
    }

    #[test]
    fn latitude_is_checked_first() {
        assert_eq!(Coordinate::try_new(91.0, 181.0), Err(OutOfRange::Latitude(91.0)));
        assert_eq!(Coordinate::try_new(0.0, -180.5), Err(OutOfRange::Longitude(-180.5)));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(Coordinate::try_new(f64::NAN, 0.0), Err(OutOfRange::Latitude(_))));
        assert!(matches!(Coordinate::try_new(0.0, f64::NAN), Err(OutOfRange::Longitude(_))));
    }

    #[test]
    fn display_uses_six_digits_by_default() -> Result<(), OutOfRange> {
        let c = Coordinate::try_new(51.50851, -0.12572)?;
        assert_eq!(c.to_string(), "51.508510, -0.125720");
        assert_eq!(format!("{c:.2}"), "51.51, -0.13");
        Ok(())
    }
}
