use geofeed_domain::OutOfRange;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Why a string could not be turned into a coordinate.
///
/// The messages are meant to be shown to the person who typed the input.
#[geofeed_derive::geofeed_error]
#[derive(Clone, PartialEq)]
pub enum ParseError {
    #[error("Input must be a string")]
    NotAString,

    #[error("Input cannot be empty")]
    EmptyAfterTrim,

    #[error("Unbalanced square brackets")]
    UnbalancedBrackets,

    #[error("Input cannot be empty after removing brackets")]
    EmptyAfterBracketStrip,

    #[error("Expected 2 coordinates, got {count}. Format: \"latitude, longitude\"")]
    WrongFieldCount { count: usize },

    /// Both fields are kept as typed (trimmed), whichever one failed.
    #[error("Invalid numbers: \"{latitude}\", \"{longitude}\"")]
    InvalidNumber { latitude: String, longitude: String },

    #[error("Latitude {value} is out of range -90..90")]
    LatitudeOutOfRange { value: f64 },

    #[error("Longitude {value} is out of range -180..180")]
    LongitudeOutOfRange { value: f64 },
}

/// Payload-free discriminant of [`ParseError`], with stable snake_case names for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParseErrorKind {
    NotAString,
    EmptyAfterTrim,
    UnbalancedBrackets,
    EmptyAfterBracketStrip,
    WrongFieldCount,
    InvalidNumber,
    LatitudeOutOfRange,
    LongitudeOutOfRange,
}

impl ParseError {
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::NotAString => ParseErrorKind::NotAString,
            Self::EmptyAfterTrim => ParseErrorKind::EmptyAfterTrim,
            Self::UnbalancedBrackets => ParseErrorKind::UnbalancedBrackets,
            Self::EmptyAfterBracketStrip => ParseErrorKind::EmptyAfterBracketStrip,
            Self::WrongFieldCount { .. } => ParseErrorKind::WrongFieldCount,
            Self::InvalidNumber { .. } => ParseErrorKind::InvalidNumber,
            Self::LatitudeOutOfRange { .. } => ParseErrorKind::LatitudeOutOfRange,
            Self::LongitudeOutOfRange { .. } => ParseErrorKind::LongitudeOutOfRange,
        }
    }
}

impl From<OutOfRange> for ParseError {
    fn from(err: OutOfRange) -> Self {
        match err {
            OutOfRange::Latitude(value) => Self::LatitudeOutOfRange { value },
            OutOfRange::Longitude(value) => Self::LongitudeOutOfRange { value },
        }
    }
}

impl ParseErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn messages_carry_payloads() {
        assert_eq!(
            ParseError::WrongFieldCount { count: 3 }.to_string(),
            "Expected 2 coordinates, got 3. Format: \"latitude, longitude\""
        );
        assert_eq!(
            ParseError::InvalidNumber { latitude: "abc".into(), longitude: "def".into() }
                .to_string(),
            "Invalid numbers: \"abc\", \"def\""
        );
        assert_eq!(
            ParseError::LatitudeOutOfRange { value: -90.0001 }.to_string(),
            "Latitude -90.0001 is out of range -90..90"
        );
        assert_eq!(
            ParseError::LongitudeOutOfRange { value: 180.5 }.to_string(),
            "Longitude 180.5 is out of range -180..180"
        );
    }

    #[test]
    fn kind_names_are_snake_case_and_unique() {
        let names: Vec<&str> = ParseErrorKind::iter().map(ParseErrorKind::as_str).collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"not_a_string"));
        assert!(names.contains(&"empty_after_bracket_strip"));
        assert!(names.contains(&"longitude_out_of_range"));

        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn out_of_range_maps_to_matching_kind() {
        assert_eq!(
            ParseError::from(OutOfRange::Latitude(91.0)),
            ParseError::LatitudeOutOfRange { value: 91.0 }
        );
        assert_eq!(
            ParseError::from(OutOfRange::Longitude(-181.0)).kind(),
            ParseErrorKind::LongitudeOutOfRange
        );
    }
}
