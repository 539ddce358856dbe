use crate::error::ParseError;
use crate::normalize::is_blank;
use crate::parser::parse;
use geofeed_domain::Coordinate;
use std::borrow::Cow;

/// Prompt shown while the coordinate field is still blank.
pub const MISSING_INPUT_MESSAGE: &str = "Enter coordinates";

/// Inline validation state of a coordinate entry field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFeedback {
    /// Nothing typed yet (or only whitespace).
    Missing,
    Accepted(Coordinate),
    Rejected(ParseError),
}

impl FieldFeedback {
    /// Text to display under the field, `None` once the value is accepted.
    #[must_use]
    pub fn message(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::Missing => Some(Cow::Borrowed(MISSING_INPUT_MESSAGE)),
            Self::Accepted(_) => None,
            Self::Rejected(err) => Some(Cow::Owned(err.to_string())),
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Accepted(c) => Some(*c),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Validates the current content of a manual-entry field.
///
/// Blank input yields a prompt instead of a parser error.
#[must_use]
pub fn validate_field(input: &str) -> FieldFeedback {
    if input.chars().all(is_blank) {
        return FieldFeedback::Missing;
    }

    match parse(input) {
        Ok(coordinate) => FieldFeedback::Accepted(coordinate),
        Err(err) => FieldFeedback::Rejected(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_prompts_for_input() {
        for raw in ["", "   ", "\t\n", "\u{feff} "] {
            let feedback = validate_field(raw);
            assert_eq!(feedback, FieldFeedback::Missing);
            assert_eq!(feedback.message().as_deref(), Some("Enter coordinates"));
        }
    }

    #[test]
    fn accepted_field_has_no_message() {
        let feedback = validate_field("[51.50851, \u{2212}0.12572]");
        assert!(feedback.is_accepted());
        assert_eq!(feedback.message(), None);
        assert_eq!(feedback.coordinate().map(|c| c.longitude()), Some(-0.12572));
    }

    #[test]
    fn rejected_field_shows_parser_message() {
        let feedback = validate_field("51.50851, -0.12572]");
        assert_eq!(feedback, FieldFeedback::Rejected(ParseError::UnbalancedBrackets));
        assert_eq!(feedback.message().as_deref(), Some("Unbalanced square brackets"));
        assert_eq!(feedback.coordinate(), None);
    }
}
