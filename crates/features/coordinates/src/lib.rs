//! # Coordinates
//!
//! Turns a human-typed `"<latitude>, <longitude>"` string into a validated
//! [`Coordinate`], or explains precisely why it cannot.
//!
//! ## Accepted input
//!
//! * `51.50851, -0.12572`, `51.50851,-0.12572`, `[51.50851, -0.12572]`, `[51.50851,-0.12572]`
//! * the minus sign may also be typed as U+2212, U+2014, U+2013 or U+2010
//! * surrounding and inner whitespace is tolerated
//!
//! ## Pipeline
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. absent input ([`ParseError::NotAString`])
//! 2. blank input ([`ParseError::EmptyAfterTrim`])
//! 3. one-sided brackets ([`ParseError::UnbalancedBrackets`])
//! 4. empty brackets ([`ParseError::EmptyAfterBracketStrip`])
//! 5. [`normalize`], then split on `,` ([`ParseError::WrongFieldCount`])
//! 6. decimal numbers only ([`ParseError::InvalidNumber`])
//! 7. ranges, latitude first ([`ParseError::LatitudeOutOfRange`], [`ParseError::LongitudeOutOfRange`])
//!
//! ## Example
//!
//! ```rust
//! use geofeed_coordinates::{ParseError, is_valid, parse};
//!
//! let c = parse("[51.50851, \u{2212}0.12572]").unwrap();
//! assert_eq!(c.latitude(), 51.50851);
//! assert_eq!(c.longitude(), -0.12572);
//!
//! assert_eq!(parse("[51.50851]"), Err(ParseError::WrongFieldCount { count: 1 }));
//! assert!(!is_valid(None));
//! ```

mod diagnostics;
mod error;
mod feedback;
mod normalize;
mod parser;

pub use crate::diagnostics::{DiagnosticSink, TracingSink};
pub use crate::error::{ParseError, ParseErrorKind};
pub use crate::feedback::{FieldFeedback, MISSING_INPUT_MESSAGE, validate_field};
pub use crate::normalize::{MINUS_SIGNS, normalize};
pub use crate::parser::{CoordinateParser, is_valid, parse};
pub use geofeed_domain::Coordinate;
