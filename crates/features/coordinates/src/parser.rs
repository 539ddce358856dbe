use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ParseError;
use crate::normalize::{is_blank, normalize};
use geofeed_domain::Coordinate;

/// Parses `"<lat>, <lon>"` (optionally wrapped in `[` `]`) into a [`Coordinate`].
///
/// `None` stands for absent input and is reported as [`ParseError::NotAString`];
/// plain `&str` arguments are accepted directly.
///
/// Each field must be a plain decimal, `-?[0-9]+(\.[0-9]+)?` after minus-glyph
/// normalization. `.5`, `5.`, `+5`, exponents, `inf` and `NaN` are rejected with
/// [`ParseError::InvalidNumber`].
///
/// Whitespace includes U+FEFF, so a pasted leading byte order mark is ignored.
///
/// # Errors
/// Returns the first failed check, in the order documented at the crate root.
pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> Result<Coordinate, ParseError> {
    let input = input.into().ok_or(ParseError::NotAString)?;

    let trimmed = input.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Err(ParseError::EmptyAfterTrim);
    }

    let body = unwrap_brackets(trimmed)?;
    let normalized = normalize(body);

    let fields: Vec<&str> = normalized.split(',').map(|field| field.trim_matches(is_blank)).collect();
    let &[latitude, longitude] = fields.as_slice() else {
        return Err(ParseError::WrongFieldCount { count: fields.len() });
    };

    let (Some(lat), Some(lon)) = (parse_number(latitude), parse_number(longitude)) else {
        return Err(ParseError::InvalidNumber {
            latitude: latitude.to_owned(),
            longitude: longitude.to_owned(),
        });
    };

    Ok(Coordinate::try_new(lat, lon)?)
}

/// Boolean view over [`parse`]; failures are reported to [`TracingSink`].
#[must_use]
pub fn is_valid<'a>(input: impl Into<Option<&'a str>>) -> bool {
    CoordinateParser::new().is_valid(input)
}

/// Strips one pair of enclosing brackets. A lone `[` or `]` at either end is an error.
fn unwrap_brackets(trimmed: &str) -> Result<&str, ParseError> {
    match (trimmed.starts_with('['), trimmed.ends_with(']')) {
        (false, false) => Ok(trimmed),
        (true, true) => {
            // both ends are one-byte ASCII and distinct, so len >= 2
            let interior = trimmed[1..trimmed.len() - 1].trim_matches(is_blank);
            if interior.is_empty() { Err(ParseError::EmptyAfterBracketStrip) } else { Ok(interior) }
        },
        _ => Err(ParseError::UnbalancedBrackets),
    }
}

/// Accepts `-?[0-9]+(\.[0-9]+)?` only; exponents, `inf`, `NaN` and a leading `+` are rejected.
fn parse_number(field: &str) -> Option<f64> {
    let unsigned = field.strip_prefix('-').unwrap_or(field);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !fraction.is_none_or(is_digits) {
        return None;
    }

    field.parse().ok()
}

/// Coordinate parser with an injectable [`DiagnosticSink`] for [`CoordinateParser::is_valid`].
///
/// ```rust
/// use geofeed_coordinates::{CoordinateParser, DiagnosticSink, ParseError};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl DiagnosticSink for Collect {
///     fn rejected(&self, _input: Option<&str>, error: &ParseError) {
///         self.0.lock().unwrap().push(error.to_string());
///     }
/// }
///
/// let parser = CoordinateParser::with_sink(Collect::default());
/// assert!(!parser.is_valid("51.50851"));
/// assert_eq!(parser.sink().0.lock().unwrap().len(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateParser<S = TracingSink> {
    sink: S,
}

impl CoordinateParser {
    /// A parser that reports rejections through `tracing`.
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: DiagnosticSink> CoordinateParser<S> {
    #[must_use]
    pub const fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Same as the free [`parse`] function.
    ///
    /// # Errors
    /// See [`parse`].
    #[allow(clippy::unused_self)]
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Coordinate, ParseError> {
        parse(input)
    }

    /// Returns whether `input` parses. On failure the reason goes to the sink
    /// and nothing is propagated to the caller.
    pub fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        let input = input.into();
        match parse(input) {
            Ok(_) => true,
            Err(err) => {
                self.sink.rejected(input, &err);
                false
            },
        }
    }
}
