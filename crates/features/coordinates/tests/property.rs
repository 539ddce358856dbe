use geofeed_coordinates::{MINUS_SIGNS, ParseError, ParseErrorKind, normalize, parse};
use proptest::prelude::*;

fn renderings(lat: f64, lon: f64) -> Vec<String> {
    vec![
        format!("{lat}, {lon}"),
        format!("{lat},{lon}"),
        format!("[{lat}, {lon}]"),
        format!("[{lat},{lon}]"),
    ]
}

proptest! {
    #[test]
    fn every_rendering_and_minus_glyph_parses_identically(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let expected = parse(format!("{lat}, {lon}").as_str()).unwrap();
        prop_assert_eq!(expected.latitude(), lat);
        prop_assert_eq!(expected.longitude(), lon);

        for text in renderings(lat, lon) {
            prop_assert_eq!(parse(text.as_str()), Ok(expected));

            for glyph in MINUS_SIGNS {
                let swapped = text.replace('-', &glyph.to_string());
                prop_assert_eq!(parse(swapped.as_str()), Ok(expected));
            }
        }
    }

    #[test]
    fn normalize_is_idempotent(raw in "[ \t\n0-9a-z.,\\-\u{2212}\u{2014}\u{2013}\u{2010}\\[\\]]{0,48}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn out_of_range_latitude_is_reported(
        magnitude in 90.000_001f64..1.0e6,
        negative in any::<bool>(),
        lon in -180.0f64..=180.0,
    ) {
        let lat = if negative { -magnitude } else { magnitude };
        let err = parse(format!("{lat}, {lon}").as_str()).unwrap_err();
        prop_assert_eq!(err, ParseError::LatitudeOutOfRange { value: lat });
    }

    #[test]
    fn out_of_range_longitude_is_reported(
        lat in -90.0f64..=90.0,
        magnitude in 180.000_001f64..1.0e6,
        negative in any::<bool>(),
    ) {
        let lon = if negative { -magnitude } else { magnitude };
        let err = parse(format!("{lat}, {lon}").as_str()).unwrap_err();
        prop_assert_eq!(err, ParseError::LongitudeOutOfRange { value: lon });
    }

    #[test]
    fn arbitrary_text_never_panics(raw in any::<String>()) {
        if let Err(err) = parse(raw.as_str()) {
            prop_assert_ne!(err.kind(), ParseErrorKind::NotAString);
        }
    }
}
