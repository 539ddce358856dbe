/// Glyphs accepted as a minus sign besides ASCII `-`:
/// minus sign, em dash, en dash, hyphen.
pub const MINUS_SIGNS: [char; 4] = ['\u{2212}', '\u{2014}', '\u{2013}', '\u{2010}'];

/// Whitespace as far as coordinate input is concerned: Unicode whitespace plus
/// U+FEFF, which pasted text often carries as a leading byte order mark.
pub(crate) fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Canonicalizes glyphs and whitespace before the text is split and parsed.
///
/// * every character of [`MINUS_SIGNS`] becomes `-`
/// * whitespace touching a comma is dropped
/// * any other whitespace run becomes one space
/// * leading and trailing whitespace is dropped
///
/// Whitespace includes U+FEFF (zero width no-break space / BOM).
///
/// Applying it twice gives the same result as applying it once.
///
/// ```rust
/// use geofeed_coordinates::normalize;
///
/// assert_eq!(normalize("  51.5 ,\t\u{2013}0.1  "), "51.5,-0.1");
/// assert_eq!(normalize("a   b"), "a b");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for ch in input.chars() {
        if is_blank(ch) {
            pending_space = true;
            continue;
        }

        if pending_space && ch != ',' && !out.is_empty() && !out.ends_with(',') {
            out.push(' ');
        }
        pending_space = false;
        out.push(canonical_minus(ch));
    }

    out
}

fn canonical_minus(ch: char) -> char {
    if MINUS_SIGNS.contains(&ch) { '-' } else { ch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_minus_glyph_is_canonicalized() {
        for glyph in MINUS_SIGNS {
            assert_eq!(normalize(&format!("{glyph}12.5")), "-12.5", "glyph U+{:04X}", glyph as u32);
        }
    }

    #[test]
    fn whitespace_around_commas_is_removed() {
        assert_eq!(normalize("1 , 2"), "1,2");
        assert_eq!(normalize("1\t,\n2"), "1,2");
        assert_eq!(normalize("1 ,, 2"), "1,,2");
        assert_eq!(normalize(" , "), ",");
    }

    #[test]
    fn inner_runs_collapse_to_one_space() {
        assert_eq!(normalize("12   34"), "12 34");
        assert_eq!(normalize("12\u{a0}\u{2003}34"), "12 34");
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t1,2\n"), "1,2");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(normalize("\u{feff}51.5, 0"), "51.5,0");
        assert_eq!(normalize("1\u{feff}\u{feff}2"), "1 2");
        assert!(is_blank('\u{feff}'));
        assert!(!is_blank('\u{200b}'));
    }

    #[test]
    fn normalized_text_is_a_fixed_point() {
        for raw in ["  51.5 ,  \u{2212}0.1 ", "a  b , c", "", " , , ", "1\u{2014}2"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
