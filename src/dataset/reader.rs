//! Value parsing helpers for multi-valued and numeric elements

/// Text before the first `\` value delimiter, or the whole string when no
/// delimiter is present. Multi-valued elements (e.g. per-frame window
/// settings) only contribute their first component.
#[inline]
#[must_use]
pub fn first_component(s: &str) -> &str {
    s.split_once('\\').map_or(s, |(first, _)| first)
}

/// Parse the leading numeric prefix of `s` as a float.
///
/// Succeeds only when at least one digit is consumed; trailing garbage after
/// a valid prefix is ignored ("12mm" parses as 12.0). Leading ASCII
/// whitespace and an optional sign are accepted. A string with no parseable
/// prefix yields `None` rather than a partial value.
#[must_use]
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_start_matches([' ', '\t', '\r', '\n']);
    let bytes = s.as_bytes();

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(bytes, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes, pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent counts only when complete; "1e" parses as 1.0
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    s[..pos].parse::<f64>().ok()
}

#[inline]
fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
