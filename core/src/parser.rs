//! Line splitting and tolerant numeric conversion.

use std::io::{self, BufRead};

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:(?i:infinity|inf|nan)|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern")
});

static INT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+").expect("integer prefix pattern")
});

/// Split one raw line into trimmed fields.
///
/// A field of at least two characters wrapped in double quotes loses that
/// one pair of quotes. Nothing else is unescaped, and a quoted delimiter
/// still splits.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split(delimiter)
        .map(|raw| unquote(raw.trim()).to_string())
        .collect()
}

fn unquote(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}

/// Parse the longest leading number of `text`: decimal, or `inf`,
/// `infinity`, `nan` in any case. `None` when the text is empty or starts
/// with no number at all.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let m = FLOAT_PREFIX.find(text.trim_start())?;
    m.as_str().parse().ok()
}

/// Parse the leading integer of `text`, which must fit in 32 bits.
pub fn parse_int_prefix(text: &str) -> Option<i32> {
    let m = INT_PREFIX.find(text.trim_start())?;
    let wide: i64 = m.as_str().parse().ok()?;
    i32::try_from(wide).ok()
}

/// Read one line without a length cap. Invalid UTF-8 is replaced, not fatal.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
