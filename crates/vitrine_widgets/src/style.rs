//! Computed-style value parsing
//!
//! Hosts hand over raw computed style strings (`"24px"`, `"normal"`, `""`).
//! Parsing follows `parseInt(value, 10)`: optional leading whitespace, an
//! optional sign, then as many decimal digits as are present. Anything after
//! the digits is ignored.

use thiserror::Error;

/// Why a style value had no usable integer prefix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("style value is empty")]
    Empty,

    #[error("style value {0:?} has no leading integer")]
    NotNumeric(String),

    #[error("style value {0:?} does not fit in an integer")]
    OutOfRange(String),
}

/// Parse the leading decimal integer of a style value
pub fn parse_leading_int(value: &str) -> Result<i64, StyleParseError> {
    let trimmed = value.trim_start();
    if trimmed.is_empty() {
        return Err(StyleParseError::Empty);
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(StyleParseError::NotNumeric(value.to_string()));
    }

    let magnitude: i64 = rest[..digits_len]
        .parse()
        .map_err(|_| StyleParseError::OutOfRange(value.to_string()))?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Resolve a computed gap style to logical pixels, falling back to `default`
pub fn resolve_gap(value: Option<&str>, default: f32) -> f32 {
    let Some(value) = value else {
        return default;
    };
    match parse_leading_int(value) {
        Ok(px) => px as f32,
        Err(err) => {
            tracing::trace!(%err, default, "gap style unusable, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_values() {
        assert_eq!(parse_leading_int("24px"), Ok(24));
        assert_eq!(parse_leading_int("  16px"), Ok(16));
        assert_eq!(parse_leading_int("24.5px"), Ok(24));
        assert_eq!(parse_leading_int("-8px"), Ok(-8));
        assert_eq!(parse_leading_int("+3"), Ok(3));
    }

    #[test]
    fn test_unparseable_values() {
        assert_eq!(parse_leading_int(""), Err(StyleParseError::Empty));
        assert_eq!(parse_leading_int("   "), Err(StyleParseError::Empty));
        assert!(matches!(
            parse_leading_int("normal"),
            Err(StyleParseError::NotNumeric(_))
        ));
        assert!(matches!(
            parse_leading_int("-px"),
            Err(StyleParseError::NotNumeric(_))
        ));
        assert!(matches!(
            parse_leading_int("99999999999999999999999px"),
            Err(StyleParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_gap_fallback() {
        assert_eq!(resolve_gap(Some("24px"), 32.0), 24.0);
        assert_eq!(resolve_gap(Some(""), 32.0), 32.0);
        assert_eq!(resolve_gap(Some("normal"), 32.0), 32.0);
        assert_eq!(resolve_gap(None, 32.0), 32.0);
    }
}
