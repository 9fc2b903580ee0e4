//! `#RRGGBB` color strings.
//!
//! Colors are kept as strings in the document so they round-trip exactly as
//! the viewer wrote them; this module only checks and decodes them.

use crate::shared::error::SharedError;

/// Red, green and blue channels, 0..=255
pub type Rgb = [u8; 3];

/// Parse a `#RRGGBB` color.
///
/// The string must be exactly 7 bytes: a leading `#` followed by six
/// hexadecimal digits (either case).
///
/// ```rust
/// use ennoea::shared::architecture::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#0287fc").unwrap(), [0x02, 0x87, 0xfc]);
/// assert!(parse_hex_color("0287fc").is_err());
/// ```
pub fn parse_hex_color(color: &str) -> Result<Rgb, SharedError> {
    if color.len() != 7 {
        return Err(SharedError::validation(
            "color",
            format!("invalid len: {}", color),
        ));
    }

    let digits = match color.strip_prefix('#') {
        Some(digits) => digits,
        None => {
            return Err(SharedError::validation(
                "color",
                format!("missing '#': {}", color),
            ))
        }
    };

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SharedError::validation(
            "color",
            format!("invalid hex digits: {}", color),
        ));
    }

    let mut rgb = [0u8; 3];
    for (channel, pair) in rgb.iter_mut().zip(digits.as_bytes().chunks(2)) {
        *channel = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
    }
    Ok(rgb)
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_colors() {
        assert_eq!(parse_hex_color("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex_color("#FFFFFF").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex_color("#06f7Fc").unwrap(), [0x06, 0xf7, 0xfc]);
    }

    #[test]
    fn test_rejects_wrong_length() {
        for color in ["", "#fff", "#0287fc0", "#0287f"] {
            let err = parse_hex_color(color).unwrap_err();
            assert!(err.to_string().contains("invalid len"), "{}", err);
        }
    }

    #[test]
    fn test_rejects_missing_hash() {
        let err = parse_hex_color("00287fc").unwrap_err();
        assert_eq!(err.to_string(), "invalid color: missing '#': 00287fc");
    }

    #[test]
    fn test_rejects_non_hex_digits() {
        for color in ["#0287fg", "#-12345", "# 12345", "#+fffff"] {
            assert!(parse_hex_color(color).is_err(), "{} should be rejected", color);
        }
    }

    #[test]
    fn test_rejects_multibyte_with_seven_bytes() {
        // "é" is two bytes, so this string is 7 bytes long but not seven hex chars
        assert!(parse_hex_color("#é1234").is_err());
    }
}
