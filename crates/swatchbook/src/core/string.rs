use crate::error::ColorFormatError;

/// Strip one leading `#` if present.
#[inline]
fn strip_hash(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

#[inline]
fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes.
///
/// The leading `#` is optional and letters may be in either case. With
/// `allow_short`, this function also accepts three-digit shorthand, which
/// expands each digit by duplication, i.e., `#ABC` is `#AABBCC`. Length is
/// checked before digits, so `#12345` fails with
/// [`ColorFormatError::UnexpectedLength`] even though all its characters are
/// valid.
pub(crate) fn parse_hashed(s: &str, allow_short: bool) -> Result<[u8; 3], ColorFormatError> {
    let digits = strip_hash(s).as_bytes();

    let factor = match digits.len() {
        6 => 2,
        3 if allow_short => 1,
        _ => return Err(ColorFormatError::UnexpectedLength),
    };

    let mut coordinates = [0_u8; 3];
    for (index, chunk) in digits.chunks_exact(factor).enumerate() {
        let mut value = 0_u8;
        for byte in chunk {
            let n = nibble(*byte).ok_or(ColorFormatError::MalformedHex)?;
            value = (value << 4) | n;
        }

        coordinates[index] = if factor == 1 { 16 * value + value } else { value };
    }

    Ok(coordinates)
}

/// Determine whether the string is a hashed hexadecimal color with three or
/// six digits.
pub(crate) fn is_hashed(s: &str) -> bool {
    parse_hashed(s, true).is_ok()
}

/// Normalize a hashed hexadecimal color.
///
/// This function strips the first `#`, converts ASCII letters to upper case,
/// expands three-digit shorthand, and prefixes the result with `#` again. It
/// does not validate its input. Strings that are neither three nor six
/// characters long after stripping pass through with only the case changed
/// and `#` prepended.
pub(crate) fn normalize(s: &str) -> String {
    let stripped = s.replacen('#', "", 1).to_ascii_uppercase();

    if stripped.chars().count() == 3 {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for c in stripped.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        expanded
    } else {
        let mut prefixed = String::with_capacity(stripped.len() + 1);
        prefixed.push('#');
        prefixed.push_str(&stripped);
        prefixed
    }
}

/// Format the 24-bit coordinates in canonical hashed hexadecimal notation,
/// i.e., as `#` followed by six uppercase hexadecimal digits.
pub(crate) fn format_hashed(coordinates: &[u8; 3]) -> String {
    let [r, g, b] = *coordinates;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hashed, is_hashed, normalize, parse_hashed, ColorFormatError};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#112233", false)?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("112233", false)?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#fFa0C9", false)?, [0xff_u8, 0xa0, 0xc9]);
        assert_eq!(parse_hashed("#123", true)?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(
            parse_hashed("#123", false),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            parse_hashed("##112233", false),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(parse_hashed("", true), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(
            parse_hashed("#12345", true),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            parse_hashed("#00GG00", false),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(parse_hashed("#0g0", true), Err(ColorFormatError::MalformedHex));

        // Length counts bytes, so the emoji plus two digits make six.
        assert_eq!(
            parse_hashed("#💩00", false),
            Err(ColorFormatError::MalformedHex)
        );

        Ok(())
    }

    #[test]
    fn test_is_hashed() {
        for valid in ["#FFF", "fff", "#a1B2c3", "000000"] {
            assert!(is_hashed(valid), "{} should be valid", valid);
        }
        for invalid in ["", "#", "#FF", "#FFFF", "#FFFFFFF", "##FFF", "#GGG", " #FFF"] {
            assert!(!is_hashed(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("#abc"), "#AABBCC");
        assert_eq!(normalize("abc"), "#AABBCC");
        assert_eq!(normalize("#a1b2c3"), "#A1B2C3");

        // Malformed input passes through.
        assert_eq!(normalize("#ab"), "#AB");
        assert_eq!(normalize("xyz"), "#XXYYZZ");
        assert_eq!(normalize("##abc"), "##ABC");
    }

    #[test]
    fn test_format_hashed() {
        assert_eq!(format_hashed(&[0, 0, 0]), "#000000");
        assert_eq!(format_hashed(&[255, 10, 171]), "#FF0AAB");
    }
}
