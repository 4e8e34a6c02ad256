//! Dotted-quad IPv4 text parsing.

use super::{AddrParseError, NS_INADDRSZ, c_text, decimal_digit};

/// Parse a dotted-quad IPv4 text address into exactly 4 bytes.
///
/// Accepts only four canonical decimal octets: each in `0..=255`, no leading
/// zeros (`"0"` is fine, `"00"` and `"01"` are not), separated by single dots,
/// no surrounding junk. Scanning stops at the first NUL byte.
pub fn parse_ipv4(src: &[u8]) -> Result<[u8; NS_INADDRSZ], AddrParseError> {
    let text = c_text(src);
    let mut tmp = [0u8; NS_INADDRSZ];
    let mut slot = 0usize;
    let mut octets = 0usize;
    let mut saw_digit = false;

    for (offset, &ch) in text.iter().enumerate() {
        if let Some(digit) = decimal_digit(ch) {
            // A second digit after a leading zero.
            if saw_digit && tmp[slot] == 0 {
                return Err(AddrParseError::Syntax { offset });
            }
            let value = u16::from(tmp[slot]) * 10 + u16::from(digit);
            let Ok(octet) = u8::try_from(value) else {
                return Err(AddrParseError::Syntax { offset });
            };
            tmp[slot] = octet;

            if !saw_digit {
                octets += 1;
                if octets > NS_INADDRSZ {
                    return Err(AddrParseError::Cardinality { offset });
                }
                saw_digit = true;
            }
        } else if ch == b'.' && saw_digit {
            if octets == NS_INADDRSZ {
                return Err(AddrParseError::Cardinality { offset });
            }
            slot += 1;
            saw_digit = false;
        } else {
            return Err(AddrParseError::Syntax { offset });
        }
    }

    if octets < NS_INADDRSZ {
        return Err(AddrParseError::Cardinality { offset: text.len() });
    }

    Ok(tmp)
}
