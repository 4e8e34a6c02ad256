//! Colon-hex IPv6 text parsing with a single `::` zero run.

use super::{AddrParseError, NS_IN6ADDRSZ, NS_INT16SZ, c_text, fits, hex_digit};

/// Parse a colon-hex IPv6 text address into 16 network-order bytes.
///
/// Accepts eight 1-4 digit hextets, or fewer with exactly one `::` standing
/// for the missing zero hextets. Hex digits are case-insensitive. Embedded
/// dotted-quad suffixes and zone identifiers are rejected. Scanning stops at
/// the first NUL byte.
pub fn parse_ipv6(src: &[u8]) -> Result<[u8; NS_IN6ADDRSZ], AddrParseError> {
    let text = c_text(src);
    let mut tmp = [0u8; NS_IN6ADDRSZ];
    let endp = NS_IN6ADDRSZ;
    let mut tp = 0usize;
    let mut colonp: Option<usize> = None;

    // Leading "::" needs the first colon skipped; a lone leading colon is bad.
    let mut start = 0;
    if text.first() == Some(&b':') {
        if text.get(1) != Some(&b':') {
            return Err(AddrParseError::Syntax { offset: 1 });
        }
        start = 1;
    }

    let mut saw_xdigit = false;
    let mut val: u32 = 0;

    for (offset, &ch) in text.iter().enumerate().skip(start) {
        if let Some(digit) = hex_digit(ch) {
            val = (val << 4) | u32::from(digit);
            if val > 0xffff {
                return Err(AddrParseError::Syntax { offset });
            }
            saw_xdigit = true;
            continue;
        }

        if ch == b':' {
            if !saw_xdigit {
                if colonp.is_some() {
                    return Err(AddrParseError::Cardinality { offset });
                }
                colonp = Some(tp);
                continue;
            }
            if offset + 1 == text.len() {
                return Err(AddrParseError::Syntax { offset: text.len() });
            }
            put_hextet(&mut tmp, &mut tp, val as u16, offset)?;
            saw_xdigit = false;
            val = 0;
            continue;
        }

        return Err(AddrParseError::Syntax { offset });
    }

    if saw_xdigit {
        put_hextet(&mut tmp, &mut tp, val as u16, text.len())?;
    }

    if let Some(colon) = colonp {
        if tp == endp {
            return Err(AddrParseError::Cardinality { offset: text.len() });
        }
        // Shift the hextets written after "::" to the tail by hand, back to
        // front, so the overlapping ranges are never read after being written.
        let n = tp - colon;
        debug_assert!(colon + n < endp);
        for i in 1..=n {
            tmp[endp - i] = tmp[colon + n - i];
            tmp[colon + n - i] = 0;
        }
        tp = endp;
    }

    if tp != endp {
        return Err(AddrParseError::Cardinality { offset: text.len() });
    }

    Ok(tmp)
}

/// Append one big-endian hextet at `cursor`, refusing to pass the buffer end.
fn put_hextet(
    buf: &mut [u8; NS_IN6ADDRSZ],
    cursor: &mut usize,
    hextet: u16,
    offset: usize,
) -> Result<(), AddrParseError> {
    if !fits(*cursor, NS_INT16SZ, buf.len()) {
        return Err(AddrParseError::Capacity { offset });
    }
    buf[*cursor..*cursor + NS_INT16SZ].copy_from_slice(&hextet.to_be_bytes());
    *cursor += NS_INT16SZ;
    Ok(())
}
