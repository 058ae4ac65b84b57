// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Address text to bytes. The family is picked from the characters present.

use super::{strings::*, AddressError, IPV4_BYTES, IPV4_PARTS, IPV6_BYTES, IPV6_PARTS};
use tracing::debug;

fn malformed(text: &str, reason: impl Into<String>) -> AddressError {
    let reason: String = reason.into();
    debug!(text, %reason, "rejected address literal");
    AddressError::MalformedLiteral {
        text: text.into(),
        reason,
    }
}

/**
Parse an IPv4 or IPv6 literal into its 4 or 16 bytes.

Supported formats:
- IPv4: 192.168.0.1 (up to 3 decimal digits per octet)
- IPv6: 2001:db8:0:0:0:0:0:1, 2001:db8::1, ::
- IPv6 with trailing dotted quad: ::ffff:192.168.0.1
*/
pub(crate) fn text_to_bytes(text: &str) -> Result<Vec<u8>, AddressError> {
    // First pass: categorize the characters.
    let mut has_colon: bool = false;
    let mut has_dot: bool = false;
    for c in text.chars() {
        match c {
            '.' => has_dot = true,
            ':' if has_dot => return Err(malformed(text, ERR_COLON_AFTER_DOT)),
            ':' => has_colon = true,
            c if c.is_ascii_hexdigit() => {}
            c => return Err(malformed(text, format!("{ERR_INVALID_CHAR}: '{c}'"))),
        }
    }

    match (has_colon, has_dot) {
        (true, true) => Ok(parse_v6(text, &dotted_quad_to_hex(text)?)?.to_vec()),
        (true, false) => Ok(parse_v6(text, text)?.to_vec()),
        (false, true) => Ok(parse_v4(text, text)?.to_vec()),
        (false, false) => Err(malformed(text, ERR_NOT_LITERAL)),
    }
}

/// Rewrite the dotted quad after the last colon as two hextets.
fn dotted_quad_to_hex(text: &str) -> Result<String, AddressError> {
    let split: usize = text.rfind(':').map_or(0, |idx| idx + 1);
    let (head, quad) = text.split_at(split);
    let octets: [u8; IPV4_BYTES] = parse_v4(text, quad)?;
    let hi: u16 = u16::from_be_bytes([octets[0], octets[1]]);
    let lo: u16 = u16::from_be_bytes([octets[2], octets[3]]);
    Ok(format!("{head}{hi:x}:{lo:x}"))
}

/// `text` is the full input, kept for error context.
fn parse_v4(text: &str, quad: &str) -> Result<[u8; IPV4_BYTES], AddressError> {
    let octets: Vec<&str> = quad.split('.').collect();
    if octets.len() != IPV4_PARTS {
        return Err(malformed(text, ERR_V4_OCTET_COUNT));
    }

    let mut out = [0u8; IPV4_BYTES];
    for (slot, octet) in out.iter_mut().zip(&octets) {
        if octet.is_empty() {
            return Err(malformed(text, ERR_V4_OCTET_EMPTY));
        }
        if octet.len() > 3 {
            return Err(malformed(text, ERR_V4_OCTET_LEN));
        }
        if !octet.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(text, format!("{ERR_V4_OCTET_NUM}: '{octet}'")));
        }
        let val: u16 = octet
            .parse()
            .map_err(|_| malformed(text, format!("{ERR_V4_OCTET_NUM}: '{octet}'")))?;
        *slot = u8::try_from(val)
            .map_err(|_| malformed(text, format!("{ERR_V4_OCTET_RANGE}, got {val}")))?;
    }
    Ok(out)
}

/// `text` is the full input, `hex` the pure colon-hex form to parse.
fn parse_v6(text: &str, hex: &str) -> Result<[u8; IPV6_BYTES], AddressError> {
    // 2..=8 colons, N colons make N+1 parts
    let parts: Vec<&str> = hex.split(':').collect();
    if parts.len() < 3 || parts.len() > IPV6_PARTS + 1 {
        return Err(malformed(text, format!("{ERR_V6_COLON_COUNT}: {}", parts.len() - 1)));
    }

    // Disregarding the endpoints, find '::' with nothing in between.
    let mut skip: Option<usize> = None;
    for (idx, part) in parts.iter().enumerate().take(parts.len() - 1).skip(1) {
        if part.is_empty() {
            if skip.is_some() {
                return Err(malformed(text, ERR_V6_MULTI_ELISION));
            }
            skip = Some(idx);
        }
    }

    // number of parts before / after the '::'
    let (parts_hi, parts_lo): (usize, usize) = match skip {
        Some(idx) => {
            let mut hi: usize = idx;
            let mut lo: usize = parts.len() - idx - 1;
            if parts[0].is_empty() {
                hi -= 1;
                if hi != 0 {
                    return Err(malformed(text, ERR_V6_LEADING_COLON));
                }
            }
            if parts[parts.len() - 1].is_empty() {
                lo -= 1;
                if lo != 0 {
                    return Err(malformed(text, ERR_V6_TRAILING_COLON));
                }
            }
            (hi, lo)
        }
        // empty endpoints are caught by write_hextet()
        None => (parts.len(), 0),
    };

    // '::' must stand for at least one hextet
    let explicit: usize = parts_hi + parts_lo;
    let counts_ok: bool = match skip {
        Some(_) => explicit < IPV6_PARTS,
        None => explicit == IPV6_PARTS,
    };
    if !counts_ok {
        return Err(malformed(text, ERR_V6_PART_COUNT));
    }

    let mut out = [0u8; IPV6_BYTES];
    for (i, part) in parts[..parts_hi].iter().enumerate() {
        write_hextet(text, part, &mut out, i * 2)?;
    }
    let lo_base: usize = IPV6_PARTS - parts_lo;
    for (i, part) in parts[parts.len() - parts_lo..].iter().enumerate() {
        write_hextet(text, part, &mut out, (lo_base + i) * 2)?;
    }
    Ok(out)
}

fn write_hextet(
    text: &str,
    part: &str,
    out: &mut [u8; IPV6_BYTES],
    loc: usize,
) -> Result<(), AddressError> {
    if part.is_empty() {
        return Err(malformed(text, ERR_V6_HEXTET_EMPTY));
    }
    if part.len() > 4 {
        return Err(malformed(text, ERR_V6_HEXTET_LEN));
    }
    if !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(text, format!("{ERR_V6_HEXTET_NUM}: '{part}'")));
    }
    let val: u16 = u16::from_str_radix(part, 16)
        .map_err(|_| malformed(text, format!("{ERR_V6_HEXTET_NUM}: '{part}'")))?;
    out[loc..loc + 2].copy_from_slice(&val.to_be_bytes());
    Ok(())
}

/* -------------------------------------------------------------------------- */
