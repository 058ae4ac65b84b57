// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Arithmetic on byte sequences interpreted as big-endian unsigned integers.

Nothing here mutates its input: every operation either takes its operand by
value (a copy for fixed-size arrays) or by shared reference, and returns a
new value. Binary operations reject operands of unequal length with
[AddressError::LengthMismatch].
*/

use super::AddressError;
use std::cmp::Ordering;

#[inline]
fn same_len(a: &[u8], b: &[u8]) -> Result<usize, AddressError> {
    if a.len() != b.len() {
        return Err(AddressError::LengthMismatch(a.len(), b.len()));
    }
    Ok(a.len())
}

/// Compare two byte sequences, most-significant byte first.
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, AddressError> {
    same_len(a, b)?;
    Ok(a.cmp(b))
}

/**
Add one, propagating the carry from the least-significant byte.

A carry out of the most-significant byte is dropped, i.e. the all-ones value
wraps around to all-zeros.
*/
pub fn increment<const N: usize>(bytes: [u8; N]) -> [u8; N] {
    let mut out: [u8; N] = bytes;
    for b in out.iter_mut().rev() {
        let (val, carry) = b.overflowing_add(1);
        *b = val;
        if !carry {
            break;
        }
    }
    out
}

/// Subtract one, propagating the borrow. All-zeros wraps around to all-ones.
pub fn decrement<const N: usize>(bytes: [u8; N]) -> [u8; N] {
    let mut out: [u8; N] = bytes;
    for b in out.iter_mut().rev() {
        let (val, borrow) = b.overflowing_sub(1);
        *b = val;
        if !borrow {
            break;
        }
    }
    out
}

/**
Canonical big-endian network mask with `prefix_len` high bits set.

```text
[b0,       b1,       ..., b_boundary, ...]
 11111111  11111111  ...  11111000    00000000
```

A `prefix_len` of `8 * byte_width` or more yields all-ones.
*/
pub fn prefix_mask(byte_width: usize, prefix_len: u32) -> Vec<u8> {
    let boundary: usize = (prefix_len >> 3) as usize;
    (0..byte_width)
        .map(|i| match i.cmp(&boundary) {
            Ordering::Less => 0xff,
            Ordering::Equal => !(0xffu8 >> (prefix_len & 7)),
            Ordering::Greater => 0x00,
        })
        .collect()
}

/// Number of identical bits counted from the most-significant bit.
/// Equal sequences yield `8 * len`.
pub fn leading_equal_bits(a: &[u8], b: &[u8]) -> Result<u32, AddressError> {
    same_len(a, b)?;
    Ok(count_leading_equal(a, b))
}

/// Number of zero bits counted from the least-significant bit.
pub fn trailing_zero_bits(bytes: &[u8]) -> u32 {
    let mut total: u32 = 0;
    for b in bytes.iter().rev() {
        let count: u32 = b.trailing_zeros();
        total += count;
        if count < 8 {
            break;
        }
    }
    total
}

/// Number of one bits counted from the least-significant bit.
pub fn trailing_one_bits(bytes: &[u8]) -> u32 {
    let mut total: u32 = 0;
    for b in bytes.iter().rev() {
        let count: u32 = b.trailing_ones();
        total += count;
        if count < 8 {
            break;
        }
    }
    total
}

/**
Longest prefix length `L` such that the block `cursor/L` lies entirely
within `[cursor, end]`.

Requires `cursor <= end`; the block is limited both by the alignment of
`cursor` and by how far `end` reaches past it.
*/
pub fn max_prefix_len(cursor: &[u8], end: &[u8]) -> Result<u32, AddressError> {
    same_len(cursor, end)?;
    Ok(max_block_prefix(cursor, end))
}

/// Same as [max_prefix_len], for callers which already guarantee equal widths.
pub(crate) fn max_block_prefix(cursor: &[u8], end: &[u8]) -> u32 {
    let total_bits: u32 = cursor.len() as u32 * 8;

    // a block of 2^h addresses must start at an address with h low zero bits
    let by_alignment: u32 = trailing_zero_bits(cursor);

    let mut by_range: u32 = total_bits - count_leading_equal(cursor, end);
    // end is not all-ones below the first differing bit: one size smaller
    if trailing_one_bits(end) < by_range {
        by_range -= 1;
    }

    total_bits - by_alignment.min(by_range)
}

#[inline]
fn count_leading_equal(a: &[u8], b: &[u8]) -> u32 {
    let mut total: u32 = 0;
    for (x, y) in a.iter().zip(b) {
        let count: u32 = (x ^ y).leading_zeros();
        total += count;
        if count < 8 {
            break;
        }
    }
    total
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn mask_u32(prefix_len: u32) -> u32 {
        match prefix_len {
            0 => 0,
            len => u32::MAX << (32 - len),
        }
    }

    fn mask_u128(prefix_len: u32) -> u128 {
        match prefix_len {
            0 => 0,
            len => u128::MAX << (128 - len),
        }
    }

    #[test]
    fn test_length_mismatch() {
        let a = [1u8, 2, 3, 4];
        let b = [0u8; 16];
        assert_eq!(compare(&a, &b), Err(AddressError::LengthMismatch(4, 16)));
        assert_eq!(leading_equal_bits(&b, &a), Err(AddressError::LengthMismatch(16, 4)));
        assert_eq!(max_prefix_len(&a, &b), Err(AddressError::LengthMismatch(4, 16)));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&[1, 0], &[0, 255]), Ok(Ordering::Greater));
        assert_eq!(compare(&[0, 1], &[0, 2]), Ok(Ordering::Less));
        assert_eq!(compare(&[7, 7], &[7, 7]), Ok(Ordering::Equal));
        assert_eq!(compare(&[0u8; 0], &[0u8; 0]), Ok(Ordering::Equal));
    }

    #[test]
    fn test_increment_wraps() {
        assert_eq!(increment([0xff; 4]), [0; 4]);
        assert_eq!(increment([0, 0, 0xff, 0xff]), [0, 1, 0, 0]);
        assert_eq!(decrement([0; 4]), [0xff; 4]);
        assert_eq!(decrement([1, 0, 0, 0]), [0, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_increment_leaves_input() {
        let src: [u8; 4] = [10, 0, 0, 255];
        let next = increment(src);
        assert_eq!(src, [10, 0, 0, 255]);
        assert_eq!(next, [10, 0, 1, 0]);
    }

    #[test]
    fn test_single_byte_counts() {
        for v in 0..=255u8 {
            assert_eq!(trailing_zero_bits(&[v]), v.trailing_zeros(), "byte {v:#04x}");
            assert_eq!(trailing_one_bits(&[v]), v.trailing_ones(), "byte {v:#04x}");
            assert_eq!(leading_equal_bits(&[v], &[0]).unwrap(), v.leading_zeros());
            assert_eq!(leading_equal_bits(&[v], &[v]).unwrap(), 8);
        }
    }

    #[test]
    fn test_prefix_masks_v4() {
        for len in 0..=32u32 {
            let mask = prefix_mask(4, len);
            assert_eq!(mask, mask_u32(len).to_be_bytes().to_vec(), "prefix {len}");
        }
    }

    #[test]
    fn test_prefix_masks_v6() {
        for len in 0..=128u32 {
            let mask = prefix_mask(16, len);
            assert_eq!(mask, mask_u128(len).to_be_bytes().to_vec(), "prefix {len}");
        }
    }

    #[test]
    fn test_max_prefix_len() {
        // whole space
        assert_eq!(max_prefix_len(&[0; 4], &[0xff; 4]), Ok(0));
        // single address
        assert_eq!(max_prefix_len(&[10, 0, 0, 1], &[10, 0, 0, 1]), Ok(32));
        // 10.100.0.0 is aligned to /14 and the range allows /9
        assert_eq!(max_prefix_len(&[10, 100, 0, 0], &[10, 255, 255, 255]), Ok(14));
        // 0.0.0.0 - 255.255.255.1 cannot take the whole space
        assert_eq!(max_prefix_len(&[0; 4], &[255, 255, 255, 1]), Ok(1));
        assert_eq!(max_prefix_len(&[0; 16], &[0xff; 16]), Ok(0));
    }

    #[quickcheck]
    fn check_compare(a: u32, b: u32) -> bool {
        compare(&a.to_be_bytes(), &b.to_be_bytes()) == Ok(a.cmp(&b))
    }

    #[quickcheck]
    fn check_increment_v4(a: u32) -> bool {
        increment(a.to_be_bytes()) == a.wrapping_add(1).to_be_bytes()
            && decrement(a.to_be_bytes()) == a.wrapping_sub(1).to_be_bytes()
    }

    #[quickcheck]
    fn check_increment_v6(a: u128) -> bool {
        increment(a.to_be_bytes()) == a.wrapping_add(1).to_be_bytes()
            && decrement(increment(a.to_be_bytes())) == a.to_be_bytes()
    }

    #[quickcheck]
    fn check_bit_counts(a: u128, b: u128) -> bool {
        let (ab, bb) = (a.to_be_bytes(), b.to_be_bytes());
        leading_equal_bits(&ab, &bb) == Ok((a ^ b).leading_zeros())
            && trailing_zero_bits(&ab) == a.trailing_zeros()
            && trailing_one_bits(&ab) == a.trailing_ones()
    }

    #[quickcheck]
    fn check_max_block_fits(a: u32, b: u32) -> bool {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let len: u32 = max_prefix_len(&start.to_be_bytes(), &end.to_be_bytes()).unwrap();
        let mask: u32 = mask_u32(len);
        let last: u32 = start | !mask;
        // aligned, inside the range, and one bit shorter would not be
        let fits = start & !mask == 0 && last <= end;
        let maximal = len == 0 || {
            let wider: u32 = mask_u32(len - 1);
            start & !wider != 0 || (start | !wider) > end
        };
        fits && maximal
    }
}
