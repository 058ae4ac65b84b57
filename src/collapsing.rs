// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    bytes,
    strings::*,
    structs::{Address, Cidr, IpFam, IpRange},
};
use std::cmp::Ordering;
use tracing::trace;

/**
Collapse a list of inclusive IP ranges into an equivalent, minimal set of CIDRs.
- merges overlapping/adjacent ranges within each IP family
- IPv4 blocks come before IPv6 blocks, each in ascending address order

This does *not* enumerate IPs and hence scales to very large ranges.
*/
pub fn collapse_ranges(input: &[IpRange]) -> Vec<Cidr> {
    let mut ranges: Vec<IpRange> = input.to_vec();

    // 1) Sort ranges
    ranges.sort_by(|a, b| cmp_key(a).cmp(&cmp_key(b)));

    // 2) Merge overlaps/adjacent within each family
    let merged: Vec<IpRange> = merge_ranges(&ranges);

    // 3) Convert merged ranges to minimal CIDRs
    merged.iter().flat_map(IpRange::to_cidrs).collect()
}

/**
Collapse a list of CIDRs into an equivalent, minimal set of CIDRs.
- removes redundant sub-prefixes
- merges adjacent/overlapping blocks

Input CIDRs may carry host bits below their prefix length; they are
normalized to the network address.
*/
pub fn collapse_cidrs(input: &[Cidr]) -> Vec<Cidr> {
    let ranges: Vec<IpRange> = input.iter().map(Cidr::to_range).collect();
    collapse_ranges(&ranges)
}

/* ---------------------------------- */

/// Convert a CIDR to an inclusive range.
pub(crate) fn cidr_to_range(c: &Cidr) -> IpRange {
    match c.prefix {
        Address::V4(b) => {
            let (start, end) = mask_bounds(b, c.prefix_len);
            IpRange {
                start: Address::V4(start),
                end: Address::V4(end),
            }
        }
        Address::V6(b) => {
            let (start, end) = mask_bounds(b, c.prefix_len);
            IpRange {
                start: Address::V6(start),
                end: Address::V6(end),
            }
        }
    }
}

/// Decompose an inclusive range into the minimal ordered set of CIDRs.
pub(crate) fn range_to_cidrs(r: &IpRange) -> Vec<Cidr> {
    match (r.start, r.end) {
        (Address::V4(start), Address::V4(end)) => decompose(start, end, Address::V4),
        (Address::V6(start), Address::V6(end)) => decompose(start, end, Address::V6),
        _ => unreachable!("{PANIC_MISMATCH}"),
    }
}

/**
Greedy decomposition: at each step emit the largest block which starts at
the cursor and does not pass `end`, then continue right after it.

The loop stops before advancing past the block that reaches `end`, so the
cursor never wraps even when `end` is the last address of the family.
*/
fn decompose<const N: usize>(
    start: [u8; N],
    end: [u8; N],
    wrap: fn([u8; N]) -> Address,
) -> Vec<Cidr> {
    let mut out: Vec<Cidr> = Vec::new();
    let mut cursor: [u8; N] = start;

    loop {
        // N is 4 or 16, so the prefix length is at most 128
        let prefix_len: u8 = bytes::max_block_prefix(&cursor, &end) as u8;
        let (_, last) = mask_bounds(cursor, prefix_len);

        let cidr = Cidr {
            prefix: wrap(cursor),
            prefix_len,
        };
        trace!(%cidr, "emitting block");
        out.push(cidr);

        if last >= end {
            break;
        }
        cursor = bytes::increment(last);
    }

    out
}

/// First and last address of the block `bytes/prefix_len`.
#[inline]
fn mask_bounds<const N: usize>(bytes: [u8; N], prefix_len: u8) -> ([u8; N], [u8; N]) {
    let mask: Vec<u8> = bytes::prefix_mask(N, prefix_len.into());
    let mut start: [u8; N] = bytes;
    let mut end: [u8; N] = bytes;
    for ((lo, hi), m) in start.iter_mut().zip(end.iter_mut()).zip(mask) {
        *lo &= m;
        *hi |= !m;
    }
    (start, end)
}

#[inline]
fn cmp_key(r: &IpRange) -> (IpFam, &[u8], &[u8]) {
    (r.fam(), r.start.as_bytes(), r.end.as_bytes())
}

/// Merge overlapping/adjacent ranges within each IP family. Input must be sorted.
#[inline]
fn merge_ranges(sorted: &[IpRange]) -> Vec<IpRange> {
    let mut out: Vec<IpRange> = Vec::with_capacity(sorted.len());
    for r in sorted.iter().copied() {
        if let Some(last) = out.last_mut() {
            // overlap or adjacency?
            if last.fam() == r.fam() && (r.start <= last.end || r.start == last.end.increment()) {
                if r.end.compare(&last.end) == Ok(Ordering::Greater) {
                    trace!(from = %last, to = %r.end, "extending range");
                    last.end = r.end;
                }
                continue;
            }
        }
        out.push(r);
    }
    out
}

/* -------------------------------------------------------------------------- */
