// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual renderings of address bytes.

use super::{IPV4_BYTES, IPV6_BYTES};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Two or more zero hextets in regular notation, with their delimiters.
    static ref ZERO_RUN: Regex = Regex::new(r"(^|:)0(:0)+($|:)").expect("Not possible");
}

#[inline]
fn hextets(bytes: &[u8; IPV6_BYTES]) -> impl Iterator<Item = u16> + '_ {
    bytes.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
}

pub(crate) fn regular_v4(bytes: &[u8; IPV4_BYTES]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<String>>()
        .join(".")
}

pub(crate) fn short_v4(bytes: &[u8; IPV4_BYTES]) -> String {
    regular_v4(bytes)
}

pub(crate) fn full_v4(bytes: &[u8; IPV4_BYTES]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:03}"))
        .collect::<Vec<String>>()
        .join(".")
}

pub(crate) fn regular_v6(bytes: &[u8; IPV6_BYTES]) -> String {
    hextets(bytes)
        .map(|h| format!("{h:x}"))
        .collect::<Vec<String>>()
        .join(":")
}

pub(crate) fn full_v6(bytes: &[u8; IPV6_BYTES]) -> String {
    hextets(bytes)
        .map(|h| format!("{h:04x}"))
        .collect::<Vec<String>>()
        .join(":")
}

/**
Regular notation with the longest run of zero hextets replaced by `::`.

Only runs of at least two hextets are elided. When several runs share the
longest length, the leftmost one wins.
*/
pub(crate) fn short_v6(bytes: &[u8; IPV6_BYTES]) -> String {
    let regular: String = regular_v6(bytes);

    let mut longest: Option<(usize, usize)> = None;
    for run in ZERO_RUN.find_iter(&regular) {
        // match length is 2 chars per hextet, give or take a delimiter
        let replace = match longest {
            None => true,
            Some((beg, end)) => run.len() / 2 > (end - beg) / 2,
        };
        if replace {
            longest = Some((run.start(), run.end()));
        }
    }

    match longest {
        Some((beg, end)) => format!("{}::{}", &regular[..beg], &regular[end..]),
        None => regular,
    }
}

/* -------------------------------------------------------------------------- */
