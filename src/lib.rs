// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Exact conversions between IP address notations, CIDR blocks and inclusive
address ranges.

Addresses are kept as fixed-width big-endian byte sequences (4 bytes for
IPv4, 16 for IPv6) and every conversion is done with byte-level arithmetic,
so both families share the same code paths.

```
use cidrcalc::{Address, IpRange};

let range = IpRange::new(
    Address::parse("10.100.0.0").unwrap(),
    Address::parse("10.255.255.255").unwrap(),
)
.unwrap();
let cidrs: Vec<String> = range.to_cidrs().iter().map(|c| c.to_string()).collect();
assert_eq!(cidrs, ["10.100.0.0/14", "10.104.0.0/13", "10.112.0.0/12", "10.128.0.0/9"]);
```
*/

pub mod bytes;
mod collapsing;
mod conversions;
mod notation;
mod parsing;
mod serialization;
mod strings;
mod structs;

use thiserror::Error;

pub use collapsing::{collapse_cidrs, collapse_ranges};
pub use structs::{Address, Cidr, IpFam, IpRange};

pub(crate) const IPV4_BYTES: usize = 4;
pub(crate) const IPV6_BYTES: usize = 16;
pub(crate) const IPV4_PARTS: usize = 4;
pub(crate) const IPV6_PARTS: usize = 8;
pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AddressError {
    /// text is not a valid IPv4/IPv6 literal (or CIDR/range text form)
    #[error("malformed address literal '{text}': {reason}")]
    MalformedLiteral { text: String, reason: String },
    /// byte sequence is neither 4 nor 16 bytes long
    #[error("invalid address byte length: {0} (expected 4 or 16)")]
    InvalidByteLength(usize),
    #[error("cannot mix address families: {0} and {1}")]
    VersionMismatch(IpFam, IpFam),
    #[error("invalid prefix length for {fam}: {len} (max {max})")]
    InvalidPrefixLength { fam: IpFam, len: u32, max: u8 },
    #[error("start address is greater than end address ({start} > {end})")]
    InvalidRangeOrder { start: Address, end: Address },
    /// byte-vector arithmetic on sequences of unequal length
    #[error("byte sequences differ in length: {0} vs {1}")]
    LengthMismatch(usize, usize),
}
