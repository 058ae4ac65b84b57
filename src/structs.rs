// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    bytes,
    collapsing::{cidr_to_range, range_to_cidrs},
    notation, parsing,
    strings::*,
    AddressError, IPV4_BITS, IPV4_BYTES, IPV6_BITS, IPV6_BYTES,
};
use std::{cmp::Ordering, fmt, str::FromStr};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Width of an address of this family in bytes.
    pub fn byte_count(self) -> usize {
        match self {
            IpFam::V4 => IPV4_BYTES,
            IpFam::V6 => IPV6_BYTES,
        }
    }

    /// Width of an address of this family in bits.
    pub fn bits(self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => f.write_str("IPv4"),
            IpFam::V6 => f.write_str("IPv6"),
        }
    }
}

/* -------------------------------------------------------------------------- */

/**
An IPv4 or IPv6 address held as its big-endian bytes.

Values are immutable; operations such as [Address::increment] return a new
address. Ordering is only defined within one family, so [PartialOrd] yields
`None` for a V4/V6 pair and [Address::compare] reports
[AddressError::VersionMismatch].
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Address {
    V4([u8; IPV4_BYTES]),
    V6([u8; IPV6_BYTES]),
}

impl Address {
    /// Parse dotted-decimal, colon-hex or IPv4-suffixed IPv6 text.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        Self::from_bytes(&parsing::text_to_bytes(text)?)
    }

    /// Build an address from 4 (IPv4) or 16 (IPv6) bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        match bytes.len() {
            IPV4_BYTES => {
                let mut v4 = [0u8; IPV4_BYTES];
                v4.copy_from_slice(bytes);
                Ok(Address::V4(v4))
            }
            IPV6_BYTES => {
                let mut v6 = [0u8; IPV6_BYTES];
                v6.copy_from_slice(bytes);
                Ok(Address::V6(v6))
            }
            len => Err(AddressError::InvalidByteLength(len)),
        }
    }

    pub fn fam(&self) -> IpFam {
        match self {
            Address::V4(_) => IpFam::V4,
            Address::V6(_) => IpFam::V6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(b) => b,
            Address::V6(b) => b,
        }
    }

    /// Owned copy of the address bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn compare(&self, other: &Address) -> Result<Ordering, AddressError> {
        if self.fam() != other.fam() {
            return Err(AddressError::VersionMismatch(self.fam(), other.fam()));
        }
        bytes::compare(self.as_bytes(), other.as_bytes())
    }

    /// `10.0.0.1`, `2001:db8:0:0:0:0:0:1`
    pub fn regular_notation(&self) -> String {
        match self {
            Address::V4(b) => notation::regular_v4(b),
            Address::V6(b) => notation::regular_v6(b),
        }
    }

    /// `10.0.0.1`, `2001:db8::1`
    pub fn short_notation(&self) -> String {
        match self {
            Address::V4(b) => notation::short_v4(b),
            Address::V6(b) => notation::short_v6(b),
        }
    }

    /// `010.000.000.001`, `2001:0db8:0000:0000:0000:0000:0000:0001`
    pub fn full_notation(&self) -> String {
        match self {
            Address::V4(b) => notation::full_v4(b),
            Address::V6(b) => notation::full_v6(b),
        }
    }

    /// The next address. Wraps to all-zeros after the last address.
    pub fn increment(&self) -> Address {
        match *self {
            Address::V4(b) => Address::V4(bytes::increment(b)),
            Address::V6(b) => Address::V6(bytes::increment(b)),
        }
    }

    /// The previous address. Wraps to all-ones before the first address.
    pub fn decrement(&self) -> Address {
        match *self {
            Address::V4(b) => Address::V4(bytes::decrement(b)),
            Address::V6(b) => Address::V6(bytes::decrement(b)),
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_notation())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

/* -------------------------------------------------------------------------- */

/**
An address plus a prefix length.

The stored prefix is kept as given: host bits below the prefix length are
not cleared until [Cidr::to_range], so two CIDRs covering the same block can
still compare unequal.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cidr {
    pub(crate) prefix: Address,
    /// **v4**: `0..=32`, **v6**: `0..=128`
    pub(crate) prefix_len: u8,
}

impl Cidr {
    pub fn new(prefix: Address, prefix_len: u8) -> Result<Self, AddressError> {
        let max: u8 = prefix.fam().bits();
        if prefix_len > max {
            return Err(AddressError::InvalidPrefixLength {
                fam: prefix.fam(),
                len: prefix_len.into(),
                max,
            });
        }
        Ok(Cidr { prefix, prefix_len })
    }

    /// Single-address CIDR (/32 or /128).
    pub fn host(addr: Address) -> Self {
        Cidr {
            prefix: addr,
            prefix_len: addr.fam().bits(),
        }
    }

    pub fn prefix(&self) -> Address {
        self.prefix
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn fam(&self) -> IpFam {
        self.prefix.fam()
    }

    pub fn is_host(&self) -> bool {
        self.prefix_len == self.fam().bits()
    }

    /// Inclusive range covered by this CIDR; host bits of the prefix are ignored.
    pub fn to_range(&self) -> IpRange {
        cidr_to_range(self)
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.to_range().contains(addr)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.prefix, self.prefix_len)
    }
}

impl FromStr for Cidr {
    type Err = AddressError;

    /// `addr/len`, or a bare address for a host CIDR.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(SLASH) {
            return Ok(Cidr::host(s.trim().parse()?));
        }

        let parts: Vec<&str> = s.split(SLASH).collect();
        if parts.len() != 2 {
            return Err(AddressError::MalformedLiteral {
                text: s.into(),
                reason: ERR_CIDR_FMT.into(),
            });
        }

        let addr: Address = parts[0].trim().parse()?;
        let prefix: &str = parts[1].trim();
        let prefix_len: u32 = prefix
            .parse::<u32>()
            .map_err(|e| AddressError::MalformedLiteral {
                text: s.into(),
                reason: format!("{ERR_CIDR_INV_PRE} '{prefix}': {e}"),
            })?;

        let prefix_len: u8 =
            u8::try_from(prefix_len).map_err(|_| AddressError::InvalidPrefixLength {
                fam: addr.fam(),
                len: prefix_len,
                max: addr.fam().bits(),
            })?;

        Cidr::new(addr, prefix_len)
    }
}

/* -------------------------------------------------------------------------- */

/// Inclusive range of IP addresses (endpoints are included).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IpRange {
    pub(crate) start: Address,
    /// inclusive
    pub(crate) end: Address,
}

impl IpRange {
    /// Create a new [IpRange]. Ensures that IP families match and order is correct.
    pub fn new(start: Address, end: Address) -> Result<Self, AddressError> {
        if start.compare(&end)? == Ordering::Greater {
            return Err(AddressError::InvalidRangeOrder { start, end });
        }
        Ok(IpRange { start, end })
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn fam(&self) -> IpFam {
        self.start.fam()
    }

    /**
    Decompose into the minimal ordered list of CIDRs whose union is exactly
    this range. Never empty.
    */
    pub fn to_cidrs(&self) -> Vec<Cidr> {
        range_to_cidrs(self)
    }

    /// Whether `addr` lies within the range. Always false across families.
    pub fn contains(&self, addr: &Address) -> bool {
        self.start <= *addr && *addr <= self.end
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DASH}{}", self.start, self.end)
    }
}

impl FromStr for IpRange {
    type Err = AddressError;

    /// `start-end`, both endpoints written out in full.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DASH).collect();
        if parts.len() != 2 {
            return Err(AddressError::MalformedLiteral {
                text: s.into(),
                reason: ERR_RNG_FMT.into(),
            });
        }
        IpRange::new(parts[0].trim().parse()?, parts[1].trim().parse()?)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_V4: &str = "192.168.1.0/30";
    const TEST_V6: &str = "::/126";
    const UNALIGNED: &str = "255.252.3.4/15";
    const RANGE_V4: &str = "10.0.0.1-10.0.0.5";
    const RANGE_V6: &str = "2001:db8::1-2001:db8::ffff";

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    #[test]
    fn test_fam_widths() {
        assert_eq!(addr("1.2.3.4").fam().byte_count(), 4);
        assert_eq!(addr("::1").fam().byte_count(), 16);
        assert_eq!(IpFam::V4.bits(), 32);
        assert_eq!(IpFam::V6.bits(), 128);
        assert_eq!(IpFam::V6.to_string(), "IPv6");
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(Address::from_bytes(&[10, 0, 0, 1]), Ok(addr("10.0.0.1")));
        let mut v6 = [0u8; 16];
        v6[15] = 1;
        assert_eq!(Address::from_bytes(&v6), Ok(addr("::1")));
        assert_eq!(Address::from_bytes(&[1, 2, 3]), Err(AddressError::InvalidByteLength(3)));
        assert_eq!(Address::from_bytes(&[]), Err(AddressError::InvalidByteLength(0)));
        assert_eq!(Address::from_bytes(&[0; 5]), Err(AddressError::InvalidByteLength(5)));
    }

    #[test]
    fn test_to_bytes_is_a_copy() {
        let a: Address = addr("192.168.2.1");
        let mut raw: Vec<u8> = a.to_bytes();
        raw[0] = 0;
        assert_eq!(a.to_bytes(), vec![192, 168, 2, 1]);
        assert_eq!(addr("::192.168.2.1").to_bytes()[12..].to_vec(), vec![192, 168, 2, 1]);
    }

    #[test]
    fn test_compare() {
        assert_eq!(addr("10.0.0.1").compare(&addr("10.0.0.2")), Ok(Ordering::Less));
        assert_eq!(addr("::2").compare(&addr("::1")), Ok(Ordering::Greater));
        assert_eq!(addr("::").compare(&addr("0::0")), Ok(Ordering::Equal));
        assert_eq!(
            addr("10.0.0.1").compare(&addr("::1")),
            Err(AddressError::VersionMismatch(IpFam::V4, IpFam::V6))
        );
        assert_eq!(addr("10.0.0.1").partial_cmp(&addr("::1")), None);
        assert!(addr("9.255.255.255") < addr("10.0.0.0"));
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(addr("10.0.0.255").increment(), addr("10.0.1.0"));
        assert_eq!(addr("255.255.255.255").increment(), addr("0.0.0.0"));
        assert_eq!(addr("::1:0").decrement(), addr("::ffff"));
        assert_eq!(addr("::").decrement(), addr("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"));
    }

    #[test]
    fn test_cidr_parse_v4() {
        let cidr = TEST_V4.parse::<Cidr>();
        assert!(cidr.is_ok());
        let cidr = cidr.unwrap();
        assert_eq!(cidr.prefix(), addr("192.168.1.0"));
        assert_eq!(cidr.prefix_len(), 30);
        assert_eq!(cidr.to_string(), TEST_V4);
    }

    #[test]
    fn test_cidr_parse_v6() {
        let cidr = TEST_V6.parse::<Cidr>();
        assert!(cidr.is_ok());
        let cidr = cidr.unwrap();
        assert_eq!(cidr.prefix(), Address::V6([0; 16]));
        assert_eq!(cidr.prefix_len(), 126);
        assert_eq!(cidr.to_string(), TEST_V6);
    }

    #[test]
    fn test_cidr_bare_address_is_host() {
        let cidr: Cidr = "10.1.2.3".parse().unwrap();
        assert!(cidr.is_host());
        assert_eq!(cidr.prefix_len(), 32);
        let cidr: Cidr = "2001:db8::1".parse().unwrap();
        assert_eq!(cidr.prefix_len(), 128);
    }

    #[test]
    fn test_cidr_keeps_host_bits() {
        let cidr: Cidr = UNALIGNED.parse().unwrap();
        assert_eq!(cidr.prefix(), addr("255.252.3.4"));
        assert_eq!(cidr.to_string(), UNALIGNED);
        assert_ne!(cidr, "255.252.0.0/15".parse::<Cidr>().unwrap());
        assert_eq!(cidr.to_range(), "255.252.0.0/15".parse::<Cidr>().unwrap().to_range());
    }

    #[test]
    fn test_cidr_invalid_prefix() {
        assert_eq!(
            Cidr::new(addr("10.0.0.0"), 33),
            Err(AddressError::InvalidPrefixLength { fam: IpFam::V4, len: 33, max: 32 })
        );
        assert!(Cidr::new(addr("10.0.0.0"), 32).is_ok());
        assert!(Cidr::new(addr("::"), 128).is_ok());
        assert_eq!(
            Cidr::new(addr("::"), 129),
            Err(AddressError::InvalidPrefixLength { fam: IpFam::V6, len: 129, max: 128 })
        );
        assert_eq!(
            "10.0.0.0/300".parse::<Cidr>(),
            Err(AddressError::InvalidPrefixLength { fam: IpFam::V4, len: 300, max: 32 })
        );
        assert!(matches!(
            "10.0.0.0/8/8".parse::<Cidr>(),
            Err(AddressError::MalformedLiteral { .. })
        ));
        assert!(matches!(
            "10.0.0.0/x".parse::<Cidr>(),
            Err(AddressError::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn test_cidr_contains() {
        let cidr: Cidr = TEST_V4.parse().unwrap();
        assert!(cidr.contains(&addr("192.168.1.3")));
        assert!(!cidr.contains(&addr("192.168.1.4")));
        assert!(!cidr.contains(&addr("::192.168.1.1")));
    }

    #[test]
    fn test_range_new() {
        let range: IpRange = RANGE_V4.parse().unwrap();
        assert_eq!(range.start(), addr("10.0.0.1"));
        assert_eq!(range.end(), addr("10.0.0.5"));
        assert_eq!(range.to_string(), RANGE_V4);
        let range: IpRange = RANGE_V6.parse().unwrap();
        assert_eq!(range.fam(), IpFam::V6);
        assert_eq!(range.to_string(), RANGE_V6);
        assert!(IpRange::new(addr("10.0.0.1"), addr("10.0.0.1")).is_ok());
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            IpRange::new(addr("10.0.0.5"), addr("10.0.0.1")),
            Err(AddressError::InvalidRangeOrder {
                start: addr("10.0.0.5"),
                end: addr("10.0.0.1"),
            })
        );
        assert_eq!(
            IpRange::new(addr("10.0.0.1"), addr("::1")),
            Err(AddressError::VersionMismatch(IpFam::V4, IpFam::V6))
        );
        assert!(matches!(
            "10.0.0.1".parse::<IpRange>(),
            Err(AddressError::MalformedLiteral { .. })
        ));
        assert!(matches!(
            "10.0.0.1-10.0.0.2-10.0.0.3".parse::<IpRange>(),
            Err(AddressError::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn test_range_contains() {
        let range: IpRange = RANGE_V4.parse().unwrap();
        assert!(range.contains(&addr("10.0.0.1")));
        assert!(range.contains(&addr("10.0.0.5")));
        assert!(!range.contains(&addr("10.0.0.6")));
        assert!(!range.contains(&addr("::a00:3")));
    }

    #[test]
    fn test_error_messages() {
        let err = IpRange::new(addr("10.0.0.5"), addr("10.0.0.1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "start address is greater than end address (10.0.0.5 > 10.0.0.1)"
        );
        let err = Address::from_bytes(&[1, 2]).unwrap_err();
        assert_eq!(err.to_string(), "invalid address byte length: 2 (expected 4 or 16)");
    }
}
