// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interop with [std::net] addresses and [ipnet] networks.

use super::{
    structs::{Address, Cidr},
    AddressError, IpFam,
};
use ipnet::IpNet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

impl From<[u8; 4]> for Address {
    fn from(bytes: [u8; 4]) -> Self {
        Address::V4(bytes)
    }
}

impl From<[u8; 16]> for Address {
    fn from(bytes: [u8; 16]) -> Self {
        Address::V6(bytes)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::V6(ip.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

/// Host bits of the network address are kept as-is.
impl From<IpNet> for Cidr {
    fn from(net: IpNet) -> Self {
        Cidr {
            prefix: net.addr().into(),
            prefix_len: net.prefix_len(),
        }
    }
}

impl TryFrom<Cidr> for IpNet {
    type Error = AddressError;

    fn try_from(cidr: Cidr) -> Result<Self, Self::Error> {
        let fam: IpFam = cidr.fam();
        IpNet::new(cidr.prefix.into(), cidr.prefix_len).map_err(|_| {
            AddressError::InvalidPrefixLength {
                fam,
                len: cidr.prefix_len.into(),
                max: fam.bits(),
            }
        })
    }
}

/* -------------------------------------------------------------------------- */
