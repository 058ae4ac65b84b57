// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DASH: &str = "-";
pub(crate) static SLASH: &str = "/";

// parsing.rs
pub(crate) static ERR_COLON_AFTER_DOT: &str = "colons must not appear after dots";
pub(crate) static ERR_INVALID_CHAR: &str = "invalid character found";
pub(crate) static ERR_NOT_LITERAL: &str = "not an IP string literal";
pub(crate) static ERR_V4_OCTET_COUNT: &str = "IPv4 addresses must have exactly 4 octets";
pub(crate) static ERR_V4_OCTET_EMPTY: &str = "address octets must not be empty";
pub(crate) static ERR_V4_OCTET_LEN: &str = "address octets must contain no more than 3 digits";
pub(crate) static ERR_V4_OCTET_NUM: &str = "address octets must be decimal integers";
pub(crate) static ERR_V4_OCTET_RANGE: &str = "address octets must be between 0 and 255";
pub(crate) static ERR_V6_COLON_COUNT: &str = "invalid number of colons found";
pub(crate) static ERR_V6_MULTI_ELISION: &str = "cannot have more than one '::'";
pub(crate) static ERR_V6_LEADING_COLON: &str = "leading ':' found, requires '::'";
pub(crate) static ERR_V6_TRAILING_COLON: &str = "trailing ':' found, requires '::'";
pub(crate) static ERR_V6_PART_COUNT: &str = "invalid number of hextets found";
pub(crate) static ERR_V6_HEXTET_EMPTY: &str = "unexpected empty hextet";
pub(crate) static ERR_V6_HEXTET_LEN: &str = "hextets must contain no more than 4 digits";
pub(crate) static ERR_V6_HEXTET_NUM: &str = "hextets must be hexadecimal integers";

// structs.rs
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR format (too many slashes)";
pub(crate) static ERR_CIDR_INV_PRE: &str = "invalid prefix in CIDR";
pub(crate) static ERR_RNG_FMT: &str = "invalid range format";
pub(crate) static PANIC_MISMATCH: &str = "range endpoints must share an address family";

// serialization.rs
pub(crate) static EXPECT_ADDR: &str = "an IPv4 or IPv6 address string";
pub(crate) static EXPECT_CIDR: &str = "a CIDR string such as 10.0.0.0/8";
pub(crate) static EXPECT_RANGE: &str = "an address range string such as 10.0.0.1-10.0.0.9";
