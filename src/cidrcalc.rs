// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command line front end: convert addresses, CIDRs and ranges.

use anyhow::{bail, Result};
use cidrcalc::{collapse_ranges, Address, AddressError, Cidr, IpRange};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum Notation {
    /// compressed IPv6 (`2001:db8::1`)
    #[default]
    Short,
    /// no zero elision (`2001:db8:0:0:0:0:0:1`)
    Regular,
    /// zero-padded groups (`010.000.000.001`)
    Full,
}

impl Notation {
    fn render(self, addr: &Address) -> String {
        match self {
            Notation::Short => addr.short_notation(),
            Notation::Regular => addr.regular_notation(),
            Notation::Full => addr.full_notation(),
        }
    }
}

/// Convert between IP address notations, CIDR blocks and address ranges.
///
/// `A-B` prints the CIDRs covering the range, `A/N` prints the range of the
/// block and a bare address is printed in the chosen notation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Addresses, CIDRs or ranges; read from stdin (one per line) if omitted
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Address notation used for output
    #[arg(long, value_enum, default_value_t = Notation::Short)]
    notation: Notation,

    /// Merge all inputs into one minimal list of CIDRs
    #[arg(short, long)]
    collapse: bool,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One parsed command line input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Item {
    Range(IpRange),
    Cidr(Cidr),
    Addr(Address),
}

impl Item {
    fn parse(text: &str) -> Result<Self, AddressError> {
        let text: &str = text.trim();
        if text.contains('-') {
            Ok(Item::Range(text.parse()?))
        } else if text.contains('/') {
            Ok(Item::Cidr(text.parse()?))
        } else {
            Ok(Item::Addr(text.parse()?))
        }
    }

    fn to_range(self) -> IpRange {
        match self {
            Item::Range(r) => r,
            Item::Cidr(c) => c.to_range(),
            Item::Addr(a) => Cidr::host(a).to_range(),
        }
    }

    fn render(self, notation: Notation) -> Vec<String> {
        match self {
            Item::Range(r) => r
                .to_cidrs()
                .iter()
                .map(|c| render_cidr(c, notation))
                .collect(),
            Item::Cidr(c) => vec![render_range(&c.to_range(), notation)],
            Item::Addr(a) => vec![notation.render(&a)],
        }
    }
}

fn render_cidr(cidr: &Cidr, notation: Notation) -> String {
    format!("{}/{}", notation.render(&cidr.prefix()), cidr.prefix_len())
}

fn render_range(range: &IpRange, notation: Notation) -> String {
    format!(
        "{}-{}",
        notation.render(&range.start()),
        notation.render(&range.end())
    )
}

/// Parse every non-empty input, logging the ones which fail.
fn parse_all(inputs: &[String]) -> (Vec<Item>, usize) {
    let mut items: Vec<Item> = Vec::with_capacity(inputs.len());
    let mut failed: usize = 0;
    for input in inputs.iter().filter(|s| !s.trim().is_empty()) {
        match Item::parse(input) {
            Ok(item) => {
                debug!(input = input.as_str(), ?item, "parsed");
                items.push(item);
            }
            Err(err) => {
                error!(input = input.as_str(), %err, "skipping input");
                failed += 1;
            }
        }
    }
    (items, failed)
}

fn output_lines(items: &[Item], notation: Notation, collapse: bool) -> Vec<String> {
    if collapse {
        let ranges: Vec<IpRange> = items.iter().map(|i| i.to_range()).collect();
        collapse_ranges(&ranges)
            .iter()
            .map(|c| render_cidr(c, notation))
            .collect()
    } else {
        items.iter().flat_map(|i| i.render(notation)).collect()
    }
}

fn read_stdin() -> Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();
    for line in io::stdin().lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();

    let inputs: Vec<String> = match args.inputs.is_empty() {
        true => read_stdin()?,
        false => args.inputs,
    };

    let (items, failed) = parse_all(&inputs);
    for line in output_lines(&items, args.notation, args.collapse) {
        println!("{line}");
    }

    if failed > 0 {
        bail!("{failed} of {} inputs could not be parsed", items.len() + failed);
    }
    Ok(())
}

/* -------------------------------------------------------------------------- */
