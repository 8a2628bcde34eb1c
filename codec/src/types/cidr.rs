//! IPv4 network ranges in CIDR notation.
//!
//! Input must be text of the form `a.b.c.d/n` with `n` in `0..=32`. Octets
//! are decimal and may carry leading zeros. Host bits set in the input are
//! cleared, so the decoded range always encodes back to its canonical form
//! (`10.0.0.1/16` and `010.000.0.1/16` both decode to `10.0.0.0/16`). IPv6
//! ranges are not supported.

use crate::{Codec, Context, ErrorKind, Text, Validation, ValidationError};
use ipnet::Ipv4Net;
use serde_json::Value;
use std::{fmt, net::Ipv4Addr, str::FromStr};
use thiserror::Error;

/// Maximum prefix length of an IPv4 network.
const MAX_PREFIX_LEN: u8 = 32;

/// Maximum number of digits in a dotted-decimal octet.
const MAX_OCTET_DIGITS: usize = 3;

/// Parses dotted-decimal IPv4 text, allowing leading zeros in each octet.
fn parse_addr(s: &str) -> Result<Ipv4Addr, CidrError> {
    let invalid = || CidrError::InvalidAddress(s.into());
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty()
            || part.len() > MAX_OCTET_DIGITS
            || !part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        *octet = part.parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(Ipv4Addr::from(octets))
}

/// Errors parsing CIDR text.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum CidrError {
    #[error("missing prefix length")]
    MissingPrefix,
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
}

/// An IPv4 network: a network address and a prefix length in `0..=32`.
///
/// Bits of the address beyond the prefix are always zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NetworkRange(Ipv4Net);

impl NetworkRange {
    /// Creates a range from `addr` and `prefix_len`, clearing host bits of `addr`.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Self, CidrError> {
        let net = Ipv4Net::new(addr, prefix_len)
            .map_err(|_| CidrError::InvalidPrefix(prefix_len.to_string()))?;
        Ok(Self(net.trunc()))
    }

    /// The network address (host bits zeroed).
    pub fn network(&self) -> Ipv4Addr {
        self.0.network()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }

    pub fn netmask(&self) -> Ipv4Addr {
        self.0.netmask()
    }

    /// The last address in the range.
    pub fn broadcast(&self) -> Ipv4Addr {
        self.0.broadcast()
    }

    /// Returns true if `addr` is within this range.
    pub fn contains(&self, addr: &Ipv4Addr) -> bool {
        self.0.contains(addr)
    }

    /// Returns true if `other` is entirely within this range.
    pub fn contains_range(&self, other: &NetworkRange) -> bool {
        self.0.contains(&other.0)
    }
}

impl From<NetworkRange> for Ipv4Net {
    fn from(range: NetworkRange) -> Self {
        range.0
    }
}

impl From<Ipv4Net> for NetworkRange {
    fn from(net: Ipv4Net) -> Self {
        Self(net.trunc())
    }
}

impl FromStr for NetworkRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s.split_once('/').ok_or(CidrError::MissingPrefix)?;
        let addr = parse_addr(addr)?;

        // Reject signs, whitespace and empty prefixes before parsing
        if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::InvalidPrefix(prefix.into()));
        }
        let prefix_len: u8 = prefix
            .parse()
            .map_err(|_| CidrError::InvalidPrefix(prefix.into()))?;
        if prefix_len > MAX_PREFIX_LEN {
            return Err(CidrError::InvalidPrefix(prefix.into()));
        }
        Self::new(addr, prefix_len)
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len())
    }
}

/// Accepts CIDR text and decodes it into a [NetworkRange].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cidr;

impl Codec for Cidr {
    type Decoded = NetworkRange;
    type Encoded = Value;

    fn name(&self) -> &str {
        "CIDR"
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        match raw {
            Some(Value::String(s)) => s.parse::<NetworkRange>().is_ok(),
            _ => false,
        }
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<NetworkRange> {
        let text = Text.validate(raw, context)?;
        text.parse::<NetworkRange>().map_err(|_| {
            ValidationError::new(
                ErrorKind::ParseFailure,
                raw,
                context,
                format!("Value {text} should be a CIDR range."),
            )
            .into()
        })
    }

    fn encode(&self, value: &NetworkRange) -> Value {
        Value::String(value.to_string())
    }
}
