//! Provides the /24 subnet target and its host enumeration

use serde::{Serialize, Serializer};
use std::{fmt::Display, net, str::FromStr};

use crate::error::{MptsError, Result};

/// The only prefix length accepted for a [`Subnet`]
pub const SUBNET_PREFIX_LEN: u8 = 24;

/// Default first subnet
pub const DEFAULT_CIDR1: &str = "192.168.1.0/24";

/// Default second subnet
pub const DEFAULT_CIDR2: &str = "192.168.2.0/24";

/// A single address within a /24 subnet along with its final octet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostAddress {
    /// The final octet, identifying the host within its subnet
    pub octet: u8,
    /// The full IPv4 address
    pub ip: net::Ipv4Addr,
}

impl Display for HostAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ip)
    }
}

/// Parses a final octet, i.e. the value given to skip a host in both subnets
///
/// # Errors
///
/// Returns [`MptsError::InvalidSubnet`] if the value is not in 0..=255
pub fn parse_octet(value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|e| MptsError::from_octet_parse_int_err(value, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents a /24 subnet to probe
///
/// Only the network is stored. Host addresses are produced lazily by
/// [`Subnet::hosts`] which can be called any number of times.
///
/// # Errors
///
/// Returns an error if the CIDR is malformed, is not a /24 or has host bits
/// set
///
/// # Examples
///
/// ```
/// # use mpts_lib::targets::subnet::Subnet;
/// let subnet = Subnet::new("192.168.1.0/24", Some(72)).unwrap();
/// assert_eq!(subnet.len(), 255);
/// assert!(subnet.hosts().all(|h| h.octet != 72));
/// ```
pub struct Subnet {
    net: ipnet::Ipv4Net,
    skip: Option<u8>,
    exclude_network: bool,
}

impl Subnet {
    /// Returns a new Subnet for the CIDR, optionally skipping one final octet
    pub fn new(cidr: &str, skip: Option<u8>) -> Result<Self> {
        let net = ipnet::Ipv4Net::from_str(cidr.trim()).map_err(|e| {
            MptsError::from_ipnet_addr_parse_error(cidr, e)
        })?;

        if net.prefix_len() != SUBNET_PREFIX_LEN {
            return Err(MptsError::invalid_subnet(
                cidr,
                format!(
                    "only /{} subnets are supported, got /{}",
                    SUBNET_PREFIX_LEN,
                    net.prefix_len()
                ),
            ));
        }

        if net.trunc() != net {
            return Err(MptsError::invalid_subnet(
                cidr,
                format!("host bits set, did you mean {}?", net.trunc()),
            ));
        }

        Ok(Self {
            net,
            skip,
            exclude_network: false,
        })
    }

    /// Returns a copy of this subnet that also leaves out the network
    /// address (final octet 0)
    pub fn excluding_network(mut self) -> Self {
        self.exclude_network = true;
        self
    }

    /// The final octet skipped while enumerating, if any
    pub fn skip(&self) -> Option<u8> {
        self.skip
    }

    /// The first three octets shared by every host in the subnet
    pub fn prefix(&self) -> [u8; 3] {
        let [a, b, c, _] = self.net.network().octets();
        [a, b, c]
    }

    /// Returns the full address of the host with the given final octet
    pub fn address(&self, octet: u8) -> net::Ipv4Addr {
        let [a, b, c] = self.prefix();
        net::Ipv4Addr::new(a, b, c, octet)
    }

    /// Returns the number of hosts [`Subnet::hosts`] will yield
    pub fn len(&self) -> usize {
        self.hosts().count()
    }

    /// Returns true if no hosts would be enumerated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the final octet is one this subnet would probe
    pub fn includes(&self, octet: u8) -> bool {
        self.skip != Some(octet) && !(self.exclude_network && octet == 0)
    }

    /// Lazily iterates every host to probe in ascending final-octet order
    pub fn hosts(&self) -> Hosts {
        Hosts {
            subnet: *self,
            next: 0,
        }
    }
}

impl FromStr for Subnet {
    type Err = MptsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, None)
    }
}

impl Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.net)
    }
}

impl Serialize for Subnet {
    fn serialize<S: Serializer>(
        &self,
        s: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

/// Iterator over the hosts of a [`Subnet`]
#[derive(Debug, Clone)]
pub struct Hosts {
    subnet: Subnet,
    // u16 so the iterator can step past 255
    next: u16,
}

impl Iterator for Hosts {
    type Item = HostAddress;

    fn next(&mut self) -> Option<Self::Item> {
        while let Ok(octet) = u8::try_from(self.next) {
            self.next += 1;

            if self.subnet.includes(octet) {
                return Some(HostAddress {
                    octet,
                    ip: self.subnet.address(octet),
                });
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "./subnet_tests.rs"]
mod tests;
