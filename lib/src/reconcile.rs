//! Provides the failure sets produced by probing and their reconciliation
//! across two subnets

use serde::Serialize;
use std::{collections::BTreeSet, net::Ipv4Addr};

use crate::targets::subnet::Subnet;

/// Final octets of the hosts in one subnet that did not respond
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureSet(pub BTreeSet<u8>);

impl FailureSet {
    /// Returns a new empty FailureSet
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Records a failed final octet
    pub fn insert(&mut self, octet: u8) -> bool {
        self.0.insert(octet)
    }

    /// Returns true if the octet failed
    pub fn contains(&self, octet: u8) -> bool {
        self.0.contains(&octet)
    }

    /// Number of failed octets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates failed octets in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Returns a sorted Vec of the failed octets
    pub fn to_sorted_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl From<BTreeSet<u8>> for FailureSet {
    fn from(value: BTreeSet<u8>) -> Self {
        Self(value)
    }
}

impl FromIterator<u8> for FailureSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<u8> for FailureSet {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

/// The three-way split of two [`FailureSet`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Octets that failed in the first subnet only
    pub only_first: FailureSet,
    /// Octets that failed in the second subnet only
    pub only_second: FailureSet,
    /// Octets that failed in both subnets
    pub both: FailureSet,
}

/// Splits two failure sets into first - second, second - first and
/// first ∩ second
///
/// # Examples
///
/// ```
/// # use mpts_lib::reconcile::{reconcile, FailureSet};
/// let first: FailureSet = [25, 67, 87].into_iter().collect();
/// let second: FailureSet = [43, 87, 175].into_iter().collect();
/// let result = reconcile(&first, &second);
/// assert_eq!(result.only_first.to_sorted_vec(), vec![25, 67]);
/// assert_eq!(result.only_second.to_sorted_vec(), vec![43, 175]);
/// assert_eq!(result.both.to_sorted_vec(), vec![87]);
/// ```
pub fn reconcile(first: &FailureSet, second: &FailureSet) -> Reconciliation {
    Reconciliation {
        only_first: first.0.difference(&second.0).copied().collect(),
        only_second: second.0.difference(&first.0).copied().collect(),
        both: first.0.intersection(&second.0).copied().collect(),
    }
}

/// A probed subnet together with the hosts that failed in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetFailures {
    /// The subnet that was probed
    pub subnet: Subnet,
    /// Final octets of the hosts that failed
    pub failed_octets: FailureSet,
    /// Full addresses of the hosts that failed, sorted
    pub failed_addresses: Vec<Ipv4Addr>,
}

impl SubnetFailures {
    /// Returns a new instance pairing the subnet with its failures
    pub fn new(subnet: Subnet, failed_octets: FailureSet) -> Self {
        let failed_addresses =
            failed_octets.iter().map(|o| subnet.address(o)).collect();

        Self {
            subnet,
            failed_octets,
            failed_addresses,
        }
    }
}

/// Complete outcome of probing two subnets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sweep {
    /// Failures in the first subnet
    pub first: SubnetFailures,
    /// Failures in the second subnet
    pub second: SubnetFailures,
    /// How the failures of both subnets relate to one another
    pub reconciliation: Reconciliation,
}

impl Sweep {
    /// Reconciles the failures of both subnets
    pub fn new(first: SubnetFailures, second: SubnetFailures) -> Self {
        let reconciliation =
            reconcile(&first.failed_octets, &second.failed_octets);

        Self {
            first,
            second,
            reconciliation,
        }
    }

    /// Returns true if every probed host in both subnets responded
    pub fn is_clean(&self) -> bool {
        self.first.failed_octets.is_empty()
            && self.second.failed_octets.is_empty()
    }
}

#[cfg(test)]
#[path = "./reconcile_tests.rs"]
mod tests;
