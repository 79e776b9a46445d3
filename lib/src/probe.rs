//! Provides the reachability check performed against a single host
//!
//! This includes:
//! - The [`Prober`] trait implemented by every reachability check
//! - [`ping::PingProber`] which shells out to the system ping utility

#[cfg(test)]
use mockall::automock;

use std::time::Duration;

use crate::targets::subnet::HostAddress;

/// Default time to wait for a reply on each attempt
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Default number of attempts made before a host is considered down
pub const DEFAULT_PROBE_ATTEMPTS: u8 = 2;

/// Default executable used to ping hosts
pub const DEFAULT_PING_COMMAND: &str = "ping";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Data structure representing the outcome of probing a single host
pub struct ProbeResult {
    /// The host that was probed
    pub host: HostAddress,
    /// Whether any attempt got a reply
    pub reachable: bool,
}

#[cfg_attr(test, automock)]
/// Trait used by all reachability checks
pub trait Prober: Sync + Send {
    /// Blocks until the host is known to be reachable or not. Failing to
    /// perform the check at all is reported as unreachable.
    fn probe(&self, host: &HostAddress) -> bool;
}

pub mod ping;
