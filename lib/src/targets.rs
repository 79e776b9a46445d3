//! Provides helpers for enumerating the hosts of the subnets being probed

pub mod subnet;
