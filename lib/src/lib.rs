//! Library package for pinging every host of two /24 subnets concurrently and
//! comparing which hosts failed to respond in each
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mpts_lib::{
//!     probe::{Prober, ping::PingProber},
//!     prober::ParallelProber,
//!     targets::subnet::Subnet,
//! };
//!
//! let first = Subnet::new("192.168.1.0/24", None).unwrap();
//! let second = Subnet::new("192.168.2.0/24", None).unwrap();
//!
//! let ping: Arc<dyn Prober> = Arc::new(PingProber::default());
//! let parallel = ParallelProber::builder().prober(ping).build().unwrap();
//!
//! let sweep = parallel.sweep(&first, &second).unwrap();
//!
//! println!("failed in both: {:?}", sweep.reconciliation.both);
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod probe;
pub mod prober;
pub mod reconcile;
pub mod targets;
