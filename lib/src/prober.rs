//! Provides the parallel prober which fans a [`Prober`] out over every host
//! of a subnet and collects the failures

use derive_builder::Builder;
use log::*;
use std::{
    collections::HashSet,
    sync::{Arc, mpsc},
    thread,
};
use threadpool::ThreadPool;

use crate::{
    error::Result,
    probe::{ProbeResult, Prober},
    reconcile::{FailureSet, SubnetFailures, Sweep},
    targets::subnet::Subnet,
};

/// Default number of probes run at the same time per subnet
pub const DEFAULT_POOL_SIZE: usize = 20;

/// Data structure representing a parallel prober
#[derive(Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ParallelProber {
    /// Reachability check run against every host
    prober: Arc<dyn Prober>,
    /// Number of worker threads per subnet
    #[builder(default = "DEFAULT_POOL_SIZE")]
    pool_size: usize,
}

impl ParallelProberBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.pool_size == Some(0) {
            return Err("pool_size must be greater than zero".into());
        }
        Ok(())
    }
}

impl ParallelProber {
    /// Returns builder for ParallelProber
    pub fn builder() -> ParallelProberBuilder {
        ParallelProberBuilder::default()
    }

    /// Number of worker threads used per subnet
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Probes every host of the subnet and returns the final octets of those
    /// that did not respond. Blocks until every probe has completed.
    pub fn probe_subnet(&self, subnet: &Subnet) -> FailureSet {
        debug!(
            "probing {} hosts in {} with {} threads",
            subnet.len(),
            subnet,
            self.pool_size
        );

        let pool =
            ThreadPool::with_name(format!("probe {}", subnet), self.pool_size);
        let (tx, rx) = mpsc::channel::<ProbeResult>();
        let mut pending: HashSet<u8> = HashSet::new();

        for host in subnet.hosts() {
            pending.insert(host.octet);

            let tx = tx.clone();
            let prober = Arc::clone(&self.prober);

            pool.execute(move || {
                let reachable = prober.probe(&host);
                // the receiver is alive until every sender is dropped
                let _ = tx.send(ProbeResult { host, reachable });
            });
        }

        // only the jobs hold senders now so the loop below ends once the
        // last probe completes
        drop(tx);

        let mut failed = FailureSet::new();

        for result in rx {
            pending.remove(&result.host.octet);

            if !result.reachable {
                failed.insert(result.host.octet);
            }
        }

        pool.join();

        if !pending.is_empty() {
            // a probe that panicked never reported back
            warn!(
                "{} probes in {} did not complete, recording as failed",
                pending.len(),
                subnet
            );
            failed.extend(pending);
        }

        debug!(
            "{} of {} hosts failed in {}",
            failed.len(),
            subnet.len(),
            subnet
        );

        failed
    }

    /// Probes both subnets at the same time and returns their failures in
    /// the same order
    pub fn probe_pair(
        &self,
        first: &Subnet,
        second: &Subnet,
    ) -> Result<(FailureSet, FailureSet)> {
        let self_clone = self.clone();
        let second = *second;

        let handle = thread::spawn(move || self_clone.probe_subnet(&second));

        let first_failed = self.probe_subnet(first);
        let second_failed = handle.join()?;

        Ok((first_failed, second_failed))
    }

    /// Probes both subnets and reconciles their failures
    pub fn sweep(&self, first: &Subnet, second: &Subnet) -> Result<Sweep> {
        let (first_failed, second_failed) = self.probe_pair(first, second)?;

        Ok(Sweep::new(
            SubnetFailures::new(*first, first_failed),
            SubnetFailures::new(*second, second_failed),
        ))
    }
}

#[cfg(test)]
#[path = "./prober_tests.rs"]
mod tests;
