use std::sync::Arc;

use mpts_lib::{
    probe::{Prober, ping::PingProber},
    prober::ParallelProber,
    targets::subnet::{DEFAULT_CIDR1, DEFAULT_CIDR2, Subnet},
};

fn main() {
    let first = Subnet::new(DEFAULT_CIDR1, None).expect("invalid first subnet");
    let second =
        Subnet::new(DEFAULT_CIDR2, None).expect("invalid second subnet");

    let ping: Arc<dyn Prober> = Arc::new(PingProber::default());

    let parallel = ParallelProber::builder()
        .prober(ping)
        .build()
        .expect("failed to build parallel prober");

    let sweep = parallel
        .sweep(&first, &second)
        .expect("failed to probe subnets");

    println!("failed in {}: {:?}", first, sweep.first.failed_addresses);
    println!("failed in {}: {:?}", second, sweep.second.failed_addresses);
    println!(
        "failed in {} only: {:?}",
        first,
        sweep.reconciliation.only_first.to_sorted_vec()
    );
    println!(
        "failed in {} only: {:?}",
        second,
        sweep.reconciliation.only_second.to_sorted_vec()
    );
    println!(
        "failed in both: {:?}",
        sweep.reconciliation.both.to_sorted_vec()
    );
}
