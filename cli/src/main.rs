//! CLI for pinging every host of two /24 subnets and comparing the failures
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! mpts --help
//!
//! # ping 192.168.1.0/24 and 192.168.2.0/24
//! mpts
//!
//! # custom subnets, leaving out hosts ending in .42
//! mpts --cidr1 192.168.7.0/24 --cidr2 192.168.8.0/24 --skip 42
//! ```
use clap::Parser;
use color_eyre::eyre::Result;
use log::*;
use mpts_lib::{
    probe::{DEFAULT_PROBE_ATTEMPTS, Prober, ping::PingProber},
    prober::{DEFAULT_POOL_SIZE, ParallelProber},
    reconcile::Sweep,
    targets::subnet::{DEFAULT_CIDR1, DEFAULT_CIDR2, Subnet, parse_octet},
};
use std::sync::Arc;

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Concurrently pings two /24 subnets and reports which hosts failed
struct Args {
    /// First /24 subnet to ping
    #[arg(long, default_value = DEFAULT_CIDR1)]
    cidr1: String,

    /// Second /24 subnet to ping
    #[arg(long, default_value = DEFAULT_CIDR2)]
    cidr2: String,

    /// Final octet (0-255) to leave out of both subnets
    #[arg(long)]
    skip: Option<String>,

    /// Also leave out the network address (final octet 0)
    #[arg(long, default_value_t = false)]
    exclude_network: bool,

    /// Number of hosts pinged at the same time in each subnet
    #[arg(long, default_value_t = DEFAULT_POOL_SIZE)]
    threads: usize,

    /// Ping attempts per host before it is reported as failed
    #[arg(long, default_value_t = DEFAULT_PROBE_ATTEMPTS)]
    attempts: u8,

    /// Time to wait for a reply on each attempt, e.g. 500ms or 2s
    #[arg(long, default_value = "1s")]
    timeout: humantime::Duration,

    /// Output final report in json instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Only print final output nothing else
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from mpts-lib
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn print_args(args: &Args) {
    info!("configuration:");
    info!("cidr1:           {}", args.cidr1);
    info!("cidr2:           {}", args.cidr2);
    info!("skip:            {}", args.skip.as_deref().unwrap_or("none"));
    info!("exclude_network: {}", args.exclude_network);
    info!("threads:         {}", args.threads);
    info!("attempts:        {}", args.attempts);
    info!("timeout:         {}", args.timeout);
    info!("json:            {}", args.json);
    info!("quiet:           {}", args.quiet);
}

#[doc(hidden)]
fn parse_subnets(args: &Args) -> Result<(Subnet, Subnet)> {
    let skip = args.skip.as_deref().map(parse_octet).transpose()?;

    let mut first = Subnet::new(&args.cidr1, skip)?;
    let mut second = Subnet::new(&args.cidr2, skip)?;

    if args.exclude_network {
        first = first.excluding_network();
        second = second.excluding_network();
    }

    Ok((first, second))
}

#[doc(hidden)]
fn build_prober(args: &Args) -> Result<Arc<dyn Prober>> {
    let ping = PingProber::builder()
        .timeout(*args.timeout)
        .attempts(args.attempts)
        .build()?;

    Ok(Arc::new(ping))
}

#[doc(hidden)]
fn run(
    args: &Args,
    subnets: (Subnet, Subnet),
    prober: Arc<dyn Prober>,
) -> Result<Sweep> {
    let (first, second) = subnets;

    let parallel = ParallelProber::builder()
        .prober(prober)
        .pool_size(args.threads)
        .build()?;

    info!("pinging {} and {}...", first, second);

    let sweep = parallel.sweep(&first, &second)?;

    debug!("probing complete");

    Ok(sweep)
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    print_args(&args);

    // bad input must fail before any host is pinged
    let subnets = parse_subnets(&args)?;
    let prober = build_prober(&args)?;

    let sweep = run(&args, subnets, prober)?;

    report::print(&sweep, args.json)?;

    Ok(())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
