//! Renders a [`Sweep`] for the terminal

use color_eyre::eyre::Result;
use itertools::Itertools;
use mpts_lib::reconcile::{FailureSet, Sweep};
use std::net::Ipv4Addr;

#[doc(hidden)]
fn address_list(addresses: &[Ipv4Addr]) -> String {
    let quoted = addresses.iter().map(|a| format!("'{}'", a)).join(", ");
    format!("[{}]", quoted)
}

#[doc(hidden)]
fn octet_list(octets: &FailureSet) -> String {
    format!("[{}]", octets.iter().join(", "))
}

/// Returns the text report, one entry per output line
pub fn lines(sweep: &Sweep) -> Vec<String> {
    let cidr1 = sweep.first.subnet;
    let cidr2 = sweep.second.subnet;

    if sweep.is_clean() {
        return vec![format!(
            "Both {} and {} are fully responding to ping requests.  No failures.",
            cidr1, cidr2
        )];
    }

    let rec = &sweep.reconciliation;

    vec![
        format!(
            "Failed ping requests in {}:  {}",
            cidr1,
            address_list(&sweep.first.failed_addresses)
        ),
        format!(
            "Failed ping requests in {}:  {}",
            cidr2,
            address_list(&sweep.second.failed_addresses)
        ),
        format!(
            "Final octets of failed ping requests in {}, but not {}:  {}",
            cidr1,
            cidr2,
            octet_list(&rec.only_first)
        ),
        format!(
            "Final octets of failed ping requests in {}, but not {}:  {}",
            cidr2,
            cidr1,
            octet_list(&rec.only_second)
        ),
        format!(
            "Final octets of failed ping requests in both {} and {}:  {}",
            cidr1,
            cidr2,
            octet_list(&rec.both)
        ),
    ]
}

/// Returns the report as pretty printed json
pub fn json(sweep: &Sweep) -> Result<String> {
    Ok(serde_json::to_string_pretty(sweep)?)
}

/// Prints the report to stdout
pub fn print(sweep: &Sweep, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", json(sweep)?);
    } else {
        for line in lines(sweep) {
            println!("{}", line);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "./report_tests.rs"]
mod tests;
