use mpts_lib::{reconcile::SubnetFailures, targets::subnet::Subnet};

use super::*;

fn sweep(first: &[u8], second: &[u8]) -> Sweep {
    let cidr1 = Subnet::new("192.168.1.0/24", None).unwrap();
    let cidr2 = Subnet::new("192.168.2.0/24", None).unwrap();

    Sweep::new(
        SubnetFailures::new(cidr1, first.iter().copied().collect()),
        SubnetFailures::new(cidr2, second.iter().copied().collect()),
    )
}

#[test]
fn renders_sample_failures() {
    let lines = lines(&sweep(&[87, 25, 67], &[43, 87, 175]));

    assert_eq!(
        lines,
        vec![
            "Failed ping requests in 192.168.1.0/24:  ['192.168.1.25', '192.168.1.67', '192.168.1.87']",
            "Failed ping requests in 192.168.2.0/24:  ['192.168.2.43', '192.168.2.87', '192.168.2.175']",
            "Final octets of failed ping requests in 192.168.1.0/24, but not 192.168.2.0/24:  [25, 67]",
            "Final octets of failed ping requests in 192.168.2.0/24, but not 192.168.1.0/24:  [43, 175]",
            "Final octets of failed ping requests in both 192.168.1.0/24 and 192.168.2.0/24:  [87]",
        ]
    );
}

#[test]
fn renders_empty_lists_when_one_side_is_clean() {
    let lines = lines(&sweep(&[9], &[]));

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[1],
        "Failed ping requests in 192.168.2.0/24:  []"
    );
    assert!(lines[2].ends_with(":  [9]"));
    assert!(lines[3].ends_with(":  []"));
    assert!(lines[4].ends_with(":  []"));
}

#[test]
fn renders_clean_sweep() {
    let lines = lines(&sweep(&[], &[]));

    assert_eq!(
        lines,
        vec![
            "Both 192.168.1.0/24 and 192.168.2.0/24 are fully responding to ping requests.  No failures."
        ]
    );
}

#[test]
fn renders_json() {
    let out = json(&sweep(&[25, 87], &[87])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["first"]["subnet"], "192.168.1.0/24");
    assert_eq!(value["second"]["failed_addresses"][0], "192.168.2.87");
    assert_eq!(value["reconciliation"]["only_first"][0], 25);
    assert_eq!(value["reconciliation"]["both"][0], 87);
}

#[test]
fn prints_reports() {
    let report = sweep(&[25], &[43]);
    print(&report, false).unwrap();
    print(&report, true).unwrap();
}
