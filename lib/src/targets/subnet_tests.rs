use std::collections::HashSet;

use super::*;

#[test]
fn enumerates_every_host() {
    let subnet = Subnet::new("192.168.1.0/24", None).unwrap();
    let hosts: Vec<HostAddress> = subnet.hosts().collect();

    assert_eq!(hosts.len(), 256);
    assert_eq!(subnet.len(), 256);

    for (idx, host) in hosts.iter().enumerate() {
        assert_eq!(host.octet as usize, idx);
        assert_eq!(host.ip, net::Ipv4Addr::new(192, 168, 1, host.octet));
    }
}

#[test]
fn skips_octet() {
    let subnet = Subnet::new("192.168.1.0/24", Some(72)).unwrap();
    let octets: HashSet<u8> = subnet.hosts().map(|h| h.octet).collect();

    assert_eq!(subnet.len(), 255);
    assert_eq!(octets.len(), 255);
    assert!(!octets.contains(&72));
    assert!(subnet.hosts().all(|h| !h.ip.to_string().ends_with(".72")));
}

#[test]
fn skips_first_and_last_octets() {
    let first = Subnet::new("10.0.0.0/24", Some(0)).unwrap();
    let last = Subnet::new("10.0.0.0/24", Some(255)).unwrap();

    assert_eq!(first.hosts().next().unwrap().octet, 1);
    assert_eq!(last.hosts().last().unwrap().octet, 254);
    assert_eq!(first.len(), 255);
    assert_eq!(last.len(), 255);
}

#[test]
fn excludes_network_octet() {
    let subnet = Subnet::new("192.168.1.0/24", None)
        .unwrap()
        .excluding_network();

    assert_eq!(subnet.len(), 255);
    assert_eq!(subnet.hosts().next().unwrap().octet, 1);

    let skipped = Subnet::new("192.168.1.0/24", Some(42))
        .unwrap()
        .excluding_network();

    assert_eq!(skipped.len(), 254);
}

#[test]
fn hosts_are_restartable() {
    let subnet = Subnet::new("172.16.4.0/24", Some(3)).unwrap();
    let hosts = subnet.hosts();

    let first: Vec<HostAddress> = hosts.clone().collect();
    let second: Vec<HostAddress> = hosts.collect();
    let third: Vec<HostAddress> = subnet.hosts().collect();

    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn exposes_prefix_and_addresses() {
    let subnet = Subnet::new("192.168.7.0/24", None).unwrap();

    assert_eq!(subnet.prefix(), [192, 168, 7]);
    assert_eq!(subnet.address(25), net::Ipv4Addr::new(192, 168, 7, 25));
    assert_eq!(subnet.skip(), None);
    assert!(!subnet.is_empty());
}

#[test]
fn displays_as_cidr() {
    let subnet: Subnet = "192.168.2.0/24".parse().unwrap();
    assert_eq!(subnet.to_string(), "192.168.2.0/24");
    assert_eq!(
        serde_json::to_string(&subnet).unwrap(),
        "\"192.168.2.0/24\""
    );
}

#[test]
fn returns_error_for_wrong_prefix_len() {
    let result = Subnet::new("192.168.1.0/25", None);
    assert!(matches!(result, Err(MptsError::InvalidSubnet { .. })));

    let result = Subnet::new("192.168.0.0/16", None);
    assert!(matches!(result, Err(MptsError::InvalidSubnet { .. })));
}

#[test]
fn returns_error_for_host_bits() {
    let result = Subnet::new("192.168.1.5/24", None);
    assert!(matches!(result, Err(MptsError::InvalidSubnet { .. })));
}

#[test]
fn returns_error_for_malformed_cidr() {
    for cidr in ["nope", "192.168.1.0", "192.168.1/24", "no/pe", ""] {
        let result = Subnet::new(cidr, None);
        assert!(
            matches!(result, Err(MptsError::InvalidSubnet { .. })),
            "expected {:?} to be rejected",
            cidr
        );
    }
}

#[test]
fn parses_octets() {
    assert_eq!(parse_octet("0").unwrap(), 0);
    assert_eq!(parse_octet("72").unwrap(), 72);
    assert_eq!(parse_octet(" 255 ").unwrap(), 255);
}

#[test]
fn returns_error_for_invalid_octets() {
    for octet in ["256", "-1", "seven", ""] {
        let result = parse_octet(octet);
        assert!(
            matches!(result, Err(MptsError::InvalidSubnet { .. })),
            "expected {:?} to be rejected",
            octet
        );
    }
}
