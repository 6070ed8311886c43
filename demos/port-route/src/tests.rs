use std::io::Cursor;

use pn_core::NodeId;
use pn_facility::{FacilitySet, load_facilities_reader};

use super::{WORLD_PORTS_CSV, node, prompt, report, run_query};

fn world() -> FacilitySet {
    load_facilities_reader(WORLD_PORTS_CSV.as_bytes()).unwrap()
}

fn render(set: &FacilitySet, from: u32, to: u32) -> String {
    let mut out = Vec::new();
    run_query(&mut out, set, NodeId(from), NodeId(to)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn bundled_table_has_fifty_ports() {
    let set = world();
    assert_eq!(set.len(), 50);
    assert_eq!(set.name(NodeId(49)), Some("Port of Paradip, Odisha, India"));
}

#[test]
fn shanghai_to_singapore_report() {
    let text = render(&world(), 0, 1);
    assert!(text.contains("Target Port: Port of Singapore, Singapore"));
    assert!(text.contains(
        "Shortest distance between Port of Shanghai, China and Port of Singapore, Singapore: 3805.74 kilometers"
    ));
    assert!(text.contains(
        "Port of Singapore, Singapore (3805.74 km) <- Port of Shanghai, China\n"
    ));
    assert!(text.contains("Source Port Cargo Capacity: 347.06 million metric tons"));
    assert!(text.contains("Target Port Container Capacity: 36.60 million TEUs"));
}

#[test]
fn missing_capacity_prints_na() {
    let text = render(&world(), 0, 49);
    assert!(text.contains("Target Port Cargo Capacity: n/a"));
    assert!(text.contains("Target Port Container Capacity: n/a"));
}

#[test]
fn same_port_short_circuits() {
    let text = render(&world(), 5, 5);
    assert_eq!(text, "Source and target ports are the same: Port of Busan, South Korea\n");
}

#[test]
fn list_is_numbered() {
    let mut out = Vec::new();
    report::write_list(&mut out, &world()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("List of ports:\n0: Port of Shanghai, China\n"));
    assert!(text.ends_with("49: Port of Paradip, Odisha, India\n"));
}

#[test]
fn out_of_range_index_is_rejected() {
    let set = world();
    assert!(node(&set, 49).is_ok());
    let err = node(&set, 50).unwrap_err();
    assert!(err.to_string().contains("out of range (0 to 49)"));
}

#[test]
fn prompt_reads_an_index() {
    let set = world();
    let mut out = Vec::new();
    let mut input = Cursor::new("  7\n");
    let id = prompt(&mut out, &mut input, &set, "source").unwrap();
    assert_eq!(id, NodeId(7));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Enter the source port index (0 to 49): "
    );
}

#[test]
fn prompt_rejects_garbage_and_eof() {
    let set = world();
    let mut out = Vec::new();
    assert!(prompt(&mut out, &mut Cursor::new("rotterdam\n"), &set, "target").is_err());
    assert!(prompt(&mut out, &mut Cursor::new(""), &set, "target").is_err());
}
