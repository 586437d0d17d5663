//! Tests for Collection sequence behavior, filtering, and mapping

use fanout::util::testing;
use fanout::Collection;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq)]
struct Host {
    name: String,
    region: Option<String>,
    port: u16,
}

fn host(name: &str, region: Option<&str>, port: u16) -> Host {
    Host {
        name: name.to_string(),
        region: region.map(str::to_string),
        port,
    }
}

#[fixture]
fn hosts() -> Collection<Host> {
    testing::init_test_setup();
    Collection::from(vec![
        host("alpha", Some("eu-1"), 8080),
        host("beta", None, 9090),
        host("gamma", Some("us-2"), 80),
        host("delta", Some("eu-1"), 443),
    ])
}

// ============================================================
// Sequence Behavior Tests
// ============================================================

#[test]
fn given_seed_vector_when_constructing_then_order_and_length_are_preserved() {
    let seeded = Collection::from(vec![3, 1, 2]);

    assert_eq!(seeded.len(), 3);
    assert_eq!(seeded[0], 3);
    assert_eq!(seeded[1], 1);
    assert_eq!(seeded[2], 2);
}

#[test]
fn given_empty_collection_when_pushing_then_behaves_like_a_vector() {
    let mut coll = Collection::new();
    assert!(coll.is_empty());

    coll.push("cheddar");
    coll.push("gouda");

    assert_eq!(coll.len(), 2);
    assert_eq!(coll[1], "gouda");

    let upper: Vec<String> = coll.iter().map(|s| s.to_uppercase()).collect();
    assert_eq!(upper, vec!["CHEDDAR", "GOUDA"]);
}

#[test]
fn given_iterator_when_collecting_then_collection_is_built_in_order() {
    let coll: Collection<u16> = (1..=4).collect();

    assert_eq!(coll.len(), 4);
    assert_eq!(coll[0], 1);
    assert_eq!(coll[3], 4);
}

#[test]
fn given_collection_when_extending_then_new_elements_are_appended() {
    let mut coll = Collection::from(vec![1, 2]);
    coll.extend(vec![3, 4]);

    assert_eq!(coll.into_inner(), vec![1, 2, 3, 4]);
}

#[rstest]
fn given_collection_when_iterating_then_elements_come_back_in_order(hosts: Collection<Host>) {
    let names: Vec<&str> = hosts.iter().map(|h| h.name.as_str()).collect();

    assert_eq!(names, vec!["alpha", "beta", "gamma", "delta"]);
}

// ============================================================
// Filter Tests
// ============================================================

#[rstest]
fn given_predicate_when_filtering_then_survivors_keep_relative_order(hosts: Collection<Host>) {
    let low_ports = hosts.filter(|h| h.port < 9000);

    let names: Vec<&str> = low_ports.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "gamma", "delta"]);
}

#[rstest]
fn given_predicate_when_filtering_then_receiver_is_unchanged(hosts: Collection<Host>) {
    let _survivors = hosts.filter(|h| h.region.is_some());

    assert_eq!(hosts.len(), 4);
}

#[rstest]
fn given_two_predicates_when_filtering_twice_then_equals_filtering_by_conjunction(
    hosts: Collection<Host>,
) {
    let twice = hosts.filter(|h| h.region.is_some()).filter(|h| h.port < 9000);
    let once = hosts.filter(|h| h.region.is_some() && h.port < 9000);

    assert_eq!(twice, once);
}

#[rstest]
fn given_rejecting_predicate_when_filtering_then_result_is_empty(hosts: Collection<Host>) {
    let none = hosts.filter(|_| false);

    assert!(none.is_empty());
}

// ============================================================
// Apply Tests
// ============================================================

#[rstest]
fn given_function_when_applying_then_length_is_preserved(hosts: Collection<Host>) {
    let ports = hosts.apply(|h| u32::from(h.port) * 2);

    assert_eq!(ports.len(), hosts.len());
    assert_eq!(ports[0], 16160);
    assert_eq!(ports[2], 160);
}

#[rstest]
fn given_function_when_applying_then_result_is_element_wise(hosts: Collection<Host>) {
    let labels = hosts.apply(|h| format!("{}:{}", h.name, h.port));

    let expected: Vec<String> = hosts
        .iter()
        .map(|h| format!("{}:{}", h.name, h.port))
        .collect();
    assert_eq!(labels.into_inner(), expected);
}

// ============================================================
// Empty Collection Tests
// ============================================================

#[test]
fn given_empty_collection_when_filtering_and_applying_then_results_are_empty() {
    let empty: Collection<Host> = Collection::new();

    assert!(empty.filter(|_| true).is_empty());
    assert!(empty.apply(|h| h.port).is_empty());
    assert!(empty.project(|h| h.region.clone()).is_empty());
}
