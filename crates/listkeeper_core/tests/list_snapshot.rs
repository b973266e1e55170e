use listkeeper_core::{ListKeeper, NamedList};

#[test]
fn snapshot_copies_lists_sorted_by_name() {
    let mut keeper = ListKeeper::new();
    keeper.add("zeta", vec![3.0]).unwrap();
    keeper.add("alpha", vec![2.0, 1.0]).unwrap();

    let snapshot = keeper.snapshot();
    let names: Vec<&str> = snapshot.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, vec!["Liste", "alpha", "zeta"]);
    assert_eq!(snapshot[1], NamedList::new("alpha", vec![2.0, 1.0]));
}

#[test]
fn snapshot_is_detached_from_store() {
    let mut keeper = ListKeeper::new();
    let mut snapshot = keeper.snapshot();

    snapshot[0].values.clear();
    keeper.append("Liste", 6.0).unwrap();

    assert!(snapshot[0].values.is_empty());
    assert_eq!(keeper.get("Liste").unwrap().len(), 6);
}

#[test]
fn snapshot_serializes_with_expected_fields() {
    let keeper = ListKeeper::new();

    let json = serde_json::to_value(keeper.snapshot()).unwrap();
    assert_eq!(json[0]["name"], "Liste");
    assert_eq!(json[0]["values"], serde_json::json!([1.0, 2.0, 3.0, 4.0, 5.0]));

    let decoded: Vec<NamedList> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, keeper.snapshot());
}

#[test]
fn snapshot_of_empty_store_is_empty() {
    let mut keeper = ListKeeper::new();
    keeper.delete("Liste").unwrap();

    assert!(keeper.snapshot().is_empty());
    assert_eq!(serde_json::to_string(&keeper.snapshot()).unwrap(), "[]");
}
