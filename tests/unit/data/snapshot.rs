use super::*;

fn two_sections() -> Snapshot<&'static str, u32> {
    let mut s = Snapshot::new();
    s.append_sections(["first", "second"]).unwrap();
    s.append_items(0..3, Some(&"first")).unwrap();
    s.append_items(10..12, None).unwrap();
    s
}

#[test]
fn append_and_query() {
    let s = two_sections();
    assert_eq!(s.number_of_sections(), 2);
    assert_eq!(s.number_of_items(), 5);
    assert_eq!(s.items_in_section(&"first"), Some(&[0, 1, 2][..]));
    assert_eq!(s.items_in_section(&"second"), Some(&[10, 11][..]));
    assert_eq!(s.items_in_section(&"third"), None);
    assert_eq!(
        s.section_identifiers().copied().collect::<Vec<_>>(),
        vec!["first", "second"]
    );
    assert_eq!(
        s.item_identifiers().copied().collect::<Vec<_>>(),
        vec![0, 1, 2, 10, 11]
    );
    assert_eq!(s.index_path_of(&11), Some(IndexPath::new(1, 1)));
    assert_eq!(s.item_at(IndexPath::new(0, 2)), Some(&2));
    assert_eq!(s.item_at(IndexPath::new(2, 0)), None);
    assert_eq!(s.section_of_item(&10), Some(&"second"));
}

#[test]
fn duplicates_fail_at_the_offending_call() {
    let mut s = two_sections();
    let err = s.append_items([3, 1], None).unwrap_err();
    assert!(matches!(err, MosaicError::Snapshot(_)));
    assert!(err.to_string().contains("duplicate item identifier 1"));
    // nothing from the failed call was applied.
    assert!(!s.contains_item(&3));

    assert!(s.append_items([20, 20], None).is_err());
    assert!(s.append_sections(["second"]).is_err());
    assert!(s.append_sections(["x", "x"]).is_err());
    assert_eq!(s.number_of_sections(), 2);
}

#[test]
fn append_items_requires_a_section() {
    let mut s: Snapshot<u8, u8> = Snapshot::new();
    assert!(s.append_items([1], None).is_err());
    assert!(s.append_items([1], Some(&0)).is_err());
}

#[test]
fn insert_relative_to_existing_items() {
    let mut s = two_sections();
    s.insert_items_before([7, 8], &1).unwrap();
    s.insert_items_after([9], &11).unwrap();
    assert_eq!(s.items_in_section(&"first"), Some(&[0, 7, 8, 1, 2][..]));
    assert_eq!(s.items_in_section(&"second"), Some(&[10, 11, 9][..]));
    assert_eq!(s.section_of_item(&9), Some(&"second"));
    assert!(s.insert_items_after([50], &99).is_err());
}

#[test]
fn delete_items_and_sections() {
    let mut s = two_sections();
    s.delete_items(&[1]).unwrap();
    assert_eq!(s.items_in_section(&"first"), Some(&[0, 2][..]));
    assert!(s.delete_items(&[1]).is_err());

    s.delete_sections(&["first"]).unwrap();
    assert_eq!(s.number_of_sections(), 1);
    assert_eq!(s.number_of_items(), 2);
    assert_eq!(s.index_path_of(&10), Some(IndexPath::new(0, 0)));
    assert!(!s.contains_item(&0));
    // identifiers of deleted items may be reused.
    s.append_items([0], None).unwrap();
}

#[test]
fn move_items_across_sections() {
    let mut s = two_sections();
    s.move_item_after(&0, &2).unwrap();
    assert_eq!(s.items_in_section(&"first"), Some(&[1, 2, 0][..]));

    s.move_item_before(&2, &10).unwrap();
    assert_eq!(s.items_in_section(&"first"), Some(&[1, 0][..]));
    assert_eq!(s.items_in_section(&"second"), Some(&[2, 10, 11][..]));
    assert_eq!(s.section_of_item(&2), Some(&"second"));

    assert!(s.move_item_after(&2, &2).is_err());
    assert!(s.move_item_after(&2, &42).is_err());
}

#[test]
fn reloads_are_recorded_once_and_follow_deletes() {
    let mut s = two_sections();
    s.reload_items(&[2, 10, 2]).unwrap();
    assert_eq!(s.reloaded_items(), &[2, 10]);
    assert!(s.reload_items(&[99]).is_err());

    s.delete_items(&[10]).unwrap();
    assert_eq!(s.reloaded_items(), &[2]);
}

#[test]
fn equality_compares_order() {
    let a = two_sections();
    let mut b = two_sections();
    assert_eq!(a, b);
    b.move_item_before(&2, &0).unwrap();
    assert_ne!(a, b);
}

#[test]
fn index_paths_agree_with_single_lookups() {
    let s = two_sections();
    let paths = s.index_paths();
    assert_eq!(paths.len(), s.number_of_items());
    for item in s.item_identifiers() {
        assert_eq!(paths.get(item).copied(), s.index_path_of(item));
    }
    assert_eq!(paths[&10], IndexPath::new(1, 0));
}
