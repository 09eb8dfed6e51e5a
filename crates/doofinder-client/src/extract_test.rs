use serde_json::json;

use super::*;

#[test]
fn plain_source_compiles_to_a_field_rule() {
    assert_eq!(IdRule::compile("sku"), IdRule::Field("sku".to_string()));
}

#[test]
fn dotted_source_compiles_to_a_path_rule() {
    assert!(matches!(
        IdRule::compile("attributes.group_id"),
        IdRule::Path(_)
    ));
}

#[test]
fn malformed_path_falls_back_to_a_literal_field_name() {
    // Two consecutive dots make an empty segment; the raw source is kept as
    // a flat field name instead.
    let rule = IdRule::compile("attributes..group_id");
    assert_eq!(rule, IdRule::Field("attributes..group_id".to_string()));

    let record = json!({"attributes..group_id": "A1"});
    assert_eq!(rule.extract(&record), Some(json!("A1")));
}

#[test]
fn field_rule_reads_a_flat_field() {
    let rule = IdRule::compile("sku");
    assert_eq!(rule.extract(&json!({"sku": "A1"})), Some(json!("A1")));
}

#[test]
fn field_rule_keeps_numeric_identifiers() {
    let rule = IdRule::compile("id");
    assert_eq!(rule.extract(&json!({"id": 6789})), Some(json!(6789)));
}

#[test]
fn field_rule_misses_absent_field() {
    let rule = IdRule::compile("sku");
    assert_eq!(rule.extract(&json!({"id": "A1"})), None);
}

#[test]
fn degenerate_scalars_count_as_missing() {
    for record in [
        json!({"sku": null}),
        json!({"sku": false}),
        json!({"sku": 0}),
        json!({"sku": 0.0}),
        json!({"sku": ""}),
    ] {
        let rule = IdRule::compile("sku");
        assert_eq!(rule.extract(&record), None, "record: {record}");
    }
}

#[test]
fn path_rule_walks_nested_objects() {
    let rule = IdRule::compile("attributes.group_id");
    let record = json!({"attributes": {"group_id": "G-7"}});
    assert_eq!(rule.extract(&record), Some(json!("G-7")));
}

#[test]
fn path_rule_indexes_into_arrays() {
    let rule = IdRule::compile("variants.0.sku");
    let record = json!({"variants": [{"sku": "V-1"}, {"sku": "V-2"}]});
    assert_eq!(rule.extract(&record), Some(json!("V-1")));
}

#[test]
fn path_rule_misses_when_a_segment_is_absent() {
    let rule = IdRule::compile("attributes.group_id");
    assert_eq!(rule.extract(&json!({"attributes": {}})), None);
    assert_eq!(rule.extract(&json!({"sku": "A1"})), None);
}

#[test]
fn path_rule_misses_when_indexing_a_non_array() {
    let rule = IdRule::compile("variants.0.sku");
    assert_eq!(rule.extract(&json!({"variants": {"sku": "A1"}})), None);
}

#[test]
fn empty_source_never_extracts() {
    let rule = IdRule::compile("");
    assert_eq!(rule, IdRule::Field(String::new()));
    assert_eq!(rule.extract(&json!({"id": "A1"})), None);
}
