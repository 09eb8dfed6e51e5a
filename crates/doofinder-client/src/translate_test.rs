use serde_json::json;

use super::*;

fn names(entries: &[(&str, &str)]) -> FilterNameMap {
    let entries = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    FilterNameMap::new(entries).expect("test map should be a bijection")
}

fn filters(entries: Vec<(&str, FilterValue)>) -> BTreeMap<String, FilterValue> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// ---------------------------------------------------------------------------
// Forward: caller filters -> provider filters
// ---------------------------------------------------------------------------

#[test]
fn price_range_emits_asymmetric_bounds_in_units() {
    let out = to_provider_filters(
        &filters(vec![(
            "price",
            FilterValue::Range {
                minimum: 1000,
                maximum: 5000,
            },
        )]),
        &FilterNameMap::default(),
    );
    assert_eq!(
        serde_json::Value::Object(out),
        json!({"price": {"gte": 10.0, "lt": 50.0}})
    );
}

#[test]
fn price_range_keeps_fractional_cents() {
    let out = to_provider_filters(
        &filters(vec![(
            "price",
            FilterValue::Range {
                minimum: 1050,
                maximum: 1099,
            },
        )]),
        &FilterNameMap::default(),
    );
    assert_eq!(
        serde_json::Value::Object(out),
        json!({"price": {"gte": 10.5, "lt": 10.99}})
    );
}

#[test]
fn mapped_multiselect_translates_to_provider_name() {
    let out = to_provider_filters(
        &filters(vec![(
            "marca",
            FilterValue::Multiselect {
                values: vec!["nike".to_string()],
            },
        )]),
        &names(&[("brand", "marca")]),
    );
    assert_eq!(
        serde_json::Value::Object(out),
        json!({"brand": ["nike"]})
    );
}

#[test]
fn unmapped_multiselect_passes_through_unchanged() {
    let out = to_provider_filters(
        &filters(vec![(
            "color",
            FilterValue::Multiselect {
                values: vec!["red".to_string(), "blue".to_string()],
            },
        )]),
        &names(&[("brand", "marca")]),
    );
    assert_eq!(
        serde_json::Value::Object(out),
        json!({"color": ["red", "blue"]})
    );
}

#[test]
fn non_price_range_is_dropped() {
    let out = to_provider_filters(
        &filters(vec![(
            "weight",
            FilterValue::Range {
                minimum: 100,
                maximum: 200,
            },
        )]),
        &FilterNameMap::default(),
    );
    assert!(out.is_empty(), "expected empty filters, got: {out:?}");
}

#[test]
fn empty_filters_translate_to_empty_object() {
    let out = to_provider_filters(&BTreeMap::new(), &FilterNameMap::default());
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[test]
fn sort_tokens_map_to_price_field() {
    assert_eq!(
        to_provider_sort(SortOrder::PriceDesc),
        Some(json!({"price": "desc"}))
    );
    assert_eq!(
        to_provider_sort(SortOrder::PriceAsc),
        Some(json!({"price": "asc"}))
    );
    assert_eq!(to_provider_sort(SortOrder::Unsorted), None);
}

// ---------------------------------------------------------------------------
// Reverse: provider facets -> filter descriptions
// ---------------------------------------------------------------------------

fn facets(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got: {other:?}"),
    }
}

fn price_facet() -> serde_json::Value {
    json!({
        "range": {
            "buckets": [{"stats": {"min": 3.5, "max": 149.991}}]
        }
    })
}

fn brand_facet() -> serde_json::Value {
    json!({
        "terms": {
            "buckets": [
                {"key": "nike", "doc_count": 12},
                {"key": "adidas", "doc_count": 3}
            ]
        }
    })
}

#[test]
fn range_facet_scales_min_down_and_max_up() {
    let descriptions = to_filter_descriptions(
        &facets(json!({"price": price_facet()})),
        &FilterNameMap::default(),
    )
    .unwrap();

    assert_eq!(descriptions.len(), 1);
    let price = &descriptions[0];
    assert_eq!(price.id, "price");
    assert_eq!(price.label, "price");
    assert_eq!(price.source, "doofinder");
    assert_eq!(price.kind, FilterKind::Range);
    assert_eq!(price.minimum, Some(350));
    // 149.991 * 100 = 14999.1, ceiled.
    assert_eq!(price.maximum, Some(15000));
    assert!(price.values.is_none());
}

#[test]
fn terms_facet_becomes_multiselect_with_hit_counts() {
    let descriptions = to_filter_descriptions(
        &facets(json!({"brand": brand_facet()})),
        &FilterNameMap::default(),
    )
    .unwrap();

    assert_eq!(descriptions.len(), 1);
    let brand = &descriptions[0];
    assert_eq!(brand.kind, FilterKind::Multiselect);
    assert_eq!(brand.minimum, None);
    assert_eq!(brand.maximum, None);
    assert_eq!(
        brand.values,
        Some(vec![
            FilterOption {
                id: "nike".to_string(),
                label: "nike".to_string(),
                hits: 12,
            },
            FilterOption {
                id: "adidas".to_string(),
                label: "adidas".to_string(),
                hits: 3,
            },
        ])
    );
}

#[test]
fn facet_label_uses_mapped_caller_name() {
    let descriptions = to_filter_descriptions(
        &facets(json!({"brand": brand_facet()})),
        &names(&[("brand", "marca")]),
    )
    .unwrap();

    assert_eq!(descriptions[0].id, "brand");
    assert_eq!(descriptions[0].label, "marca");
}

#[test]
fn grouping_count_facet_is_skipped() {
    let descriptions = to_filter_descriptions(
        &facets(json!({
            "grouping_count": {"terms": {"buckets": [{"key": "g", "doc_count": 1}]}},
            "brand": brand_facet()
        })),
        &FilterNameMap::default(),
    )
    .unwrap();

    assert_eq!(descriptions.len(), 1);
    assert_eq!(descriptions[0].id, "brand");
}

#[test]
fn empty_terms_facet_is_skipped() {
    let descriptions = to_filter_descriptions(
        &facets(json!({"brand": {"terms": {"buckets": []}}})),
        &FilterNameMap::default(),
    )
    .unwrap();
    assert!(descriptions.is_empty());
}

#[test]
fn facet_without_range_or_terms_is_a_bare_multiselect() {
    let descriptions = to_filter_descriptions(
        &facets(json!({"odd": {}})),
        &FilterNameMap::default(),
    )
    .unwrap();
    assert_eq!(descriptions.len(), 1);
    assert_eq!(descriptions[0].kind, FilterKind::Multiselect);
    assert!(descriptions[0].values.is_none());
}

#[test]
fn range_facet_without_buckets_is_malformed() {
    let result = to_filter_descriptions(
        &facets(json!({"price": {"range": {"buckets": []}}})),
        &FilterNameMap::default(),
    );
    assert!(
        matches!(result, Err(ClientError::MalformedFacet { ref facet, .. }) if facet == "price"),
        "expected MalformedFacet(price), got: {result:?}"
    );
}

#[test]
fn terms_bucket_without_doc_count_is_malformed() {
    let result = to_filter_descriptions(
        &facets(json!({"brand": {"terms": {"buckets": [{"key": "nike"}]}}})),
        &FilterNameMap::default(),
    );
    assert!(
        matches!(result, Err(ClientError::MalformedFacet { ref facet, .. }) if facet == "brand"),
        "expected MalformedFacet(brand), got: {result:?}"
    );
}

#[test]
fn translation_is_idempotent_for_an_unchanged_response() {
    let body = facets(json!({"price": price_facet(), "brand": brand_facet()}));
    let map = names(&[("brand", "marca")]);
    let first = to_filter_descriptions(&body, &map).unwrap();
    let second = to_filter_descriptions(&body, &map).unwrap();
    assert_eq!(first, second);
}
