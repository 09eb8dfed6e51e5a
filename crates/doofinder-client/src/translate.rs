//! Translation between the generic filter/sort model and provider syntax.
//!
//! The two directions are asymmetric on purpose: forward translation produces
//! the provider's filter query shapes, reverse translation reads facet
//! aggregations — different structures with different rules.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use doofinder_core::{
    FilterDescription, FilterKind, FilterNameMap, FilterOption, FilterValue, SortOrder,
};

use crate::error::ClientError;
use crate::types::FacetValue;

/// The one range filter the provider prices queries on.
pub const PRICE_FILTER: &str = "price";

/// Source tag stamped on every discovered filter.
pub const FILTER_SOURCE: &str = "doofinder";

/// Engine-internal facets that are never surfaced to callers.
const INTERNAL_FACETS: [&str; 1] = ["grouping_count"];

/// Translates caller filters into the provider's filter query object.
///
/// The distinguished `price` filter becomes a range with an inclusive lower
/// and an exclusive upper bound (`gte`/`lt` — the asymmetry is part of the
/// provider contract), converted from cents to fractional units. Multiselect
/// filters emit their value set under the provider-side name when one is
/// mapped, otherwise under the caller's id unchanged. Range values under any
/// other id have no provider representation and are dropped.
#[must_use]
pub fn to_provider_filters(
    filters: &BTreeMap<String, FilterValue>,
    names: &FilterNameMap,
) -> Map<String, Value> {
    let mut out = Map::new();
    for (id, value) in filters {
        match value {
            FilterValue::Range { minimum, maximum } if id == PRICE_FILTER => {
                out.insert(
                    id.clone(),
                    json!({
                        "gte": cents_to_units(*minimum),
                        "lt": cents_to_units(*maximum),
                    }),
                );
            }
            FilterValue::Range { .. } => {}
            FilterValue::Multiselect { values } => {
                out.insert(names.provider_name(id).to_owned(), json!(values));
            }
        }
    }
    out
}

/// Translates the sort token into the provider's sort spec; `Unsorted` emits
/// no sort parameter at all.
#[must_use]
pub fn to_provider_sort(sort: SortOrder) -> Option<Value> {
    match sort {
        SortOrder::PriceDesc => Some(json!({"price": "desc"})),
        SortOrder::PriceAsc => Some(json!({"price": "asc"})),
        SortOrder::Unsorted => None,
    }
}

/// Translates a provider facet object into generic filter descriptions.
///
/// Two facets are skipped by design: the engine-internal `grouping_count`,
/// and any terms facet with an empty bucket list (nothing to filter on).
/// Everything else must match the provider contract.
///
/// # Errors
///
/// Returns [`ClientError::MalformedFacet`] when a facet entry does not have
/// the expected sub-structure — a contract violation by the provider, not a
/// condition to paper over.
pub fn to_filter_descriptions(
    facets: &Map<String, Value>,
    names: &FilterNameMap,
) -> Result<Vec<FilterDescription>, ClientError> {
    let mut descriptions = Vec::new();

    for (id, raw) in facets {
        if INTERNAL_FACETS.contains(&id.as_str()) {
            continue;
        }

        let facet: FacetValue =
            serde_json::from_value(raw.clone()).map_err(|e| ClientError::MalformedFacet {
                facet: id.clone(),
                reason: e.to_string(),
            })?;

        if let Some(terms) = &facet.terms {
            if terms.buckets.is_empty() {
                continue;
            }
        }

        let (minimum, maximum) = match &facet.range {
            Some(range) => {
                let stats = &range
                    .buckets
                    .first()
                    .ok_or_else(|| ClientError::MalformedFacet {
                        facet: id.clone(),
                        reason: "range facet has no buckets".to_string(),
                    })?
                    .stats;
                (Some(floor_cents(stats.min)), Some(ceil_cents(stats.max)))
            }
            None => (None, None),
        };

        let values = facet.terms.as_ref().map(|terms| {
            terms
                .buckets
                .iter()
                .map(|bucket| FilterOption {
                    id: bucket.key.clone(),
                    label: bucket.key.clone(),
                    hits: bucket.doc_count,
                })
                .collect()
        });

        let kind = if facet.range.is_some() {
            FilterKind::Range
        } else {
            FilterKind::Multiselect
        };

        descriptions.push(FilterDescription {
            id: id.clone(),
            label: names.caller_label(id).to_owned(),
            source: FILTER_SOURCE.to_string(),
            kind,
            minimum,
            maximum,
            values,
        });
    }

    Ok(descriptions)
}

/// Cents-as-integer to the provider's fractional units.
#[allow(clippy::cast_precision_loss)]
fn cents_to_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Fractional units back to cents, floored (range lower bound).
#[allow(clippy::cast_possible_truncation)]
fn floor_cents(units: f64) -> i64 {
    (units * 100.0).floor() as i64
}

/// Fractional units back to cents, ceiled (range upper bound).
#[allow(clippy::cast_possible_truncation)]
fn ceil_cents(units: f64) -> i64 {
    (units * 100.0).ceil() as i64
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
