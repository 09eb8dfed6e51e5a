//! Caller-facing search model, shared between the adapter and its consumers.
//!
//! These types use the camelCase wire names of the surrounding pipeline, so a
//! serialized [`SearchResult`] is directly consumable by the storefront layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A generic product search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_phrase: String,
    /// Caller filter id -> filter value. Ids are caller-facing names; the
    /// adapter translates them to provider names where a mapping exists.
    #[serde(default)]
    pub filters: BTreeMap<String, FilterValue>,
    /// Global result offset, independent of the provider's page size.
    #[serde(default)]
    pub offset: u64,
    /// Number of results wanted. Must be at least 1.
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub sort: SortOrder,
}

/// Default for [`SearchRequest::limit`] when the field is absent.
fn default_limit() -> u64 {
    10
}

/// Value of one caller-side filter.
///
/// Ranges carry cents-as-integer bounds; multiselects carry the selected
/// option ids. The untagged representation matches the pipeline's wire shape
/// (`{"minimum": ..., "maximum": ...}` vs `{"values": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Range { minimum: i64, maximum: i64 },
    Multiselect { values: Vec<String> },
}

/// Closed set of supported sort orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Unsorted,
    PriceAsc,
    PriceDesc,
}

/// Outcome of a windowed product search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Canonical product identifiers in result order, duplicates preserved.
    /// Identifiers are opaque JSON scalars; deployments key them as strings
    /// or numbers depending on the indexed feed.
    pub product_ids: Vec<serde_json::Value>,
    /// The provider's total for the query, as reported by the last fetched
    /// page. May be approximate if the provider's totals drift between pages.
    pub total_product_count: u64,
}

/// Kind of a discoverable filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Range,
    Multiselect,
}

/// One selectable value of a multiselect filter, with its hit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub hits: u64,
}

/// Description of one filter available for a query, derived from provider
/// facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescription {
    /// Provider-side filter id, usable directly in a follow-up request.
    pub id: String,
    /// Caller-facing display name (the mapped name when one is configured).
    pub label: String,
    /// Originating search source tag; always `"doofinder"` for this adapter.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    /// Range lower bound in cents, floored. Only set for range filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Range upper bound in cents, ceiled. Only set for range filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<FilterOption>>,
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
