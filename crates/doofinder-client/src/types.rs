//! Doofinder API v5 response shapes.
//!
//! ## Observed behavior
//!
//! Search responses carry `total` and `results` at the top level and a
//! `facets` object when the engine has facets configured. `results` entries
//! are free-form JSON objects whose shape depends entirely on the indexed
//! feed, so they stay untyped here and the extraction rule imposes the only
//! structure. Engines have been seen returning `results: null` or omitting
//! the field on internal errors; both are handled as empty pages instead of
//! failing a whole window.
//!
//! Facet values come in two shapes: `range` (with `buckets[0].stats` carrying
//! fractional min/max) and `terms` (with `buckets[]` of key/doc_count). The
//! `grouping_count` facet is engine bookkeeping and never user-facing.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// One decoded page of a search response.
///
/// Decoding is deliberately lenient: a page is never rejected outright, it
/// just degrades to zero records so the window loop can continue.
#[derive(Debug)]
pub struct SearchPage {
    /// The provider's reported total for the query; 0 when absent.
    pub total: u64,
    /// Result records, or `None` when `results` is missing or not an array.
    /// Entries that are not JSON objects are dropped.
    pub records: Option<Vec<Value>>,
}

impl SearchPage {
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let total = body.get("total").and_then(Value::as_u64).unwrap_or(0);
        let records = body.get("results").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .cloned()
                .collect()
        });
        Self { total, records }
    }
}

/// One facet value from the `facets` object of a search response.
///
/// A facet may carry `range`, `terms`, or (rarely) both; range wins when
/// classifying the filter kind.
#[derive(Debug, Deserialize)]
pub(crate) struct FacetValue {
    #[serde(default)]
    pub range: Option<RangeFacet>,
    #[serde(default)]
    pub terms: Option<TermsFacet>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RangeFacet {
    pub buckets: Vec<RangeBucket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RangeBucket {
    pub stats: RangeStats,
}

/// Aggregated stats of a range facet, in the provider's fractional currency
/// units.
#[derive(Debug, Deserialize)]
pub(crate) struct RangeStats {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TermsFacet {
    pub buckets: Vec<TermsBucket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TermsBucket {
    pub key: String,
    pub doc_count: u64,
}

/// One term of a suggest response.
#[derive(Debug, Deserialize)]
pub struct SuggestTerm {
    pub term: String,
}

/// Pulls the suggestion terms out of a suggest response body.
///
/// A body without a `results` field (including non-object bodies from error
/// responses) yields an empty list rather than an error.
///
/// # Errors
///
/// Returns [`ClientError::Deserialize`] when `results` is present but its
/// entries do not carry a `term`.
pub(crate) fn suggest_terms(body: &Value) -> Result<Vec<String>, ClientError> {
    let Some(results) = body.get("results") else {
        return Ok(Vec::new());
    };
    let terms: Vec<SuggestTerm> =
        serde_json::from_value(results.clone()).map_err(|source| ClientError::Deserialize {
            context: "suggest results".to_string(),
            source,
        })?;
    Ok(terms.into_iter().map(|entry| entry.term).collect())
}
