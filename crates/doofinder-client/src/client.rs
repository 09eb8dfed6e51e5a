//! The search facade: orchestrates translation, page windowing, and id
//! extraction over the transport.

use serde_json::{Map, Value};

use doofinder_core::{FilterDescription, FilterNameMap, ProviderConfig, SearchRequest, SearchResult};

use crate::error::ClientError;
use crate::extract::IdRule;
use crate::pagination::{PageWindow, MAX_RESULTS_PER_PAGE};
use crate::translate;
use crate::transport::{HttpTransport, ProviderRequest, ProviderResponse, Transport};
use crate::types::{self, SearchPage};

const SEARCH_ENDPOINT: &str = "search";
const SUGGEST_ENDPOINT: &str = "suggest";

/// The suggest endpoint rejects longer phrases.
const MAX_SUGGEST_QUERY_CHARS: usize = 88;

/// Client for one Doofinder search engine.
///
/// Holds only immutable, construction-time state (base URI, credentials,
/// filter name map, compiled id rule), so concurrent calls on one instance
/// are safe. Pages inside a single search are fetched sequentially; see
/// [`Client::search`].
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    base_uri: String,
    hash_id: String,
    auth_key: String,
    filter_names: FilterNameMap,
    id_rule: IdRule,
}

impl Client<HttpTransport> {
    /// Creates a client backed by the bundled reqwest transport, configured
    /// with the request timeout and user agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config.request_timeout_secs, &config.user_agent)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over an arbitrary transport implementation.
    ///
    /// The id rule compiles here, once; a malformed rule degrades to a
    /// literal field name (see [`IdRule::compile`]) rather than failing
    /// construction.
    pub fn with_transport(config: &ProviderConfig, transport: T) -> Self {
        Self {
            transport,
            base_uri: config.resolved_base_uri(),
            hash_id: config.hash_id.clone(),
            auth_key: config.auth_key.clone(),
            filter_names: config.filter_map.clone(),
            id_rule: IdRule::compile(&config.product_id_key),
        }
    }

    /// Runs a windowed product search and returns the extracted product ids
    /// plus the provider's total for the query.
    ///
    /// The offset/limit window is served by fetching provider pages one at a
    /// time in ascending order. Sequential fetching is load-bearing: the
    /// reported total comes from the last response, and results must append
    /// in page order before the window is cut out. A page whose `results`
    /// field is missing or not an array is logged and counted as empty;
    /// records without a usable id are logged and dropped.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidWindow`] when `request.limit` is 0.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] from the
    ///   transport.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, ClientError> {
        let filters = translate::to_provider_filters(&request.filters, &self.filter_names);
        let sort = translate::to_provider_sort(request.sort);
        let window = PageWindow::compute(request.offset, request.limit, MAX_RESULTS_PER_PAGE)?;

        let mut records: Vec<Value> = Vec::new();
        let mut total_product_count = 0;

        for page in window.first_page..=window.last_page {
            let mut params = Map::new();
            params.insert("query".to_string(), Value::String(request.search_phrase.clone()));
            params.insert("rpp".to_string(), Value::from(window.rpp));
            params.insert("page".to_string(), Value::from(page));
            if !filters.is_empty() {
                params.insert("filter".to_string(), Value::Object(filters.clone()));
            }
            if let Some(sort) = &sort {
                params.insert("sort".to_string(), sort.clone());
            }

            let body = self.request(params, SEARCH_ENDPOINT).await?;
            let page_body = SearchPage::from_body(&body);
            total_product_count = page_body.total;

            match page_body.records {
                Some(items) => records.extend(items),
                None => tracing::error!(
                    page,
                    query = request.search_phrase.as_str(),
                    body = %body,
                    "missing results array in search response; treating page as empty"
                ),
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let (skip, take) = (window.skip as usize, request.limit as usize);

        let mut product_ids = Vec::new();
        for record in records.into_iter().skip(skip).take(take) {
            match self.id_rule.extract(&record) {
                Some(id) => product_ids.push(id),
                None => tracing::error!(
                    search_phrase = request.search_phrase.as_str(),
                    filters = ?request.filters,
                    offset = request.offset,
                    limit = request.limit,
                    sort = ?request.sort,
                    record = %record,
                    "result record has no usable product id; dropping it"
                ),
            }
        }

        Ok(SearchResult {
            product_ids,
            total_product_count,
        })
    }

    /// Discovers the filters available for a query by reading the facets of
    /// a single (unpaginated) search response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::MalformedFacet`] when the response has no facets
    ///   object or a facet entry violates the provider contract.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] from the
    ///   transport.
    pub async fn filters(&self, query: &str) -> Result<Vec<FilterDescription>, ClientError> {
        let mut params = Map::new();
        params.insert("query".to_string(), Value::String(query.to_string()));

        let body = self.request(params, SEARCH_ENDPOINT).await?;
        let facets = body
            .get("facets")
            .and_then(Value::as_object)
            .ok_or_else(|| ClientError::MalformedFacet {
                facet: "facets".to_string(),
                reason: "response has no facets object".to_string(),
            })?;

        translate::to_filter_descriptions(facets, &self.filter_names)
    }

    /// Fetches query suggestions, capitalizing the first letter of each
    /// returned term. A response without results yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Deserialize`] when the provider returns result
    ///   entries without a term.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] from the
    ///   transport.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ClientError> {
        let truncated: String = query.chars().take(MAX_SUGGEST_QUERY_CHARS).collect();
        let mut params = Map::new();
        params.insert("query".to_string(), Value::String(truncated));

        let body = self.request(params, SUGGEST_ENDPOINT).await?;
        let terms = types::suggest_terms(&body)?;
        Ok(terms.iter().map(|term| capitalize_first(term)).collect())
    }

    /// Issues one provider request: `base_uri + endpoint`, with `hashid`
    /// merged into the params and the configured auth key.
    ///
    /// A status ≥ 400 is logged with full context but the body is still
    /// returned as-is — downstream decides whether to reject, so a degraded
    /// provider keeps the storefront up instead of failing every call here.
    ///
    /// # Errors
    ///
    /// Only transport-level failures surface; see [`Transport::send`].
    async fn request(
        &self,
        params: Map<String, Value>,
        endpoint: &str,
    ) -> Result<Value, ClientError> {
        let uri = format!("{}{}", self.base_uri, endpoint);

        let mut merged = Map::new();
        merged.insert("hashid".to_string(), Value::String(self.hash_id.clone()));
        merged.extend(params);

        let ProviderResponse { status, body } = self
            .transport
            .send(&ProviderRequest {
                uri,
                params: merged,
                auth_key: self.auth_key.clone(),
            })
            .await?;

        if status >= 400 {
            tracing::error!(
                status,
                endpoint,
                body = %body,
                "error status in provider response"
            );
        }

        Ok(body)
    }
}

/// Uppercases the first character of a term, leaving the rest untouched.
fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
