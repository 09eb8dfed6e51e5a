use crate::filter_map::FilterNameMap;

/// Connection and translation settings for one Doofinder search engine.
///
/// Built once (usually by [`crate::config::load_provider_config`]) and shared
/// read-only with the client for its whole lifetime.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Doofinder zone identifier, e.g. `"eu1"`. Used to derive the base URI.
    pub zone: String,
    /// Hash id of the search engine; sent as `hashid` with every request.
    pub hash_id: String,
    /// Authorization token for the search API.
    pub auth_key: String,
    /// Overrides the zone-derived base URI. Intended for test servers.
    pub base_uri: Option<String>,
    /// Provider-name <-> caller-name mapping for filter ids.
    pub filter_map: FilterNameMap,
    /// Rule source for extracting the canonical product id from a result
    /// record: a plain field name, or a dotted access path.
    pub product_id_key: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl ProviderConfig {
    /// Base URI for all provider requests: the configured override, or the
    /// zone-derived default. Always ends with a slash so endpoint names can
    /// be appended directly.
    #[must_use]
    pub fn resolved_base_uri(&self) -> String {
        match &self.base_uri {
            Some(uri) => format!("{}/", uri.trim_end_matches('/')),
            None => format!("https://{}-search.doofinder.com/5/", self.zone),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("zone", &self.zone)
            .field("hash_id", &self.hash_id)
            .field("auth_key", &"[redacted]")
            .field("base_uri", &self.base_uri)
            .field("filter_map", &self.filter_map)
            .field("product_id_key", &self.product_id_key)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
