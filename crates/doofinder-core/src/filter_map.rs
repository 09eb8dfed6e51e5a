use std::collections::BTreeMap;

use crate::config::ConfigError;

/// Bidirectional filter-name mapping between provider-side facet ids and
/// caller-facing filter ids.
///
/// The configured entries are keyed by provider name with the caller-facing
/// name as value. Both lookup directions are materialized once here so no
/// per-request flipping happens. Names absent from the map pass through
/// unchanged in either direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterNameMap {
    /// Provider name -> caller-facing name, as configured.
    forward: BTreeMap<String, String>,
    /// Caller-facing name -> provider name, derived.
    reverse: BTreeMap<String, String>,
}

impl FilterNameMap {
    /// Builds the map from configured entries (provider name -> caller name).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FilterMapCollision`] if two provider names map
    /// to the same caller name. The derived caller -> provider direction
    /// would silently lose an entry otherwise, so the map must be a bijection
    /// over its declared keys.
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut reverse = BTreeMap::new();
        for (provider_name, caller_name) in &entries {
            if reverse
                .insert(caller_name.clone(), provider_name.clone())
                .is_some()
            {
                return Err(ConfigError::FilterMapCollision {
                    caller_name: caller_name.clone(),
                });
            }
        }
        Ok(Self {
            forward: entries,
            reverse,
        })
    }

    /// Caller-facing name for a provider filter id; identity when unmapped.
    #[must_use]
    pub fn caller_label<'a>(&'a self, provider_name: &'a str) -> &'a str {
        self.forward
            .get(provider_name)
            .map_or(provider_name, String::as_str)
    }

    /// Provider-side name for a caller filter id; identity when unmapped.
    #[must_use]
    pub fn provider_name<'a>(&'a self, caller_name: &'a str) -> &'a str {
        self.reverse
            .get(caller_name)
            .map_or(caller_name, String::as_str)
    }

    /// Returns `true` if no names are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[cfg(test)]
#[path = "filter_map_test.rs"]
mod tests;
