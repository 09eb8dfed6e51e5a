use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid page window: offset {offset}, limit {limit}")]
    InvalidWindow { offset: u64, limit: u64 },

    #[error("malformed facet \"{facet}\": {reason}")]
    MalformedFacet { facet: String, reason: String },

    #[error("invalid request URI \"{uri}\": {reason}")]
    InvalidUri { uri: String, reason: String },
}
