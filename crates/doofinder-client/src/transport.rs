//! HTTP transport seam for provider requests.
//!
//! The client core only describes a request ([`ProviderRequest`]) and consumes
//! a status/body pair ([`ProviderResponse`]); how the bytes move is behind the
//! [`Transport`] trait. The bundled [`HttpTransport`] speaks HTTP via reqwest
//! and serializes nested params in the provider's `qs`-style bracket notation
//! (`filter[price][gte]=10`, `filter[brand][0]=nike`).

use std::time::Duration;

use reqwest::Url;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// One provider request: absolute URI, structured query params, auth token.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub uri: String,
    /// Query parameters before flattening. Nested objects and arrays are
    /// flattened to bracket notation by the transport.
    pub params: Map<String, Value>,
    /// Value of the `Authorization` header.
    pub auth_key: String,
}

/// Status and decoded body of a provider response.
///
/// Bodies are JSON whenever the provider sends JSON. Error responses that are
/// not JSON are carried as a JSON string so the caller still sees them.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: Value,
}

/// Moves one [`ProviderRequest`] to the provider and returns its response.
///
/// Timeouts and connection management belong to implementations; the client
/// core never retries and treats every error from here as fatal for the call.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] for network-level failures and
    /// [`ClientError::Deserialize`] when a success response is not JSON.
    async fn send(&self, request: &ProviderRequest) -> Result<ProviderResponse, ClientError>;
}

/// reqwest-backed [`Transport`] with configured timeout and user agent.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ProviderRequest) -> Result<ProviderResponse, ClientError> {
        let url = build_request_url(&request.uri, &request.params)?;

        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &request.auth_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            // Error bodies are passed through verbatim even when they are not
            // JSON (HTML error pages, load-balancer text), so the permissive
            // status-handling upstream still has something to hand back.
            Err(_) if status >= 400 => Value::String(text),
            Err(source) => {
                return Err(ClientError::Deserialize {
                    context: request.uri.clone(),
                    source,
                })
            }
        };

        Ok(ProviderResponse { status, body })
    }
}

/// Builds the full request URL with flattened, percent-encoded query params.
fn build_request_url(uri: &str, params: &Map<String, Value>) -> Result<Url, ClientError> {
    let mut url = Url::parse(uri).map_err(|e| ClientError::InvalidUri {
        uri: uri.to_owned(),
        reason: e.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in flatten_params(params) {
            pairs.append_pair(&key, &value);
        }
    }
    Ok(url)
}

/// Flattens structured params into `qs`-style bracket pairs.
///
/// Objects nest as `key[sub]`, arrays as `key[0]`, `key[1]`, ... Nulls are
/// dropped entirely, matching how the provider's own clients serialize
/// undefined values.
pub(crate) fn flatten_params(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_value(key, value, &mut pairs);
    }
    pairs
}

fn flatten_value(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                flatten_value(&format!("{key}[{sub_key}]"), sub_value, out);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(&format!("{key}[{index}]"), item, out);
            }
        }
        Value::Null => {}
        Value::String(s) => out.push((key.to_owned(), s.clone())),
        Value::Number(n) => out.push((key.to_owned(), format_number(n))),
        Value::Bool(b) => out.push((key.to_owned(), b.to_string())),
    }
}

/// Formats a JSON number the way the provider expects: whole floats without
/// the trailing `.0` (a 10.00 EUR bound serializes as `10`, not `10.0`).
fn format_number(n: &serde_json::Number) -> String {
    if let Some(f) = n.as_f64() {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
            #[allow(clippy::cast_possible_truncation)]
            return format!("{}", f as i64);
        }
    }
    n.to_string()
}
