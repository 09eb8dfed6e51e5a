//! Client adapter for the Doofinder search API (v5).
//!
//! Sits between the application's generic product-search model
//! ([`doofinder_core::SearchRequest`] / [`doofinder_core::SearchResult`]) and
//! Doofinder's page-based query contract:
//!
//! - windows arbitrary offset/limit requests over the provider's fixed-size
//!   pages ([`pagination`]),
//! - translates filters and sorts to provider syntax and facet responses back
//!   to generic filter descriptions ([`translate`]),
//! - extracts canonical product identifiers from shape-varying result records
//!   via a configured rule ([`extract`]).
//!
//! HTTP traffic goes through the [`transport::Transport`] seam; the bundled
//! [`transport::HttpTransport`] is reqwest-based and can be pointed at a mock
//! server through the config's base-uri override.

pub mod client;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod translate;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::ClientError;
pub use extract::IdRule;
pub use pagination::PageWindow;
pub use transport::{HttpTransport, ProviderRequest, ProviderResponse, Transport};
