//! Canonical product-id extraction from shape-varying result records.
//!
//! Deployments key the product id on different fields — a flat `id`, a nested
//! `attributes.group_id`, sometimes an element of an array. The rule source
//! comes from configuration and is compiled exactly once; extraction itself
//! never fails a search, it only yields `None` for the offending record.

use serde_json::Value;

/// Compiled identifier-extraction rule.
///
/// A source without separators is a plain field lookup, the common case. A
/// dotted source compiles to an access path (`attributes.group_id`,
/// `variants.0.sku` — all-digit segments index into arrays). A dotted source
/// that does not compile is used verbatim as a field name: degraded but
/// non-fatal, and deliberately kept that way because a flat field whose name
/// contains a dot is a real (if odd) feed shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdRule {
    Field(String),
    Path(CompiledPath),
}

/// A parsed access path; built once by [`IdRule::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPath {
    source: String,
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Key(String),
    Index(usize),
}

impl IdRule {
    /// Compiles a rule source. Never fails; see the type docs for the
    /// fallback behavior on malformed paths.
    #[must_use]
    pub fn compile(source: &str) -> Self {
        if !source.contains('.') {
            return Self::Field(source.to_owned());
        }
        match parse_path(source) {
            Ok(segments) => Self::Path(CompiledPath {
                source: source.to_owned(),
                segments,
            }),
            Err(reason) => {
                tracing::error!(
                    source,
                    reason,
                    "product id rule does not compile; using it as a literal field name"
                );
                Self::Field(source.to_owned())
            }
        }
    }

    /// Extracts the canonical identifier from one result record.
    ///
    /// Returns `None` when the rule finds nothing usable: a missing field, a
    /// path miss (logged with the record), or a degenerate scalar (`null`,
    /// `false`, `0`, `""`) that the surrounding pipeline treats as absent.
    #[must_use]
    pub fn extract(&self, record: &Value) -> Option<Value> {
        let value = match self {
            Self::Field(name) => record.get(name).cloned(),
            Self::Path(path) => {
                let found = path.eval(record);
                if found.is_none() {
                    tracing::error!(
                        rule = path.source.as_str(),
                        record = %record,
                        "product id path found nothing in result record"
                    );
                }
                found
            }
        };
        value.filter(|id| !is_missing(id))
    }
}

impl CompiledPath {
    fn eval(&self, record: &Value) -> Option<Value> {
        let mut current = record;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.get(key)?,
                PathSegment::Index(index) => current.get(*index)?,
            };
        }
        Some(current.clone())
    }
}

fn parse_path(source: &str) -> Result<Vec<PathSegment>, &'static str> {
    let mut segments = Vec::new();
    for part in source.split('.') {
        if part.is_empty() {
            return Err("empty path segment");
        }
        if part.bytes().all(|b| b.is_ascii_digit()) {
            let index = part.parse::<usize>().map_err(|_| "index segment out of range")?;
            segments.push(PathSegment::Index(index));
        } else {
            segments.push(PathSegment::Key(part.to_owned()));
        }
    }
    Ok(segments)
}

/// Scalars the pipeline treats as "no identifier".
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
