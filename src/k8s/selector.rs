//! Equality-based label selectors parsed from `key=value,key=value` strings

use crate::{GatewayError, Result};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    labels: BTreeMap<String, String>,
}

impl LabelSelector {
    /// Parse a comma-separated list of `key=value` pairs.
    ///
    /// Every segment must contain exactly one `=`. Empty keys and values are
    /// kept as literal matches. When a key repeats, the last value wins.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut labels = BTreeMap::new();

        for segment in raw.split(',') {
            match segment.split_once('=') {
                Some((key, value)) if !value.contains('=') => {
                    labels.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(GatewayError::InvalidSelector(format!(
                        "expected key=value, got '{}'",
                        segment
                    )))
                }
            }
        }

        Ok(Self { labels })
    }

    /// Canonical selector string for the control-plane list call
    pub fn to_query_string(&self) -> String {
        self.labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.labels
            .iter()
            .all(|(k, v)| labels.get(k).is_some_and(|actual| actual == v))
    }

    /// Whether every pair is a syntactically valid Kubernetes label.
    ///
    /// A selector that fails this can never match a real pod, and its text
    /// must not reach the API server, which would read it as selector syntax.
    pub fn is_valid_label_set(&self) -> bool {
        self.labels
            .iter()
            .all(|(k, v)| is_valid_label_key(k) && is_valid_label_value(v))
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// `[prefix/]name`, where prefix is a DNS subdomain of at most 253 characters
fn is_valid_label_key(key: &str) -> bool {
    match key.split_once('/') {
        Some((prefix, name)) => is_dns_subdomain(prefix) && is_label_name(name),
        None => is_label_name(key),
    }
}

/// Empty, or a label name
fn is_valid_label_value(value: &str) -> bool {
    value.is_empty() || is_label_name(value)
}

/// 1-63 characters of `[A-Za-z0-9._-]`, starting and ending alphanumeric
fn is_label_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

fn is_dns_subdomain(prefix: &str) -> bool {
    let lower_alnum = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    prefix.len() <= 253
        && prefix.split('.').all(|part| {
            let bytes = part.as_bytes();
            !bytes.is_empty()
                && bytes.len() <= 63
                && lower_alnum(&bytes[0])
                && lower_alnum(&bytes[bytes.len() - 1])
                && bytes.iter().all(|b| lower_alnum(b) || *b == b'-')
        })
}
