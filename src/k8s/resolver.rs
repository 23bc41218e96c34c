//! Turns a logical pod reference into exactly one running, addressable pod

use crate::k8s::{LabelSelector, PodDirectory, PodRecord};
use crate::{GatewayError, Result};
use std::fmt;
use std::net::IpAddr;
use tracing::debug;

/// How the caller identified the pod
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodRef {
    ByName { namespace: String, name: String },
    ByLabels { namespace: String, selector: String },
}

impl PodRef {
    pub fn namespace(&self) -> &str {
        match self {
            PodRef::ByName { namespace, .. } | PodRef::ByLabels { namespace, .. } => namespace,
        }
    }
}

impl fmt::Display for PodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodRef::ByName { namespace, name } => write!(f, "{}/{}", namespace, name),
            PodRef::ByLabels {
                namespace,
                selector,
            } => write!(f, "{}/[{}]", namespace, selector),
        }
    }
}

/// A running pod with a known address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPod {
    pub namespace: String,
    pub name: String,
    pub address: IpAddr,
}

pub async fn resolve(directory: &dyn PodDirectory, target: &PodRef) -> Result<ResolvedPod> {
    let record = match target {
        PodRef::ByName { namespace, name } => directory.get_pod(namespace, name).await?,
        PodRef::ByLabels {
            namespace,
            selector,
        } => {
            let parsed = LabelSelector::parse(selector)?;
            let mut pods = directory.list_pods(namespace, &parsed).await?;

            // never pick among several candidates
            if pods.len() != 1 {
                return Err(GatewayError::AmbiguousOrMissing {
                    selector: selector.clone(),
                    matched: pods.len(),
                });
            }
            pods.remove(0)
        }
    };

    debug!(
        "Resolved {} to pod {}/{} (phase {})",
        target, record.namespace, record.name, record.phase
    );

    ensure_ready(record)
}

fn ensure_ready(record: PodRecord) -> Result<ResolvedPod> {
    if !record.is_running() {
        return Err(GatewayError::PodNotReady {
            namespace: record.namespace,
            name: record.name,
            phase: record.phase,
        });
    }

    match record.pod_ip {
        Some(address) => Ok(ResolvedPod {
            namespace: record.namespace,
            name: record.name,
            address,
        }),
        None => Err(GatewayError::NoPodAddress {
            namespace: record.namespace,
            name: record.name,
        }),
    }
}
