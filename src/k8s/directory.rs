use crate::k8s::{LabelSelector, PodRecord};
use crate::Result;
use async_trait::async_trait;

/// Read-only view of the cluster's pods.
///
/// Implementations hold no per-request state and are shared across
/// concurrent handlers.
#[async_trait]
pub trait PodDirectory: Send + Sync {
    /// Look up a single pod. Returns `NotFound` when the pod does not exist.
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<PodRecord>;

    /// List pods in `namespace` whose labels match every pair in `selector`.
    async fn list_pods(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<PodRecord>>;
}
