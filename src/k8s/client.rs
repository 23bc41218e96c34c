use crate::k8s::{LabelSelector, PodDirectory, PodRecord};
use crate::{GatewayError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::ListParams;
use kube::{Api, Client};
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Default deadline applied to every control-plane call
pub const DEFAULT_DIRECTORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pod directory backed by the Kubernetes API.
///
/// Built once at startup; the underlying client is cheap to clone and is
/// shared by every request.
#[derive(Clone)]
pub struct K8sDirectory {
    client: Client,
    timeout: Duration,
}

impl K8sDirectory {
    pub async fn try_default(timeout: Duration) -> Result<Self> {
        debug!("Initializing Kubernetes client");

        let client = Client::try_default().await.map_err(|e| {
            GatewayError::DirectoryError(format!("Failed to create Kubernetes client: {}", e))
        })?;

        info!("Successfully connected to Kubernetes cluster");

        Ok(Self::new(client, timeout))
    }

    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    async fn with_deadline<T, F>(&self, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::DirectoryError(format!(
                "Kubernetes API request timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

#[async_trait]
impl PodDirectory for K8sDirectory {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<PodRecord> {
        let pods = self.pods(namespace);

        let pod = self
            .with_deadline(async {
                pods.get(name).await.map_err(|e| match e {
                    kube::Error::Api(ref resp) if resp.code == 404 => GatewayError::NotFound {
                        name: name.to_string(),
                        namespace: namespace.to_string(),
                    },
                    e => GatewayError::DirectoryError(format!(
                        "Failed to get pod {}/{}: {}",
                        namespace, name, e
                    )),
                })
            })
            .await?;

        Ok(PodRecord::from_k8s_pod(&pod))
    }

    async fn list_pods(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<PodRecord>> {
        if !selector.is_valid_label_set() {
            debug!(
                "Selector '{}' is not valid label syntax, no pod can match",
                selector
            );
            return Ok(Vec::new());
        }

        let pods = self.pods(namespace);
        let params = ListParams::default().labels(&selector.to_query_string());

        let pod_list = self
            .with_deadline(async {
                pods.list(&params).await.map_err(|e| {
                    GatewayError::DirectoryError(format!(
                        "Failed to list pods in {} with selector '{}': {}",
                        namespace, selector, e
                    ))
                })
            })
            .await?;

        let empty = BTreeMap::new();
        let matched: Vec<PodRecord> = pod_list
            .items
            .iter()
            .filter(|pod| selector.matches(pod.metadata.labels.as_ref().unwrap_or(&empty)))
            .map(PodRecord::from_k8s_pod)
            .collect();

        debug!(
            "Selector '{}' matched {} pod(s) in {}",
            selector,
            matched.len(),
            namespace
        );

        Ok(matched)
    }
}
