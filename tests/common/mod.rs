#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use podstatus::k8s::{LabelSelector, PodDirectory, PodPhase, PodRecord};
use podstatus::server::{router, AppState};
use podstatus::status::StatusFetcher;
use podstatus::{GatewayError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// In-memory pod directory
#[derive(Default)]
pub struct StaticDirectory {
    pods: Vec<(PodRecord, BTreeMap<String, String>)>,
}

impl StaticDirectory {
    pub fn with_pod(mut self, record: PodRecord, labels: &[(&str, &str)]) -> Self {
        let labels = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.pods.push((record, labels));
        self
    }
}

#[async_trait]
impl PodDirectory for StaticDirectory {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<PodRecord> {
        self.pods
            .iter()
            .find(|(p, _)| p.namespace == namespace && p.name == name)
            .map(|(p, _)| p.clone())
            .ok_or_else(|| GatewayError::NotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            })
    }

    async fn list_pods(&self, namespace: &str, selector: &LabelSelector) -> Result<Vec<PodRecord>> {
        Ok(self
            .pods
            .iter()
            .filter(|(p, labels)| p.namespace == namespace && selector.matches(labels))
            .map(|(p, _)| p.clone())
            .collect())
    }
}

/// Directory whose control plane is unreachable
pub struct BrokenDirectory;

#[async_trait]
impl PodDirectory for BrokenDirectory {
    async fn get_pod(&self, _namespace: &str, _name: &str) -> Result<PodRecord> {
        Err(GatewayError::DirectoryError("connection refused".to_string()))
    }

    async fn list_pods(&self, _namespace: &str, _selector: &LabelSelector) -> Result<Vec<PodRecord>> {
        Err(GatewayError::DirectoryError("connection refused".to_string()))
    }
}

pub fn pod(namespace: &str, name: &str, phase: PodPhase, ip: Option<&str>) -> PodRecord {
    PodRecord {
        namespace: namespace.to_string(),
        name: name.to_string(),
        phase,
        pod_ip: ip.map(|ip| ip.parse().expect("valid ip")),
    }
}

pub fn state(directory: impl PodDirectory + 'static, agent_port: u16, timeout: Duration) -> AppState {
    AppState {
        directory: Arc::new(directory),
        fetcher: StatusFetcher::with_agent_port(timeout, agent_port).expect("http client"),
    }
}

pub async fn get(state: AppState, uri: &str, accept: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(accept) = accept {
        request = request.header(header::ACCEPT, accept);
    }

    router(state)
        .oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("infallible")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
