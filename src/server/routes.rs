use crate::k8s::{resolve, PodRef};
use crate::server::AppState;
use crate::status::{Representation, StatusPayload};
use crate::Result;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LabelsQuery {
    #[serde(default)]
    pub labels: String,
}

pub async fn status_by_name(
    State(state): State<AppState>,
    Path((namespace, pod_name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusPayload> {
    let target = PodRef::ByName {
        namespace,
        name: pod_name,
    };
    relay(&state, &target, &headers).await
}

pub async fn status_by_labels(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Query(query): Query<LabelsQuery>,
    headers: HeaderMap,
) -> Result<StatusPayload> {
    let target = PodRef::ByLabels {
        namespace,
        selector: query.labels,
    };
    relay(&state, &target, &headers).await
}

pub async fn health() -> &'static str {
    "ok"
}

async fn relay(state: &AppState, target: &PodRef, headers: &HeaderMap) -> Result<StatusPayload> {
    let pod = resolve(state.directory.as_ref(), target).await?;
    let representation = Representation::from_headers(headers)?;
    state.fetcher.fetch(&pod, representation).await
}
