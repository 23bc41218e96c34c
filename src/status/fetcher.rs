//! Bounded-time fetch of a pod's status from its in-pod agent

use crate::k8s::ResolvedPod;
use crate::status::{Representation, StatusPayload};
use crate::{GatewayError, Result};
use podstatus_common::{StatusReport, AGENT_STATUS_PATH, AGENT_STATUS_PORT};
use reqwest::header::ACCEPT;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared HTTP client for talking to in-pod agents.
///
/// The timeout covers the whole exchange, from connect to the last body byte.
#[derive(Clone)]
pub struct StatusFetcher {
    client: reqwest::Client,
    agent_port: u16,
}

impl StatusFetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        Self::with_agent_port(timeout, AGENT_STATUS_PORT)
    }

    pub fn with_agent_port(timeout: Duration, agent_port: u16) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, agent_port })
    }

    pub fn status_url(&self, address: IpAddr) -> String {
        format!(
            "http://{}{}",
            SocketAddr::new(address, self.agent_port),
            AGENT_STATUS_PATH
        )
    }

    pub async fn fetch(
        &self,
        pod: &ResolvedPod,
        representation: Representation,
    ) -> Result<StatusPayload> {
        let url = self.status_url(pod.address);
        debug!(
            "Fetching {} status for {}/{} from {}",
            representation, pod.namespace, pod.name, url
        );

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, representation.media_type())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_failed)?;

        let payload = match representation {
            Representation::Structured => response
                .json::<Vec<StatusReport>>()
                .await
                .map(StatusPayload::Reports),
            Representation::Rendered => response.text().await.map(StatusPayload::Markup),
        }
        .map_err(fetch_failed)?;

        Ok(payload)
    }
}

fn fetch_failed(err: reqwest::Error) -> GatewayError {
    GatewayError::FetchFailed(err.to_string())
}
