use k8s_openapi::api::core::v1::Pod;
use std::fmt;
use std::net::IpAddr;

/// Lifecycle phase of a pod as reported by the control plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn from_k8s(phase: Option<&str>) -> Self {
        match phase {
            Some("Pending") => PodPhase::Pending,
            Some("Running") => PodPhase::Running,
            Some("Succeeded") => PodPhase::Succeeded,
            Some("Failed") => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped snapshot of a pod, read from the cluster directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRecord {
    pub namespace: String,
    pub name: String,
    pub phase: PodPhase,
    pub pod_ip: Option<IpAddr>,
}

impl PodRecord {
    pub fn from_k8s_pod(pod: &Pod) -> Self {
        let metadata = &pod.metadata;
        let status = pod.status.as_ref();

        Self {
            namespace: metadata.namespace.clone().unwrap_or_default(),
            name: metadata.name.clone().unwrap_or_default(),
            phase: PodPhase::from_k8s(status.and_then(|s| s.phase.as_deref())),
            // an address we cannot parse is as good as none
            pod_ip: status
                .and_then(|s| s.pod_ip.as_deref())
                .and_then(|ip| ip.parse().ok()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == PodPhase::Running
    }
}
