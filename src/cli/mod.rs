pub mod commands;

use crate::k8s::client::DEFAULT_DIRECTORY_TIMEOUT;
use crate::k8s::PodRef;
use crate::status::DEFAULT_FETCH_TIMEOUT;
use clap::{Args, Parser, Subcommand};
use podstatus_common::AGENT_STATUS_PORT;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "podstatus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gateway relaying progress reports from in-pod status agents", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the status gateway")]
    Serve(ServeArgs),
    #[command(about = "Resolve a pod and print its status once")]
    Get(GetArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(
        short,
        long,
        env = "PODSTATUS_LISTEN",
        default_value = "0.0.0.0:8080",
        help = "Address to listen on"
    )]
    pub listen: SocketAddr,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Args)]
pub struct GetArgs {
    #[arg(short, long, help = "Kubernetes namespace")]
    pub namespace: String,

    #[arg(
        short,
        long,
        conflicts_with = "labels",
        required_unless_present = "labels",
        help = "Pod name"
    )]
    pub pod: Option<String>,

    #[arg(short, long, help = "Label selector (key1=val1,key2=val2)")]
    pub labels: Option<String>,

    #[arg(
        short,
        long,
        default_value = "application/json",
        help = "Requested representation (application/json or text/html)"
    )]
    pub accept: String,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

impl GetArgs {
    pub fn pod_ref(&self) -> PodRef {
        match (&self.pod, &self.labels) {
            (Some(name), _) => PodRef::ByName {
                namespace: self.namespace.clone(),
                name: name.clone(),
            },
            (None, labels) => PodRef::ByLabels {
                namespace: self.namespace.clone(),
                selector: labels.clone().unwrap_or_default(),
            },
        }
    }
}

/// Process-wide settings for talking to the control plane and the agents
#[derive(Args)]
pub struct UpstreamArgs {
    #[arg(
        long,
        env = "PODSTATUS_FETCH_TIMEOUT_SECS",
        default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs(),
        help = "Timeout for fetching status from a pod agent, in seconds"
    )]
    pub fetch_timeout_secs: u64,

    #[arg(
        long,
        env = "PODSTATUS_DIRECTORY_TIMEOUT_SECS",
        default_value_t = DEFAULT_DIRECTORY_TIMEOUT.as_secs(),
        help = "Timeout for Kubernetes API lookups, in seconds"
    )]
    pub directory_timeout_secs: u64,

    #[arg(
        long,
        env = "PODSTATUS_AGENT_PORT",
        default_value_t = AGENT_STATUS_PORT,
        hide = true,
        help = "Port of the in-pod status agent"
    )]
    pub agent_port: u16,
}

impl UpstreamArgs {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn directory_timeout(&self) -> Duration {
        Duration::from_secs(self.directory_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["podstatus", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.listen, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
                assert_eq!(args.upstream.fetch_timeout(), Duration::from_secs(5));
                assert_eq!(args.upstream.agent_port, 8081);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_get_by_labels() {
        let cli = Cli::try_parse_from([
            "podstatus",
            "get",
            "-n",
            "ns1",
            "--labels",
            "app=worker",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Get(args)) => assert_eq!(
                args.pod_ref(),
                PodRef::ByLabels {
                    namespace: "ns1".to_string(),
                    selector: "app=worker".to_string(),
                }
            ),
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn test_get_requires_exactly_one_target() {
        assert!(Cli::try_parse_from(["podstatus", "get", "-n", "ns1"]).is_err());
        assert!(Cli::try_parse_from([
            "podstatus", "get", "-n", "ns1", "--pod", "job-7", "--labels", "app=worker"
        ])
        .is_err());
    }
}
