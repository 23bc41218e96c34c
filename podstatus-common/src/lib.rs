//! Wire contract between the gateway and the in-pod status agent
//!
//! The agent listens on a fixed port and path inside every workload pod and
//! answers either with a JSON array of [`StatusReport`] or with a rendered
//! HTML page, depending on the `Accept` header it receives.

use serde::{Deserialize, Serialize};

/// Port the in-pod agent listens on
pub const AGENT_STATUS_PORT: u16 = 8081;

/// Path of the agent's status endpoint
pub const AGENT_STATUS_PATH: &str = "/status";

/// Progress of a single pipeline stage as reported by the agent
///
/// Field order matches the agent's output so a decoded array re-serializes
/// to the same document. Missing fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusReport {
    pub stage_name: String,
    pub start_time: String,
    pub duration: String,
    pub is_completed: bool,
    pub input_record_count: i64,
    pub output_record_count: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub eta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_agent_report() {
        let raw = r#"[{
            "stage_name": "ingest",
            "start_time": "2024-05-01T10:00:00Z",
            "duration": "1m30s",
            "is_completed": true,
            "input_record_count": 1200,
            "output_record_count": 1180,
            "total_tasks": 8,
            "completed_tasks": 8,
            "in_progress_tasks": 0,
            "eta": "0s"
        }]"#;

        let reports: Vec<StatusReport> = serde_json::from_str(raw).expect("valid report");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].stage_name, "ingest");
        assert!(reports[0].is_completed);
        assert_eq!(reports[0].output_record_count, 1180);
        assert_eq!(reports[0].completed_tasks, 8);
    }

    #[test]
    fn test_missing_fields_default() {
        let reports: Vec<StatusReport> =
            serde_json::from_str(r#"[{"stage_name":"transform","total_tasks":4,"completed_tasks":1}]"#)
                .expect("partial report");

        assert_eq!(reports[0].stage_name, "transform");
        assert!(!reports[0].is_completed);
        assert_eq!(reports[0].eta, "");
        assert_eq!(reports[0].total_tasks, 4);
        assert_eq!(reports[0].in_progress_tasks, 0);
    }

    #[test]
    fn test_field_order_preserved() {
        let report = StatusReport {
            stage_name: "load".to_string(),
            ..Default::default()
        };
        let encoded = serde_json::to_string(&report).unwrap();
        assert!(encoded.starts_with(r#"{"stage_name":"load","start_time":"#));
        assert!(encoded.ends_with(r#""eta":""}"#));
    }
}
