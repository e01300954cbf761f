//! Data models for expboard.
//!
//! These mirror the JSON documents returned by the tracking API. The dashboard
//! never mutates them in place; changes go through [`crate::ExperimentCommands`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Resource tag passed to panels that address experiment sub-resources.
pub const EXPERIMENTS_RESOURCE: &str = "experiments";

/// Run environment descriptor reported by the experiment's runtime.
pub type RunEnv = BTreeMap<String, serde_json::Value>;

/// Lifecycle status of an experiment, job or build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    #[default]
    Created,
    Building,
    Scheduled,
    Starting,
    Running,
    Resuming,
    Warning,
    Unschedulable,
    Succeeded,
    Failed,
    Stopped,
    Skipped,
    #[serde(other)]
    Unknown,
}

impl ExperimentStatus {
    /// Terminal statuses; a done experiment can no longer be stopped.
    pub fn is_done(self) -> bool {
        matches!(
            self,
            ExperimentStatus::Succeeded
                | ExperimentStatus::Failed
                | ExperimentStatus::Stopped
                | ExperimentStatus::Skipped
        )
    }

    pub fn is_running(self) -> bool {
        matches!(
            self,
            ExperimentStatus::Building
                | ExperimentStatus::Scheduled
                | ExperimentStatus::Starting
                | ExperimentStatus::Running
                | ExperimentStatus::Resuming
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperimentStatus::Created => "created",
            ExperimentStatus::Building => "building",
            ExperimentStatus::Scheduled => "scheduled",
            ExperimentStatus::Starting => "starting",
            ExperimentStatus::Running => "running",
            ExperimentStatus::Resuming => "resuming",
            ExperimentStatus::Warning => "warning",
            ExperimentStatus::Unschedulable => "unschedulable",
            ExperimentStatus::Succeeded => "succeeded",
            ExperimentStatus::Failed => "failed",
            ExperimentStatus::Stopped => "stopped",
            ExperimentStatus::Skipped => "skipped",
            ExperimentStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An experiment as returned by the tracking API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Experiment {
    pub id: u64,
    #[serde(default)]
    pub unique_name: String,
    /// Owner's user name.
    pub user: String,
    /// Compound project identifier, `user.project`.
    pub project: String,
    /// Compound group identifier, `user.project.group`.
    #[serde(default)]
    pub experiment_group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default)]
    pub last_status: ExperimentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_jobs: usize,
    #[serde(default)]
    pub code_reference: Option<u64>,
    #[serde(default)]
    pub run_env: Option<RunEnv>,
    #[serde(default)]
    pub build_job: Option<String>,
    /// Opaque configuration document.
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    #[serde(default)]
    pub declarations: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub last_metric: Option<BTreeMap<String, f64>>,
}

/// Render a JSON document as YAML text.
pub fn yaml_text(value: &serde_json::Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

impl Experiment {
    /// Render the configuration document as YAML text, if there is one.
    pub fn config_yaml(&self) -> Result<Option<String>> {
        self.config.as_ref().map(yaml_text).transpose()
    }

    /// Wall-clock run time in seconds, when both ends are known.
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        }
    }
}

/// A single job spawned by an experiment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentJob {
    pub id: u64,
    #[serde(default)]
    pub unique_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub last_status: ExperimentStatus,
    #[serde(default)]
    pub node_scheduled: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// One status transition in an entity's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusEntry {
    pub id: u64,
    pub status: ExperimentStatus,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A row of metric values reported at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricEntry {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub values: BTreeMap<String, f64>,
}

/// Git snapshot an experiment was started from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CodeReference {
    pub id: u64,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub git_url: Option<String>,
    #[serde(default)]
    pub is_dirty: Option<bool>,
}

/// The image build an experiment ran on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildJob {
    pub id: u64,
    pub unique_name: String,
    #[serde(default)]
    pub last_status: ExperimentStatus,
    #[serde(default)]
    pub dockerfile: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Paginated list envelope used by the tracking API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default)]
    pub count: usize,
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// Chart kinds the metrics panel can draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_deserializes_minimal_document() {
        let exp: Experiment =
            serde_json::from_str(r#"{"id": 42, "user": "alice", "project": "alice.proj1"}"#)
                .unwrap();
        assert_eq!(exp.id, 42);
        assert_eq!(exp.last_status, ExperimentStatus::Created);
        assert!(exp.experiment_group.is_none());
        assert!(!exp.bookmarked);
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let status: ExperimentStatus = serde_json::from_str(r#""zombie""#).unwrap();
        assert_eq!(status, ExperimentStatus::Unknown);
    }

    #[test]
    fn test_done_statuses() {
        assert!(ExperimentStatus::Succeeded.is_done());
        assert!(ExperimentStatus::Stopped.is_done());
        assert!(!ExperimentStatus::Running.is_done());
        assert!(!ExperimentStatus::Created.is_done());
    }

    #[test]
    fn test_config_yaml() {
        let exp = Experiment {
            config: Some(serde_json::json!({"run": {"cmd": "python train.py"}})),
            ..Default::default()
        };
        let yaml = exp.config_yaml().unwrap().unwrap();
        assert!(yaml.contains("cmd: python train.py"));
        assert!(Experiment::default().config_yaml().unwrap().is_none());
    }

    #[test]
    fn test_duration_secs() {
        let start = "2024-01-01T10:00:00Z".parse().unwrap();
        let end = "2024-01-01T10:02:30Z".parse().unwrap();
        let exp = Experiment {
            started_at: Some(start),
            finished_at: Some(end),
            ..Default::default()
        };
        assert_eq!(exp.duration_secs(), Some(150));
    }
}
