//! Per-run activity report.
//!
//! Every activity call made by the runner ends up here as one
//! [`ActivityRecord`], so a batch can be inspected as data after the fact
//! instead of being reconstructed from log lines.

use crate::traits::TaskOutcome;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub wallet_id: String,
    pub address: String,
    pub activity: String,
    pub outcome: TaskOutcome,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub timestamp: String,
    pub total: usize,
    pub success: usize,
    pub already_done: usize,
    pub failed: usize,
    pub retryable: usize,
    pub success_rate: f64,
    pub total_duration_ms: u64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchReport {
    records: Vec<ActivityRecord>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        wallet_id: &str,
        address: &str,
        activity: &str,
        outcome: TaskOutcome,
        duration: Duration,
    ) {
        self.records.push(ActivityRecord {
            wallet_id: wallet_id.to_string(),
            address: address.to_string(),
            activity: activity.to_string(),
            outcome,
            duration_ms: duration.as_millis() as u64,
        });
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records for one activity name, in execution order.
    pub fn for_activity<'a>(&'a self, activity: &'a str) -> impl Iterator<Item = &'a ActivityRecord> {
        self.records.iter().filter(move |r| r.activity == activity)
    }

    pub fn summary(&self) -> ReportSummary {
        let total = self.records.len();
        let mut success = 0;
        let mut already_done = 0;
        let mut failed = 0;
        let mut retryable = 0;
        let mut total_duration_ms = 0;

        for record in &self.records {
            total_duration_ms += record.duration_ms;
            match &record.outcome {
                TaskOutcome::Success { .. } => success += 1,
                TaskOutcome::AlreadyDone { .. } => already_done += 1,
                TaskOutcome::Failed { retryable: r, .. } => {
                    failed += 1;
                    if *r {
                        retryable += 1;
                    }
                }
            }
        }

        ReportSummary {
            timestamp: Utc::now().to_rfc3339(),
            total,
            success,
            already_done,
            failed,
            retryable,
            success_rate: if total > 0 {
                (success + already_done) as f64 / total as f64 * 100.0
            } else {
                0.0
            },
            total_duration_ms,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub async fn export_to_file(&self, path: &str) -> std::io::Result<()> {
        tokio::fs::write(path, self.to_json()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut report = BatchReport::new();
        report.record(
            "001",
            "0xabc",
            "01_bexSwap",
            TaskOutcome::success("0x01", "swapped"),
            Duration::from_millis(100),
        );
        report.record(
            "001",
            "0xabc",
            "07_honeyJarMint",
            TaskOutcome::already_done("already minted"),
            Duration::from_millis(50),
        );
        report.record(
            "002",
            "0xdef",
            "01_bexSwap",
            TaskOutcome::failed("request timeout", true),
            Duration::from_millis(150),
        );
        report.record(
            "002",
            "0xdef",
            "03_mintHoney",
            TaskOutcome::failed("zero balance", false),
            Duration::from_millis(10),
        );

        let summary = report.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.already_done, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.retryable, 1);
        assert_eq!(summary.total_duration_ms, 310);
        assert!((summary.success_rate - 50.0).abs() < 0.01);
        assert_eq!(report.for_activity("01_bexSwap").count(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::new();
        let summary = report.summary();
        assert!(report.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.success_rate, 0.0);
    }

    #[test]
    fn test_json_export() {
        let mut report = BatchReport::new();
        report.record(
            "001",
            "0xabc",
            "06_bendBorrow",
            TaskOutcome::failed("reverted", false),
            Duration::from_millis(1),
        );
        let json = report.to_json();
        assert!(json.contains("\"status\": \"failed\""));
        assert!(json.contains("06_bendBorrow"));
    }
}
