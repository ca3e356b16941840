use crate::config::DelayPolicy;
use crate::report::BatchReport;
use crate::traits::{Task, TaskOutcome};
use crate::utils::logger::TASK_RESULT_TARGET;
use crate::utils::retry::is_transient_error;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const MSG_LIMIT: usize = 125;

/// Runs activities one at a time and turns every result, error or not,
/// into a logged [`TaskOutcome`] recorded in the batch report.
#[derive(Debug, Default)]
pub struct ActivityRunner {
    report: BatchReport,
}

impl ActivityRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn run_task<Ctx: Send>(
        &mut self,
        wallet_id: &str,
        address: &str,
        task: &dyn Task<Ctx>,
        ctx: Ctx,
    ) -> TaskOutcome {
        let start_time = Instant::now();
        let outcome = match task.run(ctx).await {
            Ok(outcome) => outcome,
            Err(e) => TaskOutcome::Failed {
                reason: format!("{:#}", e),
                retryable: is_transient_error(&e),
            },
        };
        let duration = start_time.elapsed();

        log_outcome(wallet_id, task.name(), &outcome, duration);
        self.report
            .record(wallet_id, address, task.name(), outcome.clone(), duration);
        outcome
    }

    /// Records a failure that happened before any task could run (bad key, etc.).
    pub fn record_failure(&mut self, wallet_id: &str, activity: &str, reason: &str) {
        let outcome = TaskOutcome::failed(reason, false);
        log_outcome(wallet_id, activity, &outcome, Duration::ZERO);
        self.report
            .record(wallet_id, "", activity, outcome, Duration::ZERO);
    }

    pub async fn pause(&self, policy: &DelayPolicy) {
        let delay = policy.next_delay(&mut rand::thread_rng());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn report(&self) -> &BatchReport {
        &self.report
    }

    /// Logs the batch summary and hands the report over.
    pub fn finish(self, mode: &str) -> BatchReport {
        let summary = self.report.summary();
        info!(
            target: TASK_RESULT_TARGET,
            "{} finished | Total: {} | Success: {} | Already done: {} | Failed: {} ({} retryable) | Success Rate: {:.2}%",
            mode,
            summary.total,
            summary.success,
            summary.already_done,
            summary.failed,
            summary.retryable,
            summary.success_rate
        );
        self.report
    }
}

fn clip(raw: &str) -> String {
    let raw = raw.replace('\n', " | ");
    if raw.chars().count() > MSG_LIMIT {
        let truncated: String = raw.chars().take(MSG_LIMIT - 3).collect();
        format!("{}...", truncated)
    } else {
        raw
    }
}

fn log_outcome(wallet_id: &str, task_name: &str, outcome: &TaskOutcome, duration: Duration) {
    let secs = duration.as_secs_f64();
    match outcome {
        TaskOutcome::Success { .. } => info!(
            target: TASK_RESULT_TARGET,
            "[WL:{}] Success [{}] {} in {:.1}s",
            wallet_id,
            task_name,
            clip(&outcome.to_string()),
            secs
        ),
        TaskOutcome::AlreadyDone { message } => info!(
            target: TASK_RESULT_TARGET,
            "[WL:{}] Already [{}] {} in {:.1}s",
            wallet_id,
            task_name,
            clip(message),
            secs
        ),
        TaskOutcome::Failed { .. } => warn!(
            target: TASK_RESULT_TARGET,
            "[WL:{}] Failed  [{}] {} in {:.1}s",
            wallet_id,
            task_name,
            clip(&outcome.to_string()),
            secs
        ),
    }
}
