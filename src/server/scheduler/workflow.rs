use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, state::AppState};

/// Starts the workflow scheduler
///
/// Runs every workflow step on the `WORKFLOW_CRON` schedule (daily at 06:00 by
/// default). The same run can be triggered over HTTP through
/// `POST /api/cron/workflows`.
///
/// # Arguments
/// - `state`: Application state providing the database, email service and limiter windows
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron = state.config.workflow_cron.clone();
    let job_state = state.clone();

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            let run = state.workflow().run().await;
            let failed = run.steps.iter().filter(|s| s.error.is_some()).count();

            if failed > 0 {
                tracing::warn!("Scheduled workflow run finished with {} failed steps", failed);
            } else {
                tracing::info!("Scheduled workflow run finished");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Workflow scheduler started with schedule '{}'", cron);

    Ok(())
}
