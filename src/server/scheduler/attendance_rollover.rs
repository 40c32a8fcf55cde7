use chrono::{FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, service::attendance::AttendanceService, util::time::day_in_tz,
};

/// Starts the nightly attendance rollover scheduler
///
/// Once per day, shortly after the school day begins, every student whose
/// latest mark is older than today is defaulted to absent. Errors are
/// logged and the job keeps running on its schedule.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: Cron expression for the nightly run
/// - `timezone`: Reference timezone deciding which day "today" is
pub async fn start_scheduler(
    db: DatabaseConnection,
    cron: &str,
    timezone: FixedOffset,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = process_rollover(&db, timezone).await {
                tracing::error!("Error processing attendance rollover: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Attendance rollover scheduler started");

    Ok(())
}

/// Runs the rollover for the current school day
async fn process_rollover(db: &DatabaseConnection, timezone: FixedOffset) -> Result<(), AppError> {
    let today = day_in_tz(Utc::now(), timezone);

    let flipped = AttendanceService::new(db, timezone)
        .rollover_absences(today)
        .await?;

    tracing::info!("Attendance rollover defaulted {} students to absent", flipped);

    Ok(())
}
