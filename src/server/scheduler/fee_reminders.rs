use std::sync::Arc;

use chrono::{FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{fee_record::FeeRecordRepository, student::StudentRepository},
    error::AppError,
    model::notice::SendNoticeParams,
    service::{
        fee::FeeService,
        notice::{FeeNoticeService, NoticeTransport},
    },
    util::time::day_in_tz,
};

use entity::fee_record::FeeMonth;

/// Starts the daily fee reminder scheduler
///
/// Once per day, every student with no fee record for the current calendar
/// month gets a due reminder through the notice dispatcher. The scan never
/// creates fee records; it only reads the ledger and sends. A student whose
/// notice cannot be delivered is logged and skipped so the rest of the
/// batch still runs.
///
/// # Arguments
/// - `db`: Database connection
/// - `transport`: Delivery channel for the reminders
/// - `cron`: Cron expression for the daily run
/// - `timezone`: Reference timezone deciding the current fee month
pub async fn start_scheduler(
    db: DatabaseConnection,
    transport: Arc<dyn NoticeTransport>,
    cron: &str,
    timezone: FixedOffset,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_transport = transport.clone();

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = job_db.clone();
        let transport = job_transport.clone();

        Box::pin(async move {
            if let Err(e) = process_fee_reminders(&db, transport, timezone).await {
                tracing::error!("Error processing fee reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Fee reminder scheduler started");

    Ok(())
}

/// Scans all students and dispatches reminders for the current month
///
/// Returns the number of reminders dispatched. Per-student failures are
/// logged and skipped; only the student listing itself can fail the scan.
async fn process_fee_reminders(
    db: &DatabaseConnection,
    transport: Arc<dyn NoticeTransport>,
    timezone: FixedOffset,
) -> Result<u32, AppError> {
    let current_month = FeeMonth::for_date(day_in_tz(Utc::now(), timezone));

    let students = StudentRepository::new(db).get_all().await?;

    let mut dispatched = 0;
    for student in students {
        match remind_student(db, transport.clone(), &student, current_month).await {
            Ok(true) => dispatched += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Failed to send fee reminder to student {}: {}", student.id, e);
            }
        }
    }

    tracing::info!("Fee reminder scan dispatched {} notices", dispatched);

    Ok(dispatched)
}

/// Dispatches one student's reminder when the current month is unpaid
///
/// Returns whether a reminder went out; students who already paid this
/// month are skipped.
async fn remind_student(
    db: &DatabaseConnection,
    transport: Arc<dyn NoticeTransport>,
    student: &entity::student::Model,
    current_month: FeeMonth,
) -> Result<bool, AppError> {
    let records = FeeRecordRepository::new(db);

    if records.exists_for_month(student.id, current_month).await? {
        return Ok(false);
    }

    let summary = FeeService::new(db).due_summary(student.id).await?;
    let latest_record_id = records
        .latest_for_student(student.id)
        .await?
        .map(|record| record.id);

    let month_names: Vec<&str> = summary
        .due_months
        .iter()
        .map(|month| month.name())
        .collect();
    let message = format!(
        "Dear guardian of {}, school fees for {} are unpaid. The outstanding balance is {}.",
        student.name,
        month_names.join(", "),
        summary.total_due_amount,
    );

    FeeNoticeService::new(db, transport)
        .send(SendNoticeParams {
            student_id: student.id,
            fee_record_id: latest_record_id,
            message,
            remark: Some("Automated monthly reminder".to_string()),
            due_amount: summary.total_due_amount,
            months: summary.due_months,
        })
        .await?;

    Ok(true)
}
