use std::sync::Arc;

use registrar::server::{
    config::Config,
    error::AppError,
    scheduler::{attendance_rollover, fee_reminders},
    service::notice::LogTransport,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting registrar scheduler daemon");

    let state = AppState::new(db, Arc::new(LogTransport), config.timezone);

    attendance_rollover::start_scheduler(state.db.clone(), &config.rollover_cron, state.timezone)
        .await?;

    fee_reminders::start_scheduler(
        state.db.clone(),
        state.transport.clone(),
        &config.fee_reminder_cron,
        state.timezone,
    )
    .await?;

    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutting down");

    Ok(())
}
