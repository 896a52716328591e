use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::chambre::ChambreService};

/// Starts the room listing scheduler
///
/// Every `interval` the rooms of each bloc are listed and logged. A failed run is
/// logged and the next run happens on schedule.
///
/// # Arguments
/// - `db`: Database connection
/// - `interval`: Time between two listings
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; it stops when dropped
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(
    db: DatabaseConnection,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = refresh_listing(&db).await {
                tracing::error!("Error listing rooms per bloc: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Room listing scheduler started, running every {}s",
        interval.as_secs()
    );

    Ok(scheduler)
}

/// Lists the rooms of every bloc once
async fn refresh_listing(db: &DatabaseConnection) -> Result<(), AppError> {
    let blocs = ChambreService::new(db).liste_chambres_par_bloc().await?;

    tracing::debug!("Room listing refreshed for {} bloc(s)", blocs.len());

    Ok(())
}
