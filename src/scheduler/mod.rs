//! Named cron jobs on top of `tokio-cron-scheduler`.

use std::collections::HashMap;
use std::future::Future;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::error::AppError;

/// Cron scheduler whose jobs are addressed by name.
///
/// Names are unique: creating a job under an existing name replaces the earlier job.
pub struct Scheduler {
    inner: JobScheduler,
    jobs: Mutex<HashMap<String, Uuid>>,
}

impl Scheduler {
    pub async fn new() -> Result<Self, AppError> {
        Ok(Self {
            inner: JobScheduler::new().await?,
            jobs: Mutex::new(HashMap::new()),
        })
    }

    /// Schedules `callback` on a six-field cron expression (seconds first).
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Id of the scheduled job
    /// - `Err(AppError::SchedulerErr)` - Invalid cron expression or the job could not be added
    pub async fn create_job<F, Fut>(
        &self,
        cron: &str,
        name: &str,
        callback: F,
    ) -> Result<Uuid, AppError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let job_name = name.to_string();
        let job = Job::new_async(cron, move |_uuid, _lock| {
            tracing::debug!("Running scheduled job {}", job_name);
            Box::pin(callback())
        })?;

        let mut jobs = self.jobs.lock().await;
        if let Some(previous) = jobs.remove(name) {
            self.inner.remove(&previous).await?;
            tracing::info!("Replacing scheduled job {}", name);
        }

        let id = self.inner.add(job).await?;
        jobs.insert(name.to_string(), id);

        tracing::info!("Scheduled job {} ({})", name, cron);

        Ok(id)
    }

    /// Cancels the job called `name`. Returns whether such a job existed.
    pub async fn delete_job(&self, name: &str) -> Result<bool, AppError> {
        let Some(id) = self.jobs.lock().await.remove(name) else {
            return Ok(false);
        };

        self.inner.remove(&id).await?;
        tracing::info!("Deleted scheduled job {}", name);

        Ok(true)
    }

    pub async fn job_id(&self, name: &str) -> Option<Uuid> {
        self.jobs.lock().await.get(name).copied()
    }

    pub async fn start(&self) -> Result<(), AppError> {
        self.inner.start().await?;
        tracing::info!("Scheduler started");

        Ok(())
    }
}
