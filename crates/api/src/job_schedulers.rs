use crate::{reminder::check_due_reminders::CheckDueRemindersUseCase, shared::usecase::execute};
use actix_web::rt::task::JoinHandle;
use actix_web::rt::time::interval;
use savin_infra::SavinContext;
use std::time::Duration;
use tracing::info;

const MIN_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Background job firing due reminders. Owned by whoever starts it, the job
/// runs until `stop` is called or the owner is dropped.
#[derive(Default)]
pub struct ReminderScheduler {
    handle: Option<JoinHandle<()>>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the job on the current actix runtime. The first check runs
    /// right away. Does nothing when the job already runs.
    pub fn start(&mut self, ctx: SavinContext) {
        if self.is_running() {
            return;
        }
        let period = std::cmp::max(ctx.config.reminder_check_interval, MIN_CHECK_INTERVAL);
        info!("Checking for due reminders every {:?}", period);

        self.handle = Some(actix_web::rt::spawn(async move {
            let mut interval = interval(period);
            loop {
                interval.tick().await;
                let _ = execute(CheckDueRemindersUseCase {}, &ctx).await;
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Reminder scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
