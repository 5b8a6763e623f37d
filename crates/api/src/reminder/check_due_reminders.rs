use crate::shared::usecase::UseCase;
use savin_domain::Reminder;
use savin_infra::SavinContext;
use tracing::{error, info};

pub const REMINDER_NOTIFICATION_TITLE: &str = "Savin Reminder";

/// Removes every reminder that is due and shows a desktop notification for
/// each of them. Returns the reminders that were fired.
#[derive(Debug)]
pub struct CheckDueRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckDueRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CheckDueReminders";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.now();
        // Nothing is notified when the pending list could not be written
        // back, the same reminders are still due on the next tick
        let due = ctx
            .repos
            .reminder_repo
            .delete_all_before(now)
            .await
            .map_err(UseCaseErrors::StorageError)?;

        for reminder in &due {
            info!("Reminder due: {}", reminder.message);
            if let Err(e) = ctx
                .desktop
                .notify(REMINDER_NOTIFICATION_TITLE, &reminder.message)
            {
                error!("Unable to show reminder notification: {:?}", e);
            }
        }

        Ok(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use savin_infra::{RecordingDesktop, StaticTimeSys};
    use std::sync::Arc;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn setup_context(desktop: Arc<RecordingDesktop>) -> SavinContext {
        let mut ctx = SavinContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys { now: now() });
        ctx.desktop = desktop;
        ctx
    }

    #[actix_web::main]
    #[test]
    async fn fires_only_due_reminders() {
        let desktop = Arc::new(RecordingDesktop::new());
        let ctx = setup_context(desktop.clone());
        let past = Reminder::new(now() - Duration::minutes(1), "stand up");
        let future = Reminder::new(now() + Duration::hours(1), "lunch");
        ctx.repos.reminder_repo.insert(&past).await.unwrap();
        ctx.repos.reminder_repo.insert(&future).await.unwrap();

        let fired = execute(CheckDueRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(fired, vec![past]);
        assert_eq!(ctx.repos.reminder_repo.find_all().await, vec![future]);
        assert_eq!(
            *desktop.notifications.lock().unwrap(),
            vec![(REMINDER_NOTIFICATION_TITLE.to_string(), "stand up".to_string())]
        );
    }

    #[actix_web::main]
    #[test]
    async fn reminders_due_right_now_are_fired() {
        let desktop = Arc::new(RecordingDesktop::new());
        let ctx = setup_context(desktop.clone());
        let reminder = Reminder::new(now(), "now");
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        let fired = execute(CheckDueRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(fired.len(), 1);
        assert!(ctx.repos.reminder_repo.find_all().await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn failing_notifications_still_remove_reminders() {
        let desktop = Arc::new(RecordingDesktop::failing());
        let ctx = setup_context(desktop);
        let first = Reminder::new(now() - Duration::minutes(2), "first");
        let second = Reminder::new(now() - Duration::minutes(1), "second");
        ctx.repos.reminder_repo.insert(&first).await.unwrap();
        ctx.repos.reminder_repo.insert(&second).await.unwrap();

        let fired = execute(CheckDueRemindersUseCase {}, &ctx).await.unwrap();

        assert_eq!(fired, vec![first, second]);
        assert!(ctx.repos.reminder_repo.find_all().await.is_empty());
    }
}
