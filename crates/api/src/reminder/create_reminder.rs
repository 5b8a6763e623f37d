use crate::error::SavinError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::create_reminder::*;
use savin_domain::{parse_time_phrase, resolve_due_at, Reminder, TimeParseError};
use savin_infra::SavinContext;

pub const REMINDER_FAILED_REPLY: &str =
    "I'm sorry, I couldn't set that reminder. Please try again with a different time format.";

/// What the assistant answers once a reminder is stored
pub fn reminder_set_reply(reminder: &Reminder) -> String {
    format!(
        "I've set a reminder for {} about: {}",
        reminder.due_at.format("%A, %B %d at %I:%M %p"),
        reminder.message
    )
}

fn handle_error(e: UseCaseErrors) -> SavinError {
    match e {
        UseCaseErrors::EmptyMessage => {
            SavinError::BadClientData("The reminder message cannot be empty.".into())
        }
        UseCaseErrors::InvalidTime(e) => SavinError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError(_) => SavinError::InternalError,
    }
}

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> Result<HttpResponse, SavinError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        time: body.time,
        message: body.message,
    };

    match execute(usecase, &ctx).await {
        Ok(reminder) => {
            Ok(HttpResponse::Ok().json(APIResponse::new(reminder_set_reply(&reminder))))
        }
        Err(UseCaseErrors::InvalidTime(_)) => {
            Ok(HttpResponse::Ok().json(APIResponse::new(REMINDER_FAILED_REPLY)))
        }
        Err(e) => Err(handle_error(e)),
    }
}

/// Stores a reminder for a spoken time phrase. Times that already passed
/// today are moved to the next day.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub time: String,
    pub message: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyMessage,
    InvalidTime(TimeParseError),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(UseCaseErrors::EmptyMessage);
        }

        let now = ctx.sys.now();
        let parsed = parse_time_phrase(&self.time, now).map_err(UseCaseErrors::InvalidTime)?;
        let reminder = Reminder::new(resolve_due_at(parsed, now), message);

        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .map_err(UseCaseErrors::StorageError)?;

        Ok(reminder)
    }
}
