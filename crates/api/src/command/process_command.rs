use super::fallback::respond;
use crate::app::{open_app_reply, OpenAppUseCase, WHICH_APP_REPLY};
use crate::note::{create_note_reply, CreateNoteUseCase, WHAT_TO_WRITE_REPLY};
use crate::reminder::{reminder_set_reply, CreateReminderUseCase, REMINDER_FAILED_REPLY};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::process_command::*;
use savin_domain::{classify, extract_command, CommandRequest, OsFamily, ReminderRequest};
use savin_infra::SavinContext;

pub const NOT_HEARD_REPLY: &str = "I couldn't hear you. Please try again.";
pub const REMINDER_DETAILS_REPLY: &str = "I'd like to set a reminder for you. \
    Please tell me when and what to remind you about. \
    For example, 'Remind me to call mom at 5pm'.";

pub async fn process_command_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> HttpResponse {
    let usecase = ProcessCommandUseCase {
        query: body.0.query,
        os: OsFamily::current(),
    };

    let response = match execute(usecase, &ctx).await {
        Ok(response) => response,
        Err(e) => match e {},
    };
    HttpResponse::Ok().json(APIResponse::new(response))
}

/// Handles one spoken command. Actions (opening apps, reminders, notes) are
/// carried out first, everything else is answered by keyword replies or
/// the conversational fallback.
#[derive(Debug)]
pub struct ProcessCommandUseCase {
    pub query: String,
    pub os: Option<OsFamily>,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for ProcessCommandUseCase {
    type Response = String;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ProcessCommand";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let query = self.query.trim();
        if query.is_empty() {
            return Ok(NOT_HEARD_REPLY.to_string());
        }

        let response = match extract_command(query) {
            Some(CommandRequest::OpenApp(app)) => self.open_app(app, ctx).await,
            Some(CommandRequest::SetReminder(request)) => set_reminder(request, ctx).await,
            Some(CommandRequest::TakeNote(text)) => take_note(text, ctx).await,
            None => match classify(query).canned_reply(ctx.sys.now()) {
                Some(reply) => reply,
                None => respond(query, ctx).await,
            },
        };
        Ok(response)
    }
}

impl ProcessCommandUseCase {
    async fn open_app(&self, app: Option<String>, ctx: &SavinContext) -> String {
        let app = match app {
            Some(app) => app,
            None => return WHICH_APP_REPLY.to_string(),
        };
        let usecase = OpenAppUseCase {
            app: app.clone(),
            os: self.os,
        };
        let res = execute(usecase, ctx).await;
        open_app_reply(&app, &res)
    }
}

async fn set_reminder(request: Option<ReminderRequest>, ctx: &SavinContext) -> String {
    let request = match request {
        Some(request) => request,
        None => return REMINDER_DETAILS_REPLY.to_string(),
    };
    let usecase = CreateReminderUseCase {
        time: request.time_phrase,
        message: request.message,
    };
    match execute(usecase, ctx).await {
        Ok(reminder) => reminder_set_reply(&reminder),
        Err(_) => REMINDER_FAILED_REPLY.to_string(),
    }
}

async fn take_note(text: Option<String>, ctx: &SavinContext) -> String {
    let text = match text {
        Some(text) => text,
        None => return WHAT_TO_WRITE_REPLY.to_string(),
    };
    let res = execute(CreateNoteUseCase { text: text.clone() }, ctx).await;
    create_note_reply(&text, &res)
}
