use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::create_note::*;
use savin_domain::{note_file_name, Note};
use savin_infra::SavinContext;
use std::path::PathBuf;
use tracing::warn;

pub const WHAT_TO_WRITE_REPLY: &str = "What would you like me to write down?";
pub const NOTE_FAILED_REPLY: &str = "I had trouble writing that note. Could you try again?";

/// The reply for an attempt to write `text` down
pub fn create_note_reply(text: &str, res: &Result<PathBuf, UseCaseErrors>) -> String {
    match res {
        Ok(_) => format!("I've written your note: {}", text),
        Err(UseCaseErrors::EmptyNote) => WHAT_TO_WRITE_REPLY.to_string(),
        Err(UseCaseErrors::StorageError(_)) => NOTE_FAILED_REPLY.to_string(),
    }
}

pub async fn create_note_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> HttpResponse {
    let text = body.0.text.trim().to_string();
    let usecase = CreateNoteUseCase { text: text.clone() };
    let res = execute(usecase, &ctx).await;

    HttpResponse::Ok().json(APIResponse::new(create_note_reply(&text, &res)))
}

/// Writes a note file and shows it in the default text viewer
#[derive(Debug)]
pub struct CreateNoteUseCase {
    pub text: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyNote,
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNoteUseCase {
    type Response = PathBuf;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateNote";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(UseCaseErrors::EmptyNote);
        }

        let note = Note {
            file_name: note_file_name(ctx.sys.now()),
            content: text.to_string(),
        };
        let path = ctx
            .repos
            .note_repo
            .insert(&note)
            .await
            .map_err(UseCaseErrors::StorageError)?;

        if let Err(e) = ctx.desktop.open_path(&path) {
            warn!("Note was written but could not be opened: {:?}", e);
        }

        Ok(path)
    }
}
