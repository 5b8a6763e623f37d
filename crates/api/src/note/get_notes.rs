use crate::error::SavinError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::dtos::NoteDTO;
use savin_api_structs::get_notes::*;
use savin_domain::Note;
use savin_infra::SavinContext;

pub const DEFAULT_NOTES_LIMIT: usize = 5;

pub async fn get_notes_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<SavinContext>,
) -> Result<HttpResponse, SavinError> {
    let usecase = GetNotesUseCase {
        limit: query.limit.unwrap_or(DEFAULT_NOTES_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|notes| {
            let notes: APIResponse = notes.into_iter().map(NoteDTO::new).collect();
            HttpResponse::Ok().json(notes)
        })
        .map_err(|e| match e {
            UseCaseErrors::StorageError(_) => SavinError::InternalError,
        })
}

/// The most recently written notes, newest first
#[derive(Debug)]
pub struct GetNotesUseCase {
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotesUseCase {
    type Response = Vec<Note>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetNotes";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .note_repo
            .find_recent(self.limit)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
