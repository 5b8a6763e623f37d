use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::dtos::ActivityLogEntryDTO;
use savin_api_structs::get_activity_log::*;
use savin_domain::ActivityLogEntry;
use savin_infra::SavinContext;

pub async fn get_activity_log_controller(ctx: web::Data<SavinContext>) -> HttpResponse {
    match execute(GetActivityLogUseCase {}, &ctx).await {
        Ok(entries) => {
            let entries: APIResponse = entries
                .into_iter()
                .map(ActivityLogEntryDTO::new)
                .collect();
            HttpResponse::Ok().json(entries)
        }
        Err(e) => match e {},
    }
}

#[derive(Debug)]
pub struct GetActivityLogUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetActivityLogUseCase {
    type Response = Vec<ActivityLogEntry>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetActivityLog";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.activity_repo.find_all().await)
    }
}
