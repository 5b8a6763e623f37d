use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::log_activity::*;
use savin_domain::ActivityLogEntry;
use savin_infra::SavinContext;

pub const UNSPECIFIED_ACTIVITY: &str = "unspecified";

pub async fn log_activity_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> HttpResponse {
    let body = body.0;
    let usecase = LogActivityUseCase {
        activity_type: body
            .activity_type
            .unwrap_or_else(|| UNSPECIFIED_ACTIVITY.to_string()),
        details: body
            .details
            .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
    };

    match execute(usecase, &ctx).await {
        Ok(_) => HttpResponse::Ok().json(APIResponse::success()),
        Err(UseCaseErrors::StorageError(e)) => {
            HttpResponse::InternalServerError().json(APIResponse::error(e.to_string()))
        }
    }
}

#[derive(Debug)]
pub struct LogActivityUseCase {
    pub activity_type: String,
    pub details: serde_json::Value,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for LogActivityUseCase {
    type Response = ActivityLogEntry;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "LogActivity";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let entry = ActivityLogEntry::new(
            ctx.sys.now(),
            self.activity_type.clone(),
            self.details.clone(),
        );

        ctx.repos
            .activity_repo
            .insert(&entry)
            .await
            .map_err(UseCaseErrors::StorageError)?;

        Ok(entry)
    }
}
