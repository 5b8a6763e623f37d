use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::dtos::ReminderDTO;
use savin_domain::Reminder;
use savin_infra::SavinContext;

pub async fn get_reminders_controller(ctx: web::Data<SavinContext>) -> HttpResponse {
    match execute(GetRemindersUseCase {}, &ctx).await {
        Ok(reminders) => HttpResponse::Ok().json(
            reminders
                .into_iter()
                .map(ReminderDTO::new)
                .collect::<Vec<_>>(),
        ),
        Err(e) => match e {},
    }
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.reminder_repo.find_all().await)
    }
}
