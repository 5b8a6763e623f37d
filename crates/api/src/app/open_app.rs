use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::open_app::*;
use savin_domain::{resolve_launch_command, LaunchCommand, OsFamily};
use savin_infra::SavinContext;

pub const WHICH_APP_REPLY: &str = "Which app would you like me to open?";

/// The reply for an attempt to open `app`
pub fn open_app_reply(app: &str, res: &Result<LaunchCommand, UseCaseErrors>) -> String {
    match res {
        Ok(_) => format!("Opening {}", app),
        Err(UseCaseErrors::EmptyName) => WHICH_APP_REPLY.to_string(),
        Err(_) => format!(
            "I couldn't find or open {}. Can you try with a different application?",
            app
        ),
    }
}

pub async fn open_app_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> HttpResponse {
    let app = body.0.app;
    let usecase = OpenAppUseCase {
        app: app.clone(),
        os: OsFamily::current(),
    };
    let res = execute(usecase, &ctx).await;

    HttpResponse::Ok().json(APIResponse::new(open_app_reply(app.trim(), &res)))
}

/// Starts an application by its spoken name. Succeeds as soon as the OS
/// accepted the launch request.
#[derive(Debug)]
pub struct OpenAppUseCase {
    pub app: String,
    /// `None` on systems without an app table
    pub os: Option<OsFamily>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyName,
    UnsupportedOs,
    LaunchFailed(anyhow::Error),
}

#[async_trait::async_trait(?Send)]
impl UseCase for OpenAppUseCase {
    type Response = LaunchCommand;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "OpenApp";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let os = self.os.ok_or(UseCaseErrors::UnsupportedOs)?;
        let command = resolve_launch_command(&self.app, os).ok_or(UseCaseErrors::EmptyName)?;

        ctx.desktop
            .launch(&command)
            .map_err(UseCaseErrors::LaunchFailed)?;

        Ok(command)
    }
}
