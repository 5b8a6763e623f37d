mod fallback;
mod process_command;
mod simple_response;

use crate::error::GENERIC_APOLOGY;
use actix_web::{
    error::{InternalError, JsonPayloadError},
    web, HttpRequest, HttpResponse,
};
use process_command::process_command_controller;
use savin_api_structs::AssistantResponse;
use simple_response::simple_response_controller;
use tracing::warn;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/process_command")
            .app_data(command_json_config())
            .route(web::post().to(process_command_controller)),
    );
    cfg.service(
        web::resource("/simple_response")
            .app_data(command_json_config())
            .route(web::post().to(simple_response_controller)),
    );
}

/// The page speaks whatever comes back, so unreadable commands still get
/// a spoken apology instead of a client error
fn command_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(apologize_for_payload)
}

fn apologize_for_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Unreadable command payload: {}", err);
    let response = HttpResponse::Ok().json(AssistantResponse::new(GENERIC_APOLOGY));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use savin_infra::SavinContext;

    #[actix_web::test]
    async fn malformed_commands_get_an_apology() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SavinContext::create_inmemory()))
                .service(web::scope("/api").configure(configure_routes)),
        )
        .await;

        for path in &["/api/process_command", "/api/simple_response"] {
            let req = test::TestRequest::post()
                .uri(path)
                .insert_header(("content-type", "application/json"))
                .set_payload("{\"query\": ")
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);

            let body: AssistantResponse = test::read_body_json(res).await;
            assert_eq!(body, AssistantResponse::new(GENERIC_APOLOGY));
        }
    }
}
