use actix_web::{web, HttpResponse};
use savin_api_structs::get_service_status::*;
use savin_infra::SavinContext;
use tracing::warn;

const PROBE_PROMPT: &str = "test";

/// Reachability of the language model: `disabled`, `running` or `error`
async fn language_model_status(ctx: &SavinContext) -> &'static str {
    if !ctx.config.ollama_enabled {
        return "disabled";
    }
    match ctx.language_model.generate(PROBE_PROMPT, None).await {
        Ok(_) => "running",
        Err(e) => {
            warn!("Language model status check failed: {}", e);
            "error"
        }
    }
}

async fn status(ctx: web::Data<SavinContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        status: "running".into(),
        ollama_status: language_model_status(&ctx).await.into(),
        time: ctx.sys.now().format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status));
}
