use savin_api::Application;
use savin_infra::{RecordingDesktop, SavinContext};
use savin_sdk::SavinSDK;
use std::sync::Arc;

pub struct TestApp {
    pub ctx: SavinContext,
    pub desktop: Arc<RecordingDesktop>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, SavinSDK, String) {
    let mut ctx = SavinContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.ollama_enabled = false;
    let desktop = Arc::new(RecordingDesktop::new());
    ctx.desktop = desktop.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, desktop };
    let sdk = SavinSDK::new(address.clone());
    (app, sdk, address)
}
