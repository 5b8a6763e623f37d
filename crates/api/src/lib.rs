mod activity;
mod app;
mod command;
mod error;
mod job_schedulers;
mod note;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpResponse, HttpServer};
use error::SavinError;
use job_schedulers::ReminderScheduler;
use savin_infra::SavinContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

const INDEX_PAGE: &str = include_str!("../static/index.html");

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    activity::configure_routes(cfg);
    app::configure_routes(cfg);
    command::configure_routes(cfg);
    note::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

pub struct Application {
    server: Server,
    port: u16,
    reminder_scheduler: ReminderScheduler,
}

impl Application {
    pub async fn new(context: SavinContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let mut reminder_scheduler = ReminderScheduler::new();
        reminder_scheduler.start(context);

        Ok(Self {
            server,
            port,
            reminder_scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: SavinContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("127.0.0.1:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Savin is listening on http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    SavinError::BadClientData(err.to_string()).into()
                }))
                .route("/", web::get().to(index))
                .service(web::scope("/api").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves requests until the server shuts down, then stops the
    /// background jobs
    pub async fn start(mut self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        self.reminder_scheduler.stop();
        res
    }
}
