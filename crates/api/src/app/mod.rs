mod open_app;

use actix_web::web;
use open_app::open_app_controller;

pub use open_app::{open_app_reply, OpenAppUseCase, WHICH_APP_REPLY};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/open_app", web::post().to(open_app_controller));
}
