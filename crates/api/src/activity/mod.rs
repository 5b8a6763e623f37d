mod get_activity_log;
mod log_activity;

use actix_web::web;
use get_activity_log::get_activity_log_controller;
use log_activity::log_activity_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/log_activity", web::post().to(log_activity_controller));
    cfg.route("/get_activity_log", web::get().to(get_activity_log_controller));
}
