pub mod check_due_reminders;
mod create_reminder;
mod get_reminders;

use actix_web::web;
use create_reminder::create_reminder_controller;
use get_reminders::get_reminders_controller;

pub use create_reminder::{reminder_set_reply, CreateReminderUseCase, REMINDER_FAILED_REPLY};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
}
