mod create_note;
mod get_notes;

use actix_web::web;
use create_note::create_note_controller;
use get_notes::get_notes_controller;

pub use create_note::{create_note_reply, CreateNoteUseCase, WHAT_TO_WRITE_REPLY};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/notes", web::post().to(create_note_controller));
    cfg.route("/notes", web::get().to(get_notes_controller));
}
