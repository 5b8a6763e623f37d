use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

pub const GENERIC_APOLOGY: &str =
    "I encountered an error processing your request. Please try again.";

#[derive(Error, Debug)]
pub enum SavinError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
}

#[derive(Serialize)]
struct ErrorBody {
    response: &'static str,
    error: String,
}

impl actix_web::error::ResponseError for SavinError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Errors are still answered in the assistant's voice so the page always
    /// has something to say
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            response: GENERIC_APOLOGY,
            error: self.to_string(),
        })
    }
}
