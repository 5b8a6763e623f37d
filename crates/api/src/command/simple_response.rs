use super::fallback::respond;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use savin_api_structs::simple_response::*;
use savin_infra::SavinContext;

pub const NOT_UNDERSTOOD_REPLY: &str = "I couldn't understand that. Please try again.";

pub async fn simple_response_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SavinContext>,
) -> HttpResponse {
    let usecase = ChatUseCase {
        query: body.0.query,
    };

    let response = match execute(usecase, &ctx).await {
        Ok(response) => response,
        Err(e) => match e {},
    };
    HttpResponse::Ok().json(APIResponse::new(response))
}

/// Answers a query with the conversational fallback only, skipping every
/// command
#[derive(Debug)]
pub struct ChatUseCase {
    pub query: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for ChatUseCase {
    type Response = String;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "Chat";

    async fn execute(&mut self, ctx: &SavinContext) -> Result<Self::Response, Self::Errors> {
        let query = self.query.trim();
        if query.is_empty() {
            return Ok(NOT_UNDERSTOOD_REPLY.to_string());
        }
        Ok(respond(query, ctx).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn empty_queries_are_not_sent_anywhere() {
        let ctx = SavinContext::create_inmemory();
        let res = execute(ChatUseCase { query: " ".into() }, &ctx).await;
        assert_eq!(res.unwrap(), NOT_UNDERSTOOD_REPLY);
    }
}
