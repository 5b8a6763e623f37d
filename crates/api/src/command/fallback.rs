use savin_domain::small_talk_reply;
use savin_infra::{LanguageModelError, SavinContext};
use tracing::error;

const PERSONA: &str = "You are Savin, a helpful voice assistant running on the user's computer. \
    Keep your answers concise, friendly and easy to read out loud. \
    Besides conversation you can open applications, set reminders and take notes, \
    so suggest those when they fit the request.";

pub const UNREACHABLE_REPLY: &str = "I can't reach my language model right now. \
    Please make sure Ollama is running locally on port 11434.";
pub const SERVICE_ERROR_REPLY: &str =
    "I'm having trouble connecting to my language model. Please try again later.";
pub const PROCESSING_ERROR_REPLY: &str =
    "I encountered an error while processing your request. Please try again.";

/// Answers free text conversationally. Never fails, every problem with the
/// language model is turned into an apology.
pub async fn respond(text: &str, ctx: &SavinContext) -> String {
    if !ctx.config.ollama_enabled {
        return small_talk_reply(text);
    }

    match ctx.language_model.generate(text, Some(PERSONA)).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Language model request failed: {}", e);
            match e {
                LanguageModelError::Connection(_) => UNREACHABLE_REPLY.to_string(),
                LanguageModelError::Status { .. } => SERVICE_ERROR_REPLY.to_string(),
                LanguageModelError::Other(_) => PROCESSING_ERROR_REPLY.to_string(),
            }
        }
    }
}
