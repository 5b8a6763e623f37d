mod language_model;

pub use language_model::{
    ILanguageModel, LanguageModelError, OllamaClient, StaticLanguageModel, NO_RESPONSE_GENERATED,
};
