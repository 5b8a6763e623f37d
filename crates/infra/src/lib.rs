mod config;
mod desktop;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use desktop::{notification_command, IDesktop, ProcessSpec, RealDesktop, RecordingDesktop};
pub use repos::{
    FsNoteRepo, IActivityRepo, INoteRepo, IReminderRepo, InMemoryActivityRepo, InMemoryNoteRepo,
    InMemoryReminderRepo, JsonActivityRepo, JsonReminderRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct SavinContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub desktop: Arc<dyn IDesktop>,
    pub language_model: Arc<dyn ILanguageModel>,
}

impl SavinContext {
    fn create(config: Config) -> Self {
        let language_model =
            OllamaClient::new(config.ollama_api_url.clone(), config.ollama_model.clone());
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        Self {
            repos: Repos::create_local(&config, sys.clone()),
            config,
            sys,
            desktop: Arc::new(RealDesktop {}),
            language_model: Arc::new(language_model),
        }
    }

    /// Context without side effects: in-memory repositories, a recording
    /// desktop and an unreachable language model
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            desktop: Arc::new(RecordingDesktop::new()),
            language_model: Arc::new(StaticLanguageModel::unreachable()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> SavinContext {
    SavinContext::create(Config::new())
}
