use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Directory holding the reminders and the activity log documents
    pub data_dir: PathBuf,
    /// Directory where notes are written
    pub notes_dir: PathBuf,
    /// Generate endpoint of the local language model service
    pub ollama_api_url: String,
    /// Model the language model service should answer with
    pub ollama_model: String,
    /// When disabled unmatched commands get rule based small talk instead
    pub ollama_enabled: bool,
    /// How often the reminder scheduler looks for due reminders
    pub reminder_check_interval: Duration,
}

impl Config {
    pub fn new() -> Self {
        let home_dir = match dirs::home_dir() {
            Some(dir) => dir,
            None => {
                warn!("Could not find the home directory, falling back to the working directory.");
                PathBuf::from(".")
            }
        };

        let data_dir = std::env::var("SAVIN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir.join(".savin"));
        let notes_dir = std::env::var("SAVIN_NOTES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir.join("Savin Notes"));
        info!(
            "Storing data in {} and notes in {}",
            data_dir.display(),
            notes_dir.display()
        );

        let ollama_api_url = std::env::var("OLLAMA_API_URL")
            .unwrap_or_else(|_| "http://localhost:11434/api/generate".into());
        let ollama_model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "mistral".into());
        let ollama_enabled = match std::env::var("OLLAMA_ENABLED") {
            Ok(enabled) => !matches!(enabled.to_lowercase().as_str(), "false" | "0" | "no"),
            Err(_) => true,
        };

        Self {
            port: parse_env_or("PORT", 5000),
            data_dir,
            notes_dir,
            ollama_api_url,
            ollama_model,
            ollama_enabled,
            reminder_check_interval: Duration::from_secs(parse_env_or(
                "REMINDER_CHECK_INTERVAL_SECS",
                60,
            )),
        }
    }

    pub fn reminders_file(&self) -> PathBuf {
        self.data_dir.join("reminders.json")
    }

    pub fn activity_log_file(&self) -> PathBuf {
        self.data_dir.join("activity_log.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
