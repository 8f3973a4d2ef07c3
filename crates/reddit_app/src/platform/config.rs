use std::fs;
use std::path::Path;
use std::time::Duration;

use reddit_core::{
    CacheKeyPolicy, ErrorResultPolicy, SearchMode, SessionConfig, StartupPolicy, DEFAULT_BASE_URL,
    DEFAULT_RECOMMENDED_TOPICS,
};
use reddit_engine::FetchSettings;
use search_logging::{search_info, search_warn};
use serde::{Deserialize, Serialize};

use super::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum ModeSetting {
    #[default]
    Keyword,
    Subreddit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum CacheKeySetting {
    TermOnly,
    #[default]
    FullQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum ErrorResultsSetting {
    #[default]
    KeepPrevious,
    Clear,
}

/// Contents of the RON config file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub mode: ModeSetting,
    pub base_url: String,
    pub cache_keys: CacheKeySetting,
    pub error_results: ErrorResultsSetting,
    /// Query submitted automatically at startup, e.g. `Some("popular")`.
    pub startup_query: Option<String>,
    pub recommended_topics: Vec<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_keys: CacheKeySetting::default(),
            error_results: ErrorResultsSetting::default(),
            startup_query: None,
            recommended_topics: DEFAULT_RECOMMENDED_TOPICS
                .iter()
                .map(|topic| (*topic).to_string())
                .collect(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn apply_args(mut self, args: &Args) -> Self {
        if let Some(mode) = args.mode {
            self.mode = match mode {
                SearchMode::Keyword => ModeSetting::Keyword,
                SearchMode::Subreddit => ModeSetting::Subreddit,
            };
        }
        if let Some(base_url) = &args.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(startup) = &args.startup {
            self.startup_query = Some(startup.clone());
        }
        self
    }

    pub(crate) fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: match self.mode {
                ModeSetting::Keyword => SearchMode::Keyword,
                ModeSetting::Subreddit => SearchMode::Subreddit,
            },
            base_url: self.base_url.clone(),
            cache_keys: match self.cache_keys {
                CacheKeySetting::TermOnly => CacheKeyPolicy::TermOnly,
                CacheKeySetting::FullQuery => CacheKeyPolicy::FullQuery,
            },
            error_results: match self.error_results {
                ErrorResultsSetting::KeepPrevious => ErrorResultPolicy::KeepPrevious,
                ErrorResultsSetting::Clear => ErrorResultPolicy::Clear,
            },
            startup: self
                .startup_query
                .as_deref()
                .map(str::trim)
                .filter(|query| !query.is_empty())
                .map_or(StartupPolicy::Idle, |query| {
                    StartupPolicy::Fetch(query.to_string())
                }),
            recommended_topics: self.recommended_topics.clone(),
        }
    }

    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }
}

/// Reads the config file, falling back to defaults when it is missing or
/// malformed.
pub(crate) fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            search_info!("No config at {:?}; using defaults", path);
            return AppConfig::default();
        }
        Err(err) => {
            search_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            search_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            search_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
