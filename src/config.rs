use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable holding the credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Where the optional env file comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnvFileSource {
    /// Search for `.env` in the working directory and its ancestors.
    #[default]
    Discover,
    /// Load exactly this file.
    Path(PathBuf),
}

/// Loads the env file into the process environment.
///
/// Variables already present in the environment are never overridden. A
/// missing file is not an error and yields `Ok(None)`; any other failure
/// (unreadable file, malformed line) is returned.
pub fn load_env_file(source: &EnvFileSource) -> Result<Option<PathBuf>, ConfigError> {
    let loaded = match source {
        EnvFileSource::Discover => dotenvy::dotenv(),
        EnvFileSource::Path(path) => dotenvy::from_path(path).map(|()| path.clone()),
    };

    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            debug!("No env file found, using process environment only");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Default)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
}

impl Config {
    /// Reads the key from the process environment.
    ///
    /// Invalid UTF-8 in the value is replaced rather than rejected, one
    /// replacement character per invalid sequence.
    pub fn from_env() -> Self {
        let value = env::var_os(API_KEY_VAR).map(|v| v.to_string_lossy().into_owned());
        Self::from_value(value)
    }

    /// Builds a config from an arbitrary lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::from_value(lookup(API_KEY_VAR))
    }

    // An empty value counts as unset.
    fn from_value(value: Option<String>) -> Self {
        Self {
            openai_api_key: value.filter(|v| !v.is_empty()).map(SecretString::new),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Length of the key in characters, not bytes.
    pub fn api_key_length(&self) -> Option<usize> {
        self.openai_api_key
            .as_ref()
            .map(|key| key.expose_secret().chars().count())
    }
}
