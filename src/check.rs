//! The credential check and its report.
//!
//! A run loads the optional env file, reads the credential and settles on one
//! of three outcomes. Load and lookup failures are folded into
//! [`Outcome::Errored`] so callers only ever see an outcome.

use crate::config::{load_env_file, Config, EnvFileSource, API_KEY_VAR};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Key present; `length` is its character count.
    Found { length: usize },
    Missing,
    Errored(String),
}

impl Outcome {
    pub fn from_config(config: &Config) -> Self {
        match config.api_key_length() {
            Some(length) => Outcome::Found { length },
            None => Outcome::Missing,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Found { length } => vec![
                "✅ API Key loaded successfully".to_string(),
                format!("🔑 Key length: {} characters", length),
                "🚀 Ready to use OpenAI API".to_string(),
            ],
            Outcome::Missing => vec![
                "❌ API Key not found".to_string(),
                "💡 Please check your .env file or environment variables".to_string(),
                format!("📝 Make sure {} is set", API_KEY_VAR),
            ],
            Outcome::Errored(message) => {
                vec![format!("❌ Error loading configuration: {}", message)]
            }
        }
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> crate::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Loads the env file, reads the credential and reports what was found.
pub fn run(source: &EnvFileSource) -> Outcome {
    let outcome = match load_config(source) {
        Ok(config) => Outcome::from_config(&config),
        Err(e) => {
            debug!("Configuration check failed: {}", e);
            Outcome::Errored(e.to_string())
        }
    };
    info!(success = outcome.is_success(), "Credential check finished");
    outcome
}

fn load_config(source: &EnvFileSource) -> crate::Result<Config> {
    load_env_file(source)?;
    Ok(Config::from_env())
}
