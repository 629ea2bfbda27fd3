pub mod check;
pub mod config;

pub use check::Outcome;
pub use config::{Config, EnvFileSource};

#[derive(Debug, thiserror::Error)]
pub enum KeycheckError {
    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeycheckError>;
