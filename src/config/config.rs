use std::env;

use thiserror::Error;

use crate::command::PROGRAM;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Program name the generated commands start with.
    pub program: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // 加载 .env 文件
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let program = lookup("RSYNC_PREVIEW_PROGRAM").unwrap_or_else(|| PROGRAM.to_string());
        if program.trim().is_empty() {
            return Err(ConfigError::Empty {
                var: "RSYNC_PREVIEW_PROGRAM",
            });
        }

        Ok(Self {
            host: lookup("RSYNC_PREVIEW_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: number(&lookup, "RSYNC_PREVIEW_PORT")?.unwrap_or(8080),
            workers: number(&lookup, "RSYNC_PREVIEW_WORKERS")?.unwrap_or_else(num_cpus::get),
            program,
        })
    }
}

fn number<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
