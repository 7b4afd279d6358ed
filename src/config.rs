//! Configuration management for Mindmap Server

use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::upload::MAX_FILE_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted PDF, in bytes
    pub max_file_size: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            upload: UploadConfig {
                max_file_size: MAX_FILE_SIZE,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var(&lookup, "SERVER_PORT", 3000)?,
            },
            upload: UploadConfig {
                max_file_size: parse_var(&lookup, "MINDMAP_MAX_UPLOAD_BYTES", MAX_FILE_SIZE)?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
