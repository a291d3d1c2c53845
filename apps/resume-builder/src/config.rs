use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DATA_DIR: &str = "./.resume-data";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: data_dir(std::env::var("RESUME_DATA_DIR").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn data_dir(raw: Option<String>) -> Result<PathBuf> {
    let raw = raw.unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("path is empty"))
            .context("RESUME_DATA_DIR must be a directory path");
    }
    Ok(PathBuf::from(trimmed))
}
