use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_builder::config::Config;
use resume_builder::errors::AppError;
use resume_builder::export::{export, ExportFormat, PdfRenderer};
use resume_builder::storage::FileStorage;
use resume_builder::store::ResumeStore;

/// The shell has no print service; PDF export needs a platform renderer.
struct NoPdfRenderer;

#[async_trait]
impl PdfRenderer for NoPdfRenderer {
    async fn render_pdf(&self, _html: &str) -> Result<Bytes, AppError> {
        Err(AppError::Renderer("no PDF renderer is configured".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {}", config.data_dir.display());

    let storage = Arc::new(FileStorage::new(config.data_dir.clone()));
    let store = ResumeStore::open(storage).await;

    let document = store.document();
    info!(
        "Loaded resume for '{}' ({} skills, {} experiences, template {}), editing {}",
        document.personal_info.full_name,
        document.skills.len(),
        document.experiences.len(),
        document.template.resolve().display_name(),
        store.current_section().title(),
    );

    let format = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<ExportFormat>(),
        None => Ok(ExportFormat::Txt),
    };

    match format {
        Ok(format) => match export(&document, format, &NoPdfRenderer).await {
            Ok(artifact) => {
                tokio::fs::create_dir_all(&config.data_dir)
                    .await
                    .with_context(|| format!("failed to create {}", config.data_dir.display()))?;
                let path = config.data_dir.join(&artifact.file_name);
                tokio::fs::write(&path, &artifact.bytes)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("Wrote {} ({})", path.display(), artifact.mime_type);
            }
            Err(e) => warn!("Export failed: {}", e.user_message()),
        },
        Err(e) => warn!("{}", e.user_message()),
    }

    store.flush().await.context("failed to save resume data")?;
    Ok(())
}
