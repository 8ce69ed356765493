//! CLI entry point - the composition root.
//!
//! This is the only place where infrastructure is wired together: the
//! reqwest-backed assistant client, the print-only speech engine and the
//! terminal renderer all meet here and everything else goes through
//! `AppCore`.

mod render;
mod repl;
mod speech;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use docvoz_backend::{BackendClientConfig, DefaultDocvozClient};
use docvoz_core::{AppCore, UiCommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docvoz", version, about = "Asistente de documentos en la terminal")]
struct Cli {
    /// Backend base URL
    #[arg(
        long,
        default_value = "http://127.0.0.1:5000",
        env = "DOCVOZ_BACKEND_URL"
    )]
    backend_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Document to upload on startup (.pdf or .docx)
    document: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = BackendClientConfig::new()
        .with_base_url(cli.backend_url.as_str())
        .with_timeout(Duration::from_secs(cli.timeout));
    let backend = Arc::new(
        DefaultDocvozClient::from_config(&config)
            .with_context(|| format!("URL del backend inválida: {}", cli.backend_url))?,
    );
    info!(backend_url = %cli.backend_url, "backend client ready");

    let core = AppCore::new(
        backend,
        Arc::new(speech::ConsoleSpeech::new()),
        Arc::new(render::TerminalRenderer::new()),
    );
    core.greet();

    if let Some(path) = &cli.document {
        upload_from_disk(&core, path).await?;
    }

    repl::run(&core).await
}

async fn upload_from_disk(core: &AppCore, path: &Path) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("no se pudo leer {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| "documento".to_string(), |n| n.to_string_lossy().into_owned());
    core.dispatch(UiCommand::UploadFile { name, bytes }).await;
    Ok(())
}
