use anyhow::{Context, Result};
use clap::Parser;
use ocrkit::common::init_logger_exe;
use ocrkit::image2text::{OcrConfig, TesseractEngine};
use ocrkit::server::{create_app, AppState, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(version, about = "HTTP service extracting text from base64 images", long_about = None)]
struct Cli {
    #[arg(long, env = "OCR_HOST", default_value = "0.0.0.0", help = "Address to listen on")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 8000, help = "Port to listen on")]
    port: u16,

    #[arg(long, env = "OCR_LANG", default_value = "eng", help = "Tesseract language pack(s), e.g. eng+deu")]
    lang: String,

    #[arg(long, help = "Image resolution hint in dots per inch")]
    dpi: Option<u32>,

    #[arg(long, help = "Page segmentation mode used when orientation classification is off")]
    psm: Option<u32>,

    #[arg(long, help = "OCR engine mode")]
    oem: Option<u32>,

    #[arg(long, help = "Skip orientation classification")]
    no_orientation: bool,

    #[arg(long, env = "OCR_TEMP_DIR", help = "Directory for per-request scratch images [default: system temp dir]")]
    temp_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 20 * 1024 * 1024, help = "Largest accepted request body in bytes")]
    max_body_bytes: usize,

    #[arg(long, help = "Bound on simultaneous engine calls (1 serialises them)")]
    max_concurrent_recognitions: Option<usize>,
}

impl Cli {
    fn ocr_config(&self) -> OcrConfig {
        OcrConfig::new(
            self.lang.clone(),
            self.dpi,
            self.psm,
            self.oem,
            !self.no_orientation,
        )
    }

    fn server_config(&self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            temp_dir: self.temp_dir.clone().unwrap_or(defaults.temp_dir),
            max_body_bytes: self.max_body_bytes,
            max_concurrent_recognitions: self.max_concurrent_recognitions,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger_exe();
    let cli = Cli::parse();

    log::info!("Starting server...");

    // Loaded once, shared by every request
    let engine = TesseractEngine::new(cli.ocr_config()).context("Failed to initialise OCR engine")?;
    let config = cli.server_config();

    if !config.temp_dir.is_dir() {
        anyhow::bail!("Temporary directory does not exist: {}", config.temp_dir.display());
    }

    let addr = config.bind_addr();
    log::info!("Attempting to bind to {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    log::info!("Successfully bound to http://{}", listener.local_addr()?);
    log::info!(
        "Scratch images in {}, body limit {} bytes, recognition limit {:?}",
        config.temp_dir.display(),
        config.max_body_bytes,
        config.max_concurrent_recognitions
    );

    let app = create_app(AppState::new(Arc::new(engine), config));
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
