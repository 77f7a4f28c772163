use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;

use crate::image2text::OcrEngine;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub temp_dir: PathBuf,
    pub max_body_bytes: usize,
    /// `None` leaves engine calls unbounded; `Some(1)` serialises them.
    pub max_concurrent_recognitions: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            temp_dir: std::env::temp_dir(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_concurrent_recognitions: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared by every request. The engine is loaded once and only read.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn OcrEngine>,
    pub config: Arc<ServerConfig>,
    pub recognition_permits: Option<Arc<Semaphore>>,
}

impl AppState {
    pub fn new(engine: Arc<dyn OcrEngine>, config: ServerConfig) -> Self {
        let recognition_permits = config
            .max_concurrent_recognitions
            .filter(|limit| *limit > 0)
            .map(|limit| Arc::new(Semaphore::new(limit)));

        Self {
            engine,
            config: Arc::new(config),
            recognition_permits,
        }
    }
}
