// OCR module structure
mod ocr_tesseract;
mod types;

pub use ocr_tesseract::TesseractEngine;
pub use types::{BoundingBox, Detection, OcrConfig, RecognitionResult};

use anyhow::Result;
use std::path::Path;

/// A loaded recognition engine.
///
/// Engines are built once at startup and shared behind an `Arc`; calls are
/// blocking and are dispatched from the tokio blocking pool, possibly from
/// several threads at once.
pub trait OcrEngine: Send + Sync {
    fn name(&self) -> &str;

    /// Whether callers should request orientation classification.
    fn classify_orientation(&self) -> bool {
        true
    }

    /// Recognize the image stored at `path`. Detections keep the engine's
    /// reading order.
    fn recognize(&self, path: &Path, classify_orientation: bool) -> Result<RecognitionResult>;
}
