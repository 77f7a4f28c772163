pub mod ocr;
pub use ocr::{BoundingBox, Detection, OcrConfig, OcrEngine, RecognitionResult, TesseractEngine};
