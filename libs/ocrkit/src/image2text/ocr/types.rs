use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OcrConfig {
    pub lang: String,
    pub dpi: Option<u32>, // dots per inch
    pub psm: Option<u32>, // Page segmentation mode
    pub oem: Option<u32>, // OCR Engine Mode
    pub classify_orientation: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            lang: Self::get_default_lang(),
            dpi: None,
            psm: None,
            oem: None,
            classify_orientation: true,
        }
    }
}

impl OcrConfig {
    pub fn new(
        lang: impl Into<String>,
        dpi: Option<u32>,
        psm: Option<u32>,
        oem: Option<u32>,
        classify_orientation: bool,
    ) -> Self {
        Self {
            lang: lang.into(),
            dpi,
            psm,
            oem,
            classify_orientation,
        }
    }

    pub fn get_default_lang() -> String {
        "eng".to_string()
    }

    /// Fully automatic page segmentation, no orientation detection.
    pub fn get_default_psm() -> u32 {
        3
    }

    /// Automatic page segmentation with orientation and script detection.
    pub fn get_orientation_psm() -> u32 {
        1
    }

    pub fn get_default_oem() -> u32 {
        1
    }

    /// Segmentation mode for one recognition call.
    pub fn effective_psm(&self, classify_orientation: bool) -> u32 {
        if classify_orientation {
            Self::get_orientation_psm()
        } else {
            self.psm.unwrap_or(Self::get_default_psm())
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = (self.left + self.width).max(other.left + other.width);
        let bottom = (self.top + self.height).max(other.top + other.height);
        BoundingBox::new(left, top, right - left, bottom - top)
    }
}

/// One located piece of recognized text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bounds: BoundingBox,
    pub text: String,
    pub confidence: f32, // 0.0 - 1.0
}

impl Detection {
    pub fn new(bounds: BoundingBox, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bounds,
            text: text.into(),
            confidence,
        }
    }
}

/// Detections in the order the engine reported them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub detections: Vec<Detection>,
}

impl RecognitionResult {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn texts(&self) -> Vec<String> {
        self.detections.iter().map(|d| d.text.clone()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.detections.into_iter().map(|d| d.text).collect()
    }
}
