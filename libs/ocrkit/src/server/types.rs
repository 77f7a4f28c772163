use serde::{Deserialize, Serialize};

/// Body of `POST /ocr`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    /// Base64 image, optionally prefixed with `data:<mime>;base64,`
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl OcrRequest {
    /// The image payload, or `None` when it is missing or empty.
    pub fn image(&self) -> Option<&str> {
        self.image_base64.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
