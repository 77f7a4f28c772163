use anyhow::Result;
use rusty_tesseract::{Args, DataOutput, Image};
use std::collections::HashMap;
use std::path::Path;

use super::types::{BoundingBox, Detection, OcrConfig, RecognitionResult};
use super::OcrEngine;

/// Engine backed by the `tesseract` executable.
pub struct TesseractEngine {
    config: OcrConfig,
    version: String,
}

impl TesseractEngine {
    /// Checks that tesseract can be launched; failing here keeps a broken
    /// install from surfacing only on the first request.
    pub fn new(config: OcrConfig) -> Result<Self> {
        let version = rusty_tesseract::get_tesseract_version()
            .map_err(|err| anyhow::anyhow!("Tesseract is not available: {}", err))?;
        log::info!(
            "Tesseract {} ready (lang: {}, orientation: {})",
            version.lines().next().unwrap_or_default(),
            config.lang,
            config.classify_orientation
        );
        Ok(Self { config, version })
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn args(&self, classify_orientation: bool) -> Args {
        Args {
            lang: self.config.lang.clone(),
            config_variables: HashMap::from([("tessedit_create_tsv".into(), "1".into())]),
            dpi: self.config.dpi.map(|dpi| dpi as i32),
            psm: Some(self.config.effective_psm(classify_orientation) as i32),
            oem: Some(self.config.oem.unwrap_or(OcrConfig::get_default_oem()) as i32),
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn classify_orientation(&self) -> bool {
        self.config.classify_orientation
    }

    fn recognize(&self, path: &Path, classify_orientation: bool) -> Result<RecognitionResult> {
        let image = Image::from_path(path.to_path_buf())
            .map_err(|err| anyhow::anyhow!("Error loading image {}: {}", path.display(), err))?;

        let data_output = rusty_tesseract::image_to_data(&image, &self.args(classify_orientation))
            .map_err(|err| anyhow::anyhow!("Tesseract failed: {}", err))?;

        Ok(data_output_to_result(&data_output))
    }
}

/// One word row of tesseract's TSV output.
#[derive(Clone, Debug, PartialEq)]
struct WordBox {
    line_key: (i32, i32, i32, i32), // page, block, paragraph, line
    bounds: BoundingBox,
    conf: f32, // 0 - 100, negative for structural rows
    text: String,
}

fn data_output_to_result(data_output: &DataOutput) -> RecognitionResult {
    let words = data_output
        .data
        .iter()
        .map(|row| WordBox {
            line_key: (row.page_num, row.block_num, row.par_num, row.line_num),
            bounds: BoundingBox::new(row.left, row.top, row.width, row.height),
            conf: row.conf,
            text: row.text.clone(),
        })
        .collect::<Vec<WordBox>>();
    group_lines(&words)
}

struct LineBuilder<'a> {
    key: (i32, i32, i32, i32),
    bounds: BoundingBox,
    words: Vec<&'a str>,
    conf_sum: f32,
}

impl<'a> LineBuilder<'a> {
    fn start(word: &'a WordBox, text: &'a str) -> Self {
        Self {
            key: word.line_key,
            bounds: word.bounds,
            words: vec![text],
            conf_sum: word.conf,
        }
    }

    fn push(&mut self, word: &'a WordBox, text: &'a str) {
        self.bounds = self.bounds.union(&word.bounds);
        self.words.push(text);
        self.conf_sum += word.conf;
    }

    fn finish(self) -> Detection {
        let confidence = self.conf_sum / self.words.len() as f32 / 100.0;
        Detection::new(self.bounds, self.words.join(" "), confidence.clamp(0.0, 1.0))
    }
}

/// Folds word rows into line detections, keeping tesseract's reading order.
fn group_lines(words: &[WordBox]) -> RecognitionResult {
    let mut detections = Vec::new();
    let mut current: Option<LineBuilder> = None;

    for word in words {
        let text = word.text.trim();
        if text.is_empty() || word.conf < 0.0 {
            continue;
        }

        match current.as_mut() {
            Some(line) if line.key == word.line_key => line.push(word, text),
            _ => {
                if let Some(line) = current.take() {
                    detections.push(line.finish());
                }
                current = Some(LineBuilder::start(word, text));
            }
        }
    }

    if let Some(line) = current.take() {
        detections.push(line.finish());
    }

    RecognitionResult::new(detections)
}
