use anyhow::{Context, Result};
use clap::Parser;
use ocrkit::common::init_logger_exe;
use ocrkit::image2text::{OcrConfig, OcrEngine, TesseractEngine};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about = "Run the OCR engine on local image files", long_about = None)]
struct Cli {
    #[arg(required = true, help = "Image files to recognize")]
    images: Vec<PathBuf>,

    #[arg(long, env = "OCR_LANG", default_value = "eng", help = "Tesseract language pack(s)")]
    lang: String,

    #[arg(long, help = "Image resolution hint in dots per inch")]
    dpi: Option<u32>,

    #[arg(long, help = "Page segmentation mode used when orientation classification is off")]
    psm: Option<u32>,

    #[arg(long, help = "OCR engine mode")]
    oem: Option<u32>,

    #[arg(long, help = "Skip orientation classification")]
    no_orientation: bool,

    #[arg(long, help = "Print one JSON object per image")]
    json: bool,
}

#[derive(Serialize)]
struct FileTexts<'a> {
    path: &'a str,
    texts: Vec<String>,
}

fn main() -> Result<()> {
    init_logger_exe();
    let cli = Cli::parse();

    let config = OcrConfig::new(cli.lang.clone(), cli.dpi, cli.psm, cli.oem, !cli.no_orientation);
    let classify_orientation = config.classify_orientation;
    let engine = TesseractEngine::new(config)?;

    for path in &cli.images {
        let started = Instant::now();
        let result = engine
            .recognize(path, classify_orientation)
            .with_context(|| format!("Failed to recognize {}", path.display()))?;
        log::info!(
            "{}: {} detections in {:?}",
            path.display(),
            result.len(),
            started.elapsed()
        );

        if cli.json {
            let display = path.to_string_lossy();
            let line = FileTexts {
                path: &display,
                texts: result.into_texts(),
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            for text in result.into_texts() {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
