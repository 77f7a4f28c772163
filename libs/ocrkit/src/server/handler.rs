//! `POST /ocr` handler

use std::path::Path;
use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use log::{debug, error, info, warn};

use super::errors::OcrError;
use super::state::AppState;
use super::types::{OcrRequest, OcrResponse};
use crate::image2text::{OcrEngine, RecognitionResult};
use crate::upload::{decode_image_payload, DecodedImage, ScratchImage};

/// Decodes the request image, runs the engine on it and answers with the
/// recognized texts in engine order.
///
/// # Errors
/// - 400: `imageBase64` missing or empty, or the body is not usable JSON
/// - 500: invalid base64, scratch file I/O, engine failure
pub async fn ocr_handler(
    State(state): State<AppState>,
    payload: Result<Json<OcrRequest>, JsonRejection>,
) -> Result<Json<OcrResponse>, OcrError> {
    let started = Instant::now();

    match process_request(&state, payload).await {
        Ok(texts) => {
            info!(
                "OCR complete: {} detections in {:?}",
                texts.len(),
                started.elapsed()
            );
            Ok(Json(OcrResponse { texts }))
        }
        Err(err) if err.is_client_error() => {
            warn!("OCR request rejected: {}", err);
            Err(err)
        }
        Err(err) => {
            error!("OCR request failed after {:?}: {}", started.elapsed(), err);
            Err(err)
        }
    }
}

async fn process_request(
    state: &AppState,
    payload: Result<Json<OcrRequest>, JsonRejection>,
) -> Result<Vec<String>, OcrError> {
    let Json(request) = payload.map_err(|rejection| OcrError::InvalidBody {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    let image = request.image().ok_or(OcrError::MissingImage)?;
    let decoded = decode_image_payload(image)?;
    debug!(
        "Decoded {} bytes of image data ({})",
        decoded.bytes.len(),
        decoded.extension
    );

    let permit = match &state.recognition_permits {
        Some(permits) => Some(
            permits
                .clone()
                .acquire_owned()
                .await
                .map_err(|err| OcrError::Recognition(err.to_string()))?,
        ),
        None => None,
    };

    let engine = state.engine.clone();
    let temp_dir = state.config.temp_dir.clone();
    let classify_orientation = engine.classify_orientation();

    let result = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        recognize_image(engine.as_ref(), &temp_dir, &decoded, classify_orientation)
    })
    .await
    .map_err(|err| OcrError::Recognition(format!("Recognition task failed: {}", err)))??;

    Ok(result.into_texts())
}

/// Runs `engine` on `image` through a scratch file in `temp_dir`.
///
/// The scratch file is gone when this returns, whatever the outcome; an
/// engine panic removes it while unwinding.
pub fn recognize_image(
    engine: &dyn OcrEngine,
    temp_dir: &Path,
    image: &DecodedImage,
    classify_orientation: bool,
) -> Result<RecognitionResult, OcrError> {
    let scratch = ScratchImage::create(temp_dir, &image.bytes, image.extension)?;
    debug!("Running {} on {}", engine.name(), scratch.path().display());

    let recognized = engine.recognize(scratch.path(), classify_orientation);
    let removed = scratch.close();

    match (recognized, removed) {
        (Ok(result), Ok(())) => Ok(result),
        (Ok(_), Err(err)) => Err(OcrError::Io(err)),
        (Err(err), removed) => {
            if let Err(io) = removed {
                warn!("Failed to remove scratch image: {}", io);
            }
            Err(err.into())
        }
    }
}
