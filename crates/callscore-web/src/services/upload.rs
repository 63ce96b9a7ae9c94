//! Upload service: client-side validation, multipart submission and
//! status-code mapping for the transcription endpoint

use callscore_core::types::{RecordStatus, UploadResult};
use callscore_core::utils::{
    exceeds_upload_limit, format_size_mb, is_allowed_audio_type, status_label,
};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

/// Fallback detail when the server did not explain the failure
const UNKNOWN_ERROR: &str = "Невідома помилка";

/// Validate a candidate file locally. Files failing validation are never
/// sent to the backend.
///
/// # Errors
///
/// Returns the user-facing rejection message: oversized files report
/// their actual size in MB, non-audio MIME types list the accepted
/// formats.
pub fn validate_file(mime: &str, size_bytes: f64) -> Result<(), String> {
    if exceeds_upload_limit(size_bytes) {
        return Err(format!(
            "Файл занадто великий. Максимальний розмір: 50MB. Розмір вашого файлу: {}MB",
            format_size_mb(size_bytes)
        ));
    }

    if !is_allowed_audio_type(mime) {
        return Err("Будь ласка, виберіть аудіо файл (MP3, WAV, M4A, або OGG)".to_string());
    }

    Ok(())
}

/// Map a non-200 upload reply to its user-facing message
#[must_use]
pub fn upload_error_message(status: u16, detail: Option<&str>) -> String {
    match status {
        504 => "Час очікування минув. Спробуйте ще раз.".to_string(),
        500 => "Помилка сервера. Спробуйте пізніше.".to_string(),
        413 => "Файл занадто великий. Максимальний розмір: 50MB".to_string(),
        415 => "Непідтримуваний формат файлу".to_string(),
        _ => format!("Помилка завантаження: {}", detail.unwrap_or(UNKNOWN_ERROR)),
    }
}

/// Status line for the post-upload panel: known statuses get their
/// localized label, a missing status means the backend queued the work
#[must_use]
pub fn status_display(status: Option<&str>) -> String {
    match status {
        None | Some("") => "В обробці".to_string(),
        Some(raw) => match serde_json::from_value::<RecordStatus>(Value::String(raw.to_string())) {
            Ok(RecordStatus::Unknown) | Err(_) => raw.to_string(),
            Ok(status) => status_label(status).to_string(),
        },
    }
}

/// Submit the selected file as a multipart POST.
///
/// Statuses below 500 are regular replies: 200 yields the upload result,
/// everything else is mapped by [`upload_error_message`]. Transport
/// failures without a reply use the generic fallback.
///
/// # Errors
///
/// Returns the user-facing message for the failure.
pub async fn upload_file(file: &File) -> Result<UploadResult, String> {
    let form = FormData::new().map_err(|_| upload_error_message(0, None))?;
    form.append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(|_| upload_error_message(0, None))?;

    let request = Request::post("/api/transcribe")
        .body(form)
        .map_err(|e| format!("Помилка завантаження: {e}"))?;

    let response = request
        .send()
        .await
        .map_err(|_| upload_error_message(0, None))?;

    if response.status() == 200 {
        return response
            .json::<UploadResult>()
            .await
            .map_err(|e| format!("Помилка завантаження: {e}"));
    }

    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        });

    Err(upload_error_message(response.status(), detail.as_deref()))
}
