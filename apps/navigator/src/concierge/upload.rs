//! Resume file decoding for multipart uploads.

use bytes::Bytes;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Returns the resume's text. PDFs (by content type or magic bytes) go through
/// `pdf-extract`; anything else must be UTF-8 text.
pub async fn extract_resume_text(
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("resume file is empty".to_string()));
    }

    let is_pdf = content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        || data.starts_with(PDF_MAGIC);

    if is_pdf {
        // CPU-bound parse, kept off the async executor.
        return tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
            })?
            .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF resume: {e}")));
    }

    String::from_utf8(data.to_vec()).map_err(|_| {
        AppError::UnprocessableEntity(
            "resume file must be a PDF or UTF-8 plain text".to_string(),
        )
    })
}
