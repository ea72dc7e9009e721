//! PDF context source.

use std::path::Path;

/// Sentinel fed to the assistant when the configured PDF is missing, so
/// the chat keeps working without the document.
pub const PDF_NOT_FOUND: &str = "PDF file not found.";

/// Extract the text of every page of a local PDF. A missing file yields
/// the sentinel; an unreadable file yields its error text.
pub fn extract_pdf_text(path: &str) -> String {
    if !Path::new(path).exists() {
        return PDF_NOT_FOUND.to_string();
    }
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read PDF {}: {}", path, e);
            format!("Error reading PDF: {}", e)
        }
    }
}
