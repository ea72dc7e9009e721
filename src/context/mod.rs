//! Context documents supplied to the assistant as background knowledge.
//!
//! Sources are fetched at most once per session and cached by the caller;
//! a failed fetch degrades into document text describing the failure so
//! the chat can continue.

pub mod pdf;
pub mod retrieval;
pub mod web;

pub use retrieval::{ContextMode, select_document};

use serde_json::{Value, json};

use crate::core::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextSource {
    Pdf,
    Website,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContextDocument {
    pub source: ContextSource,
    pub text: String,
}

impl ContextDocument {
    pub fn label(&self) -> &'static str {
        match self.source {
            ContextSource::Website => "Website Content",
            ContextSource::Pdf => "PDF Content",
        }
    }

    pub(crate) fn to_template_value(&self) -> Value {
        json!({"label": self.label(), "text": self.text})
    }
}

/// Fetch every configured context source. Unset sources contribute nothing;
/// failing sources contribute their error text.
pub async fn fetch_documents(config: &AppConfig) -> Vec<ContextDocument> {
    let mut docs = Vec::new();

    if let Some(url) = &config.website_url {
        let text = match web::scrape_website(url).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Website scrape failed for {}: {}", url, e);
                format!("Error scraping website: {}", e)
            }
        };
        docs.push(ContextDocument {
            source: ContextSource::Website,
            text,
        });
    }

    if let Some(path) = &config.pdf_path {
        docs.push(ContextDocument {
            source: ContextSource::Pdf,
            text: pdf::extract_pdf_text(path),
        });
    }

    docs
}
