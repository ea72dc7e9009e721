//! Website context source.

use std::time::Duration;

use anyhow::{Error, Result};
use scraper::Html;

/// Fetch a URL once and reduce the page to its visible text.
pub async fn scrape_website(url: &str) -> Result<String, Error> {
    let body = reqwest::Client::new()
        .get(url)
        .timeout(Duration::from_secs(30))
        .send()
        .await?
        .text()
        .await?;
    Ok(extract_visible_text(&body))
}

/// Collect every text node in the document, discarding markup and the
/// contents of script/style/noscript elements.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    for node in document.tree.nodes() {
        let Some(t) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .map(|e| matches!(e.name(), "script" | "style" | "noscript"))
            .unwrap_or(false);
        if hidden {
            continue;
        }
        let trimmed = t.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(trimmed);
    }
    text
}
