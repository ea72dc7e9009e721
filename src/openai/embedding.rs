//! Embedding requests and the vector math used to compare them.

use std::time::Duration;

use anyhow::{Error, Result, anyhow, bail};
use serde_json::{Value, json};

/// One embeddings request covering every input block; the response carries
/// one vector per input, in order.
pub async fn embeddings(
    inputs: &[String],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Vec<Vec<f32>>, Error> {
    let payload = json!({
        "model": model,
        "input": inputs,
    });
    let url = format!("{}/v1/embeddings", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        bail!("Embedding request failed with {}: {}", status, body);
    }

    let resp: Value = response.json().await?;
    let data = resp["data"]
        .as_array()
        .ok_or(anyhow!("No data array in embedding response: {}", resp))?;

    let mut vectors = Vec::with_capacity(data.len());
    for item in data {
        let embedding = item["embedding"]
            .as_array()
            .ok_or(anyhow!("No embedding array in embedding response item"))?;
        let vector: Vec<f32> = embedding
            .iter()
            .filter_map(|v| v.as_f64().map(|f| f as f32))
            .collect();
        if vector.is_empty() {
            bail!("Empty embedding vector in response");
        }
        vectors.push(vector);
    }

    Ok(vectors)
}

/// Cosine similarity between two vectors. Returns 0.0 for mismatched or
/// zero-length inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-12 { 0.0 } else { dot / denom }
}
