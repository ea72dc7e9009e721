//! Embedding-similarity selection of the most relevant context document.

use anyhow::{Error, Result, bail};

use super::ContextDocument;
use crate::openai::{cosine_similarity, embeddings};

/// How context documents are turned into the context block of a prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContextMode {
    /// Concatenate every document verbatim.
    #[default]
    Static,
    /// Send only the document most similar to the question.
    Retrieval,
}

impl ContextMode {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "retrieval" => ContextMode::Retrieval,
            "static" => ContextMode::Static,
            other => {
                tracing::warn!("Unknown context mode '{}', defaulting to static", other);
                ContextMode::Static
            }
        }
    }
}

/// Embed the question and every document in one request and pick the
/// document with the highest cosine similarity to the question. The
/// vectors are used for this one comparison and dropped.
pub async fn select_document<'a>(
    question: &str,
    docs: &'a [ContextDocument],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<&'a ContextDocument, Error> {
    if docs.is_empty() {
        bail!("No context documents available for retrieval");
    }

    let mut inputs = Vec::with_capacity(docs.len() + 1);
    inputs.push(question.to_string());
    inputs.extend(docs.iter().map(|d| d.text.clone()));

    let vectors = embeddings(&inputs, api_hostname, api_key, model).await?;
    if vectors.len() != docs.len() + 1 {
        bail!(
            "Expected {} embeddings, got {}",
            docs.len() + 1,
            vectors.len()
        );
    }

    let question_vec = &vectors[0];
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, doc_vec) in vectors[1..].iter().enumerate() {
        let score = cosine_similarity(question_vec, doc_vec);
        tracing::debug!("Similarity {:.4} for {}", score, docs[i].label());
        if score > best_score {
            best = i;
            best_score = score;
        }
    }

    Ok(&docs[best])
}
