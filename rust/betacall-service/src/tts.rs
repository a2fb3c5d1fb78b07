//! Text-to-speech collaborator.
//!
//! The service sends every instruction of a route in one request and expects
//! one audio identifier back per text, in the same order.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("expected {expected} audio files, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Returns audio identifiers aligned index-for-index with `texts`.
    async fn synthesize(&self, texts: &[String]) -> Result<Vec<String>, TtsError>;
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    texts: &'a [String],
}

pub struct HttpTextToSpeech {
    client: Client,
    endpoint: String,
}

impl HttpTextToSpeech {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TtsError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/text2speech", base_url.trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextToSpeech for HttpTextToSpeech {
    async fn synthesize(&self, texts: &[String]) -> Result<Vec<String>, TtsError> {
        debug!(endpoint = %self.endpoint, texts = texts.len(), "requesting audio");
        let response = self.client.post(&self.endpoint).json(&SynthesizeRequest { texts }).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "text to speech rejected request");
            return Err(TtsError::Status { status: status.as_u16(), body });
        }

        let audio: Vec<String> = response.json().await?;
        if audio.len() != texts.len() {
            return Err(TtsError::LengthMismatch { expected: texts.len(), got: audio.len() });
        }
        Ok(audio)
    }
}
