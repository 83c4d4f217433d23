use chrono::{DateTime, Utc};
use skin_tone::ScanOutcome;

use super::{ImageDecoder, ScanSession};
use crate::error::{ApiError, DecodeError};
use crate::models::AppConfig;

/// One analyzed upload
#[derive(Debug, Clone)]
pub struct Analysis {
    pub outcome: ScanOutcome,
    /// Dimensions of the submitted image (not of a cached match)
    pub width: usize,
    pub height: usize,
    pub analyzed_at: DateTime<Utc>,
}

/// Decode, then scan through the shared session.
#[derive(Clone)]
pub struct AnalysisService {
    decoder: ImageDecoder,
    session: ScanSession,
}

impl AnalysisService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            decoder: ImageDecoder::new(&config.limits),
            session: ScanSession::new(config.cache_options()),
        }
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Analyze on the calling thread. Must not be called from an async context.
    pub fn analyze_blocking(&self, bytes: &[u8]) -> Result<Analysis, DecodeError> {
        let buffer = self.decoder.decode(bytes)?;
        let outcome = self.session.lookup_or_compute_blocking(&buffer);

        tracing::info!(
            width = buffer.width(),
            height = buffer.height(),
            category = outcome.result.category().slug(),
            cache_hit = outcome.cache_hit,
            "Image analyzed"
        );

        Ok(Analysis {
            outcome,
            width: buffer.width(),
            height: buffer.height(),
            analyzed_at: Utc::now(),
        })
    }

    /// Analyze on a blocking worker thread.
    pub async fn analyze(&self, bytes: Vec<u8>) -> Result<Analysis, ApiError> {
        let service = self.clone();
        let analysis = tokio::task::spawn_blocking(move || service.analyze_blocking(&bytes))
            .await
            .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))??;
        Ok(analysis)
    }
}
