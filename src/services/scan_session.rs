use skin_tone::{CacheOptions, CacheStats, PixelBuffer, ScanOutcome, SkinScanner};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache counters and settings read under one lock.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub stats: CacheStats,
    pub options: CacheOptions,
}

/// Scan session shared by all request handlers.
///
/// The scan-then-insert step runs under the write lock, so two concurrent
/// uploads of the same frame cannot both miss and insert.
#[derive(Clone)]
pub struct ScanSession {
    scanner: Arc<RwLock<SkinScanner>>,
}

impl ScanSession {
    pub fn new(options: CacheOptions) -> Self {
        Self {
            scanner: Arc::new(RwLock::new(SkinScanner::with_options(options))),
        }
    }

    /// Look up or analyze a frame on a blocking worker thread.
    /// Must not be called from an async context.
    pub fn lookup_or_compute_blocking(&self, buffer: &PixelBuffer) -> ScanOutcome {
        let mut scanner = self.scanner.blocking_write();
        scanner.lookup_or_compute(buffer)
    }

    pub async fn stats(&self) -> CacheStats {
        let scanner = self.scanner.read().await;
        scanner.stats()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let scanner = self.scanner.read().await;
        SessionSnapshot {
            stats: scanner.stats(),
            options: scanner.options().clone(),
        }
    }

    /// End the session. Returns the snapshot taken just before clearing.
    pub async fn reset(&self) -> SessionSnapshot {
        let mut scanner = self.scanner.write().await;
        let snapshot = SessionSnapshot {
            stats: scanner.stats(),
            options: scanner.options().clone(),
        };
        scanner.clear();
        snapshot
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}
