use serde::Deserialize;
use skin_tone::CacheOptions;
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Scan cache tuning
    #[serde(default)]
    pub cache: CacheConfig,

    /// Upload limits for submitted images
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Similarity cache settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// Fraction of hash cells that must match for a hit
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Per-cell luminance tolerance (strict)
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,

    /// Optional capacity; unbounded when absent
    #[serde(default)]
    pub max_entries: Option<usize>,
}

fn default_similarity_threshold() -> f64 {
    skin_tone::cache::DEFAULT_SIMILARITY_THRESHOLD
}

fn default_tolerance() -> u8 {
    skin_tone::DEFAULT_TOLERANCE
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            tolerance: default_tolerance(),
            max_entries: None,
        }
    }
}

/// Limits applied before an upload is decoded
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LimitsConfig {
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Largest accepted width or height in pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

fn default_max_dimension() -> u32 {
    4096
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// A missing or unparsable file is logged and never fatal.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        similarity_threshold = config.cache.similarity_threshold,
                        tolerance = config.cache.tolerance,
                        max_entries = ?config.cache.max_entries,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Cache options for a new scan session.
    ///
    /// The threshold is clamped to `0.0..=1.0`.
    pub fn cache_options(&self) -> CacheOptions {
        let threshold = if self.cache.similarity_threshold.is_nan() {
            default_similarity_threshold()
        } else {
            self.cache.similarity_threshold.clamp(0.0, 1.0)
        };

        CacheOptions::new()
            .similarity_threshold(threshold)
            .tolerance(self.cache.tolerance)
            .max_entries(self.cache.max_entries)
    }
}
