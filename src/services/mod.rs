pub mod analysis_service;
pub mod decoder;
pub mod scan_session;

pub use analysis_service::{Analysis, AnalysisService};
pub use decoder::ImageDecoder;
pub use scan_session::{ScanSession, SessionSnapshot};
