//! Motor de `dsan-metadata-stripper`: limpia metadata de PDF, DOCX e imágenes.

pub mod config;
pub mod error;
pub mod logging;
pub mod sanitizer;

pub use config::{LogConfig, SanitizeConfig};
pub use error::{Result, SanitizeError};
pub use sanitizer::{FileOutcome, RunSummary, Sanitizer};
