//! Valores de configuración que se pasan explícitamente a cada componente.

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_OUTPUT_DIR: &str = "sanitized_output";

/// Parámetros de una ejecución de limpieza.
#[derive(Clone, Debug)]
pub struct SanitizeConfig {
    /// Directorio donde se escriben las copias saneadas.
    pub output_dir: PathBuf,
    /// Si es `true` se descienden todos los subdirectorios.
    pub recursive: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            recursive: false,
        }
    }
}

/// Nivel de detalle del registro de eventos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub verbose: bool,
}

impl LogConfig {
    pub fn level(self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}
