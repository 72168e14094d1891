//! Punto de entrada de una ejecución: prepara la salida y decide entre archivo o directorio.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::SanitizeConfig;
use crate::error::{Result, SanitizeError};

use super::dispatch::process_file;
use super::report::RunSummary;
use super::walker::walk_directory;

pub struct Sanitizer {
    config: SanitizeConfig,
}

impl Sanitizer {
    pub fn new(config: SanitizeConfig) -> Self {
        Self { config }
    }

    /// Crea el directorio de salida (y sus padres) si aún no existe.
    pub fn prepare_output(&self) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir)?;
        debug!(
            "Directorio de salida listo: {}",
            self.config.output_dir.display()
        );
        Ok(())
    }

    /// Sanea `input`, que puede ser un archivo o un directorio.
    ///
    /// Los fallos de cada archivo quedan en el [`RunSummary`]; solo los errores
    /// de preparación o una ruta de entrada inválida se devuelven como `Err`.
    pub fn run(&self, input: &Path) -> Result<RunSummary> {
        self.prepare_output()?;

        let mut summary = RunSummary::new();
        let output_dir = self.config.output_dir.as_path();

        if input.is_file() {
            summary.record(process_file(input, output_dir));
        } else if input.is_dir() {
            info!(
                "Procesando directorio {}{}",
                input.display(),
                if self.config.recursive {
                    " (recursivo)"
                } else {
                    ""
                }
            );
            walk_directory(input, output_dir, self.config.recursive, &mut summary);
        } else {
            return Err(SanitizeError::InvalidInput(input.to_path_buf()));
        }

        summary.log();
        Ok(summary)
    }
}
