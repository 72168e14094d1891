//! Resultado de procesar cada archivo y resumen agregado de una ejecución.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Lo que ocurrió con un archivo concreto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Sanitized { source: PathBuf, destination: PathBuf },
    Skipped { source: PathBuf, reason: String },
    Failed { source: PathBuf, error: String },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Sanitized { source, .. }
            | Self::Skipped { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }
}

/// Archivo de salida escrito por más de un origen durante la misma ejecución.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overwrite {
    pub destination: PathBuf,
    pub previous_source: PathBuf,
    pub source: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub sanitized: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub overwrites: Vec<Overwrite>,
    written: HashMap<PathBuf, PathBuf>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorpora el resultado de un archivo, detectando destinos repetidos.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Sanitized {
                source,
                destination,
            } => {
                self.sanitized += 1;
                if let Some(previous_source) =
                    self.written.insert(destination.clone(), source.clone())
                {
                    warn!(
                        "{} sobrescribió la salida de {} en {}",
                        source.display(),
                        previous_source.display(),
                        destination.display()
                    );
                    self.overwrites.push(Overwrite {
                        destination,
                        previous_source,
                        source,
                    });
                }
            }
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { source, error } => self.failures.push((source, error)),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total_processed(&self) -> usize {
        self.sanitized + self.skipped + self.failed()
    }

    /// Registra el resumen final de la ejecución.
    pub fn log(&self) {
        info!(
            "Resumen: {} saneados, {} omitidos, {} con error",
            self.sanitized,
            self.skipped,
            self.failed()
        );

        for (path, message) in &self.failures {
            error!("  {}: {}", path.display(), message);
        }
    }
}
