//! Selección del manejador según la extensión del archivo.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::image::strip_image_metadata;
use super::office::strip_docx_metadata;
use super::pdf::strip_pdf_metadata;
use super::report::FileOutcome;

/// Tipo de archivo deducido de la extensión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Image,
    Unsupported,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "jpg" | "jpeg" | "png" => Self::Image,
            _ => Self::Unsupported,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Image => "Imagen",
            Self::Unsupported => "no soportado",
        }
    }
}

/// Ruta de salida: el directorio de salida más el nombre base del origen.
pub fn destination_for(source: &Path, output_dir: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(source),
    }
}

/// Sanea un único archivo y devuelve el resultado sin propagar errores.
pub fn process_file(source: &Path, output_dir: &Path) -> FileOutcome {
    let kind = FileKind::from_path(source);
    let destination = destination_for(source, output_dir);

    let result = match kind {
        FileKind::Pdf => strip_pdf_metadata(source, &destination),
        FileKind::Docx => strip_docx_metadata(source, &destination),
        FileKind::Image => strip_image_metadata(source, &destination),
        FileKind::Unsupported => {
            warn!("Tipo de archivo no soportado: {}", source.display());
            return FileOutcome::Skipped {
                source: source.to_path_buf(),
                reason: "extensión no soportada".to_string(),
            };
        }
    };

    debug!("{} procesado como {}", source.display(), kind.label());

    match result {
        Ok(()) => {
            info!(
                "{} saneado: {} -> {}",
                kind.label(),
                source.display(),
                destination.display()
            );
            FileOutcome::Sanitized {
                source: source.to_path_buf(),
                destination,
            }
        }
        Err(e) => {
            error!(
                "Error procesando archivo {} {}: {}",
                kind.label(),
                source.display(),
                e
            );
            FileOutcome::Failed {
                source: source.to_path_buf(),
                error: e.to_string(),
            }
        }
    }
}
