//! Errores producidos al sanear un archivo o preparar una ejecución.

use std::path::PathBuf;
use thiserror::Error;

/// Todo error que puede producir la limpieza de metadata.
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// Fallo de lectura o escritura en disco.
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// `lopdf` no pudo cargar o guardar el documento.
    #[error("PDF inválido: {0}")]
    Pdf(#[from] lopdf::Error),

    /// El PDF carece de la estructura mínima para reconstruirlo.
    #[error("estructura PDF no soportada: {0}")]
    PdfStructure(String),

    #[error("imagen inválida: {0}")]
    Image(#[from] image::ImageError),

    /// El paquete Office no es un ZIP legible.
    #[error("no es un documento Office válido: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Una parte XML del paquete no se pudo leer o reescribir.
    #[error("XML inválido en {part}: {message}")]
    Xml { part: String, message: String },

    /// La ruta de entrada no es ni archivo ni directorio.
    #[error("la ruta `{}` no es un archivo ni un directorio", .0.display())]
    InvalidInput(PathBuf),
}

impl SanitizeError {
    pub(crate) fn xml(part: &str, message: impl ToString) -> Self {
        Self::Xml {
            part: part.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SanitizeError>;
