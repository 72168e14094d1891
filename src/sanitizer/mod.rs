//! Eliminación de metadata de PDF, DOCX e imágenes hacia un directorio de salida.

mod constants;
mod dispatch;
mod image;
mod office;
mod pdf;
mod report;
mod runner;
mod utils;
mod walker;

pub use dispatch::{FileKind, destination_for, process_file};
pub use self::image::strip_image_metadata;
pub use office::strip_docx_metadata;
pub use pdf::strip_pdf_metadata;
pub use report::{FileOutcome, Overwrite, RunSummary};
pub use runner::Sanitizer;
pub use walker::walk_directory;
