//! Limpieza de metadata en documentos DOCX (paquetes ZIP con partes XML).
//!
//! Las propiedades de `docProps/` se editan como árbol con `xmltree`; las partes
//! de `word/` se filtran como flujo de eventos para no alterar su marcado.

mod archive;
mod clean;
mod sanitize;
mod stream;
mod xml;

pub use clean::strip_docx_metadata;

pub(crate) use archive::rewrite_docx;
pub(crate) use sanitize::{
    clear_part, sanitize_app_properties, sanitize_core_properties, sanitize_custom_properties,
    strip_comment_nodes,
};
