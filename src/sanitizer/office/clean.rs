use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::sanitizer::constants::{
    APP_PART, COMMENT_SIDE_PARTS, COMMENTS_PART, CORE_PART, CUSTOM_PART,
};
use crate::sanitizer::utils::write_staged;

use super::{
    clear_part, rewrite_docx, sanitize_app_properties, sanitize_core_properties,
    sanitize_custom_properties, strip_comment_nodes,
};

/// Escribe en `destination` una copia de un DOCX sin propiedades de autoría ni comentarios.
pub fn strip_docx_metadata(source: &Path, destination: &Path) -> Result<()> {
    write_staged(destination, |temp_path| {
        let changed = rewrite_docx(source, temp_path, |name, contents| match name {
            CORE_PART => sanitize_core_properties(contents),
            APP_PART => sanitize_app_properties(contents),
            CUSTOM_PART => Ok(sanitize_custom_properties(contents)),
            COMMENTS_PART => strip_comment_nodes(name, contents),
            _ if COMMENT_SIDE_PARTS.contains(&name) => clear_part(name, contents),
            _ if is_word_xml_part(name) => strip_comment_nodes(name, contents),
            _ => Ok((contents, false)),
        })?;

        if !changed {
            debug!("{}: no se encontró metadata que eliminar", source.display());
        }
        Ok(())
    })
}

fn is_word_xml_part(name: &str) -> bool {
    name.starts_with("word/") && name.ends_with(".xml") && !name.contains("/_rels/")
}
