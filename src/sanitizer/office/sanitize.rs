use std::io::Cursor;

use xmltree::{Element, EmitterConfig};

use crate::error::{Result, SanitizeError};
use crate::sanitizer::constants::{
    APP_PART, APP_SANITIZE_FIELDS, COMMENT_ELEMENTS, CORE_NORMALIZED_FIELDS, CORE_PART,
    CORE_REMOVED_FIELDS, CUSTOM_PROPERTIES_EMPTY, W_NS,
};

use super::stream::filter_elements;
use super::xml::{app_field_spec, core_field_spec, remove_child_elements, update_child_text};

/// Elimina los campos de autoría y fechas de `core.xml`.
pub(crate) fn sanitize_core_properties(contents: Vec<u8>) -> Result<(Vec<u8>, bool)> {
    let mut root = parse_part(CORE_PART, &contents)?;

    let mut modified = false;
    for tag in CORE_REMOVED_FIELDS {
        if let Some(spec) = core_field_spec(tag) {
            modified |= remove_child_elements(&mut root, spec);
        }
    }
    for (tag, value) in CORE_NORMALIZED_FIELDS {
        if let Some(spec) = core_field_spec(tag) {
            modified |= update_child_text(&mut root, spec, value);
        }
    }

    finish_part(CORE_PART, contents, &root, modified)
}

/// Vacía los valores de aplicación, empresa y responsable de `app.xml`.
pub(crate) fn sanitize_app_properties(contents: Vec<u8>) -> Result<(Vec<u8>, bool)> {
    let mut root = parse_part(APP_PART, &contents)?;

    let mut modified = false;
    for (tag, value) in APP_SANITIZE_FIELDS {
        if let Some(spec) = app_field_spec(tag) {
            modified |= update_child_text(&mut root, spec, value);
        }
    }

    finish_part(APP_PART, contents, &root, modified)
}

/// Reemplaza el XML de propiedades personalizadas por una plantilla vacía.
pub(crate) fn sanitize_custom_properties(contents: Vec<u8>) -> (Vec<u8>, bool) {
    let sanitized = CUSTOM_PROPERTIES_EMPTY.as_bytes().to_vec();
    let modified = contents != sanitized;
    (sanitized, modified)
}

/// Quita comentarios y sus anclas (`w:commentRangeStart`, `w:commentReference`, ...) de una parte.
pub(crate) fn strip_comment_nodes(part: &str, contents: Vec<u8>) -> Result<(Vec<u8>, bool)> {
    if !mentions_comments(&contents) {
        return Ok((contents, false));
    }

    filter_elements(part, contents, |_, namespace, local_name| {
        namespace == Some(W_NS.as_bytes())
            && COMMENT_ELEMENTS
                .iter()
                .any(|name| name.as_bytes() == local_name)
    })
}

/// Deja solo el elemento raíz de partes auxiliares (autores de comentarios, ids, extensiones).
pub(crate) fn clear_part(part: &str, contents: Vec<u8>) -> Result<(Vec<u8>, bool)> {
    filter_elements(part, contents, |depth, _, _| depth > 0)
}

fn mentions_comments(contents: &[u8]) -> bool {
    contents.windows(b"comment".len()).any(|w| w == b"comment")
}

fn parse_part(part: &str, contents: &[u8]) -> Result<Element> {
    Element::parse(Cursor::new(contents)).map_err(|e| SanitizeError::xml(part, e))
}

fn finish_part(
    part: &str,
    original: Vec<u8>,
    root: &Element,
    modified: bool,
) -> Result<(Vec<u8>, bool)> {
    if !modified {
        return Ok((original, false));
    }

    let mut output = Vec::new();
    let mut config = EmitterConfig::new();
    config.perform_indent = false;
    config.write_document_declaration = true;
    root.write_with_config(&mut output, config)
        .map_err(|e| SanitizeError::xml(part, e))?;

    Ok((output, true))
}
