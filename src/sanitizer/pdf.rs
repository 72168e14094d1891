//! Reconstrucción de PDFs sin diccionario Info ni flujo XMP del catálogo.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SanitizeError};
use crate::sanitizer::utils::write_staged;

/// Atributos de página que pueden heredarse de los nodos `Pages` ancestros.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Escribe en `destination` un PDF con las mismas páginas que `source` y sin metadata de documento.
pub fn strip_pdf_metadata(source: &Path, destination: &Path) -> Result<()> {
    let mut doc = Document::load(source)?;
    rebuild_from_pages(&mut doc)?;

    write_staged(destination, |temp_path| {
        doc.save(temp_path)?;
        Ok(())
    })
}

/// Sustituye catálogo, árbol de páginas y trailer por versiones que solo
/// referencian las páginas; lo que queda inalcanzable (Info, XMP, marcadores) se poda.
pub(crate) fn rebuild_from_pages(doc: &mut Document) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    if page_ids.is_empty() {
        return Err(SanitizeError::PdfStructure(
            "el documento no contiene páginas".to_string(),
        ));
    }

    let pages_id = doc.new_object_id();

    for &page_id in &page_ids {
        let inherited: Vec<(&[u8], Object)> = INHERITABLE_PAGE_KEYS
            .iter()
            .filter_map(|&key| inherited_attribute(doc, page_id, key).map(|value| (key, value)))
            .collect();

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        for (key, value) in inherited {
            page.set(key, value);
        }
        page.set("Parent", pages_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_ids.len() as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });

    let mut trailer = Dictionary::new();
    trailer.set("Root", catalog_id);
    doc.trailer = trailer;

    let pruned = doc.prune_objects();
    debug!("se descartaron {} objetos PDF no referenciados", pruned.len());

    Ok(())
}

/// Busca `key` en la página o, si falta, en la cadena de nodos `Parent`.
///
/// Devuelve `None` si la propia página ya define el atributo.
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let page = doc.get_dictionary(page_id).ok()?;
    if page.has(key) {
        return None;
    }

    let mut visited = HashSet::from([page_id]);
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    while let Some(node_id) = parent {
        if !visited.insert(node_id) {
            return None;
        }
        let node = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    None
}
