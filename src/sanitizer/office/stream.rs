use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::writer::Writer;

use crate::error::{Result, SanitizeError};

/// Reescribe una parte XML evento a evento, omitiendo los elementos (y todo su
/// contenido) para los que `skip` devuelve `true`.
///
/// `skip` recibe la profundidad del elemento (0 para la raíz), su espacio de
/// nombres resuelto y su nombre local. Todo lo demás se copia tal cual: prefijos
/// de atributos, texto de solo espacios y la declaración XML. Devuelve el
/// contenido original si no se omitió nada.
pub(crate) fn filter_elements<F>(
    part: &str,
    contents: Vec<u8>,
    mut skip: F,
) -> Result<(Vec<u8>, bool)>
where
    F: FnMut(usize, Option<&[u8]>, &[u8]) -> bool,
{
    let mut reader = NsReader::from_reader(contents.as_slice());
    let mut writer = Writer::new(Vec::with_capacity(contents.len()));
    let mut buf = Vec::new();

    let mut depth = 0_usize;
    let mut skipping_from: Option<usize> = None;
    let mut removed = 0_usize;

    loop {
        let (ns, event) = reader
            .read_resolved_event_into(&mut buf)
            .map_err(|e| SanitizeError::xml(part, e))?;
        let namespace = match ns {
            ResolveResult::Bound(Namespace(uri)) => Some(uri),
            _ => None,
        };

        let keep = match &event {
            Event::Eof => break,
            Event::Start(start) => {
                let keep = if skipping_from.is_some() {
                    false
                } else if skip(depth, namespace, start.local_name().as_ref()) {
                    skipping_from = Some(depth);
                    removed += 1;
                    false
                } else {
                    true
                };
                depth += 1;
                keep
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match skipping_from {
                    Some(level) if level == depth => {
                        skipping_from = None;
                        false
                    }
                    Some(_) => false,
                    None => true,
                }
            }
            Event::Empty(empty) => {
                if skipping_from.is_some() {
                    false
                } else if skip(depth, namespace, empty.local_name().as_ref()) {
                    removed += 1;
                    false
                } else {
                    true
                }
            }
            _ => skipping_from.is_none(),
        };

        if keep {
            writer
                .write_event(event)
                .map_err(|e| SanitizeError::xml(part, e))?;
        }
        buf.clear();
    }

    if removed == 0 {
        return Ok((contents, false));
    }

    Ok((writer.into_inner(), true))
}
