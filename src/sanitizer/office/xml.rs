use xmltree::{Element, XMLNode};

use crate::sanitizer::constants::{APP_NS, CP_NS, DC_NS, DCTERMS_NS};

/// Describe la información necesaria para localizar un nodo en el XML de propiedades.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldSpec<'a> {
    pub(crate) local_name: &'a str,
    pub(crate) namespace: Option<&'a str>,
}

const fn field(local_name: &'static str, namespace: &'static str) -> FieldSpec<'static> {
    FieldSpec {
        local_name,
        namespace: Some(namespace),
    }
}

const CORE_FIELDS: [(&str, FieldSpec<'static>); 12] = [
    ("dc:creator", field("creator", DC_NS)),
    ("dc:title", field("title", DC_NS)),
    ("dc:subject", field("subject", DC_NS)),
    ("dc:description", field("description", DC_NS)),
    ("cp:keywords", field("keywords", CP_NS)),
    ("cp:lastModifiedBy", field("lastModifiedBy", CP_NS)),
    ("cp:lastPrinted", field("lastPrinted", CP_NS)),
    ("cp:category", field("category", CP_NS)),
    ("cp:contentStatus", field("contentStatus", CP_NS)),
    ("cp:revision", field("revision", CP_NS)),
    ("dcterms:created", field("created", DCTERMS_NS)),
    ("dcterms:modified", field("modified", DCTERMS_NS)),
];

const APP_FIELDS: [(&str, FieldSpec<'static>); 3] = [
    ("Application", field("Application", APP_NS)),
    ("Company", field("Company", APP_NS)),
    ("Manager", field("Manager", APP_NS)),
];

fn lookup(table: &[(&str, FieldSpec<'static>)], tag: &str) -> Option<FieldSpec<'static>> {
    table
        .iter()
        .find(|(declared, _)| *declared == tag)
        .map(|(_, spec)| *spec)
}

/// Obtiene el campo correspondiente en `core.xml` a partir de su etiqueta declarada.
pub(crate) fn core_field_spec(tag: &str) -> Option<FieldSpec<'static>> {
    lookup(&CORE_FIELDS, tag)
}

/// Obtiene el campo correspondiente en `app.xml` a partir de su etiqueta declarada.
pub(crate) fn app_field_spec(tag: &str) -> Option<FieldSpec<'static>> {
    lookup(&APP_FIELDS, tag)
}

/// Comprueba si un elemento coincide con la especificación de búsqueda.
pub(crate) fn element_matches(element: &Element, spec: &FieldSpec<'_>) -> bool {
    if element.name != spec.local_name {
        return false;
    }

    match (spec.namespace, element.namespace.as_deref()) {
        (Some(expected), Some(actual)) => expected == actual,
        (Some(_), None) => false,
        (None, _) => true,
    }
}

/// Quita los hijos directos de `root` que coinciden con `spec`.
pub(crate) fn remove_child_elements(root: &mut Element, spec: FieldSpec<'_>) -> bool {
    let before = root.children.len();
    root.children.retain(|node| match node {
        XMLNode::Element(child) => !element_matches(child, &spec),
        _ => true,
    });
    root.children.len() != before
}

/// Sustituye el texto del primer hijo que coincide con `spec`, si existe.
pub(crate) fn update_child_text(root: &mut Element, spec: FieldSpec<'_>, new_value: &str) -> bool {
    for node in root.children.iter_mut() {
        if let XMLNode::Element(child) = node
            && element_matches(child, &spec)
        {
            return set_element_text(child, new_value);
        }
    }
    false
}

/// Sustituye el texto de un elemento si difiere del valor actual.
pub(crate) fn set_element_text(element: &mut Element, new_value: &str) -> bool {
    let current = element_text_content(element);
    if current == new_value {
        return false;
    }

    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_)));

    if !new_value.is_empty() {
        element.children.push(XMLNode::Text(new_value.to_string()));
    }

    true
}

/// Devuelve el texto plano contenido dentro de un elemento.
pub(crate) fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    for node in &element.children {
        if let XMLNode::Text(text) = node {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}
