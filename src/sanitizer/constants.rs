//! Valores compartidos para localizar y normalizar metadata en paquetes Office.

pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CP_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const APP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";
pub const CUSTOM_PART: &str = "docProps/custom.xml";
pub const COMMENTS_PART: &str = "word/comments.xml";

/// Partes auxiliares de comentarios cuyo contenido se vacía por completo.
pub const COMMENT_SIDE_PARTS: [&str; 4] = [
    "word/commentsExtended.xml",
    "word/commentsIds.xml",
    "word/commentsExtensible.xml",
    "word/people.xml",
];

/// Campos de `core.xml` que se eliminan del documento.
pub const CORE_REMOVED_FIELDS: [&str; 11] = [
    "dc:creator",
    "dc:title",
    "dc:subject",
    "cp:keywords",
    "dc:description",
    "cp:lastModifiedBy",
    "dcterms:created",
    "dcterms:modified",
    "cp:lastPrinted",
    "cp:category",
    "cp:contentStatus",
];

/// Campos de `core.xml` que se conservan con un valor neutro.
pub const CORE_NORMALIZED_FIELDS: [(&str, &str); 1] = [("cp:revision", "1")];

pub const APP_SANITIZE_FIELDS: [(&str, &str); 3] =
    [("Application", ""), ("Company", ""), ("Manager", "")];

/// Elementos de WordprocessingML que forman un comentario o lo anclan al texto.
pub const COMMENT_ELEMENTS: [&str; 4] = [
    "comment",
    "commentRangeStart",
    "commentRangeEnd",
    "commentReference",
];

pub const CUSTOM_PROPERTIES_EMPTY: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/custom-properties\" xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\"/>\n";
