//! Escritura en dos pasos: archivo temporal junto al destino y renombrado final.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Crea un nombre de archivo temporal estable en el mismo directorio que `path`.
pub fn generate_temp_filename(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = path.extension().unwrap_or_default().to_string_lossy();

    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    parent.join(format!(".{}_temp_{}.{}", stem, nanos, extension))
}

/// Ejecuta `write` contra un archivo temporal y lo mueve a `destination` si tuvo éxito.
///
/// Ante cualquier error el temporal se elimina, de modo que un fallo nunca deja
/// una copia parcial en el directorio de salida.
pub fn write_staged<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_path = generate_temp_filename(destination);

    if let Err(error) = write(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, destination).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        e.into()
    })
}
