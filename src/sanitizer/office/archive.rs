use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::Result;

/// Copia un paquete Office a `output_path` aplicando una transformación por entrada.
///
/// Conserva el orden, el método de compresión, los permisos y la fecha de cada
/// entrada. Devuelve `true` si la transformación modificó alguna parte.
pub(crate) fn rewrite_docx<F>(path: &Path, output_path: &Path, mut transform: F) -> Result<bool>
where
    F: FnMut(&str, Vec<u8>) -> Result<(Vec<u8>, bool)>,
{
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut writer = ZipWriter::new(File::create(output_path)?);

    let mut modified_any = false;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        let mut options = FileOptions::<'_, ()>::default().compression_method(file.compression());
        if let Some(mode) = file.unix_mode() {
            options = options.unix_permissions(mode);
        }
        if let Some(time) = file.last_modified() {
            options = options.last_modified_time(time);
        }

        if file.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;

        let (data_to_write, changed) = transform(&name, contents)?;
        modified_any |= changed;

        writer.start_file(name, options)?;
        writer.write_all(&data_to_write)?;
    }

    writer.finish()?;

    Ok(modified_any)
}
