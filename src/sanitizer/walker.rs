//! Recorrido de directorios por niveles.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::dispatch::process_file;
use super::report::RunSummary;

/// Procesa los archivos de `root` nivel por nivel.
///
/// Sin `recursive` solo se tratan los archivos del propio `root`. El
/// directorio de salida nunca se recorre aunque esté dentro de `root`, los
/// enlaces simbólicos a directorios no se siguen y un directorio ilegible se
/// registra y se salta sin abortar la ejecución.
pub fn walk_directory(root: &Path, output_dir: &Path, recursive: bool, summary: &mut RunSummary) {
    let canonical_output = fs::canonicalize(output_dir).ok();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("No se pudo leer {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries {
            let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
                Ok(found) => found,
                Err(e) => {
                    warn!("Entrada inválida en {}: {}", dir.display(), e);
                    continue;
                }
            };

            // Los enlaces simbólicos a directorios no se siguen.
            if file_type.is_symlink() && path.is_dir() {
                debug!("Se omite el enlace a directorio {}", path.display());
                continue;
            }

            if file_type.is_dir() {
                if recursive && !is_output_dir(&path, canonical_output.as_ref()) {
                    queue.push_back(path);
                } else {
                    debug!("Se omite el subdirectorio {}", path.display());
                }
                continue;
            }

            summary.record(process_file(&path, output_dir));
        }
    }
}

fn is_output_dir(path: &Path, canonical_output: Option<&PathBuf>) -> bool {
    match (canonical_output, fs::canonicalize(path)) {
        (Some(output), Ok(path)) => &path == output,
        _ => false,
    }
}
