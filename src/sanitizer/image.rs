//! Reconstrucción de imágenes JPEG/PNG a partir de sus píxeles.

use image::{ImageFormat, ImageReader};
use std::path::Path;

use crate::error::Result;
use crate::sanitizer::utils::write_staged;

/// Copia solo los píxeles de `source` a un contenedor nuevo en `destination`.
///
/// El contenedor de origen se descarta por completo, así que EXIF, perfiles ICC
/// y fragmentos de texto no llegan a la salida. El formato de salida se deduce
/// de la extensión de `destination`.
pub fn strip_image_metadata(source: &Path, destination: &Path) -> Result<()> {
    let img = ImageReader::open(source)?.with_guessed_format()?.decode()?;

    let (width, height) = (img.width(), img.height());
    let color = img.color();
    let pixels = img.into_bytes();
    let format = ImageFormat::from_path(destination)?;

    write_staged(destination, |temp_path| {
        image::save_buffer_with_format(temp_path, &pixels, width, height, color, format)?;
        Ok(())
    })
}
