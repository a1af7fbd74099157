use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Loads a slide image from disk as an upright texture.
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("decoding {}: {e}", path.display()))?;

    // 3 = 180°, 6 = 90° clockwise, 8 = 90° counter-clockwise; flips ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %path.display(), orientation, "slide image decoded");

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("uploading {}: {e}", path.display()))?;
    Ok(texture)
}
