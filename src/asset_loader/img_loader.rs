use std::fs::File;
use std::io::BufReader;

use image::ImageFormat;

use crate::error::RenderError;
use crate::textures::{FilterMode, Texture};

/// Decodes an image file from disk into the `{width, height, channels,
/// bytes}` buffer `Texture::sample` expects. Always decodes to RGB8 (3
/// channels) regardless of the source format's channel count; any alpha
/// channel is dropped rather than surfaced, since nothing in this crate's
/// material model consumes it.
///
/// # Errors
/// Fatal (per spec's texture-load policy): a missing file, an unreadable
/// file, or a format `image` cannot decode all surface as `RenderError`.
pub fn load(image_filename: &str) -> Result<Texture, RenderError> {
    let path = super::build_asset_path(image_filename).unwrap_or_else(|| image_filename.to_string());

    let file = File::open(&path).map_err(|e| RenderError::TextureFileIo {
        path: image_filename.to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let format = ImageFormat::from_path(&path).map_err(|e| RenderError::TextureDecode {
        path: image_filename.to_string(),
        source: e,
    })?;

    let decoded = image::load(reader, format).map_err(|e| RenderError::TextureDecode {
        path: image_filename.to_string(),
        source: e,
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    let bytes = rgb.into_raw();

    Texture::new(width, height, 3, bytes, FilterMode::Nearest, image_filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_texture_file_io_error() {
        let err = load("definitely-not-a-real-asset.png").unwrap_err();
        assert!(matches!(err, RenderError::TextureFileIo { .. }));
    }
}
