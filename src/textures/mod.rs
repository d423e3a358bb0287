use crate::error::RenderError;
use crate::utils::Color;

/// How `Texture::sample` maps a continuous `(u, v)` to a pixel. Only
/// `Nearest` is implemented; the others exist because the source this
/// crate generalizes from has a scaffold for them, but no scene format
/// this crate reads can request one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Bilinear,
    Trilinear,
    Anisotropic,
}

/// A decoded image: `width * height * channels` bytes, row-major, top
/// row first. `channels` is 3 (RGB) or 4 (RGBA, alpha ignored).
#[derive(Debug, Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    channels: u32,
    bytes: Vec<u8>,
    filter: FilterMode,
}

impl Texture {
    /// Fatal at construction if `channels` isn't 3 or 4, per spec.md §7's
    /// "Texture file missing or wrong channel count" policy. `path` is only
    /// used to label the error.
    pub fn new(width: u32, height: u32, channels: u32, bytes: Vec<u8>, filter: FilterMode, path: &str) -> Result<Texture, RenderError> {
        if channels != 3 && channels != 4 {
            return Err(RenderError::UnsupportedChannelCount {
                path: path.to_string(),
                channels,
            });
        }

        debug_assert_eq!(bytes.len() as u64, width as u64 * height as u64 * channels as u64);
        Ok(Texture {
            width,
            height,
            channels,
            bytes,
            filter,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn sample(&self, u: f64, v: f64) -> Result<Color, RenderError> {
        if self.filter != FilterMode::Nearest {
            return Err(RenderError::NotImplemented(format!("{:?}", self.filter)));
        }

        let u_px = ((self.width as f64 - 1.0) * u).round().clamp(0.0, self.width as f64 - 1.0) as u32;
        let v_px = ((self.height as f64 - 1.0) * v).round().clamp(0.0, self.height as f64 - 1.0) as u32;

        let pos = (v_px * self.width * self.channels + u_px * self.channels) as usize;
        let r = self.bytes[pos] as f64 / 255.0;
        let g = self.bytes[pos + 1] as f64 / 255.0;
        let b = self.bytes[pos + 2] as f64 / 255.0;
        Ok(Color::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_sample_rounds_to_pixel() {
        // 2x2 image, channels=3: red, green / blue, white.
        let bytes = vec![
            255, 0, 0, 0, 255, 0, // top row: red, green
            0, 0, 255, 255, 255, 255, // bottom row: blue, white
        ];
        let tex = Texture::new(2, 2, 3, bytes, FilterMode::Nearest, "test.png").unwrap();

        let top_left = tex.sample(0.0, 0.0).unwrap();
        assert_eq!(top_left, Color::new(1.0, 0.0, 0.0));

        let bottom_right = tex.sample(1.0, 1.0).unwrap();
        assert_eq!(bottom_right, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn non_nearest_filter_is_not_implemented() {
        let tex = Texture::new(1, 1, 3, vec![0, 0, 0], FilterMode::Bilinear, "test.png").unwrap();
        assert!(tex.sample(0.5, 0.5).is_err());
    }

    #[test]
    fn bad_channel_count_is_fatal_at_construction() {
        let err = Texture::new(1, 1, 2, vec![0, 0], FilterMode::Nearest, "test.png").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedChannelCount { channels: 2, .. }));
    }
}
