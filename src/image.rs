use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::RenderError;
use crate::utils::Color;

/// A row-major `height x width` grid of linear-radiance colors. Values
/// stored here are already gamma-encoded by the renderer before the
/// write; `dump` only clamps and scales to bytes, it does not re-encode.
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Image {
        Image {
            width,
            height,
            pixels: vec![Color::black(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, row: u32, col: u32, color: Color) {
        let idx = row as usize * self.width as usize + col as usize;
        self.pixels[idx] = color;
    }

    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// Writes a PPM P3 file: header `"P3\n<w> <h>\n255\n"`, then one line
    /// of `"r g b"` per pixel in row-major order.
    pub fn dump(&self, path: &str) -> Result<(), RenderError> {
        let file = File::create(path).map_err(|e| RenderError::ImageWriteIo {
            path: path.to_string(),
            source: e,
        })?;
        let mut bw = BufWriter::new(file);

        writeln!(bw, "P3\n{} {}\n255", self.width, self.height).map_err(|e| RenderError::ImageWriteIo {
            path: path.to_string(),
            source: e,
        })?;

        for pixel in &self.pixels {
            let (r, g, b) = pixel.to_ppm_bytes();
            writeln!(bw, "{r} {g} {b}").map_err(|e| RenderError::ImageWriteIo {
                path: path.to_string(),
                source: e,
            })?;
        }

        bw.flush().map_err(|e| RenderError::ImageWriteIo {
            path: path.to_string(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut img = Image::new(3, 2);
        img.set(1, 2, Color::white());
        assert_eq!(img.get(1, 2), Color::white());
        assert_eq!(img.get(0, 0), Color::black());
    }

    #[test]
    fn dump_writes_exact_header_and_pixel_count() {
        let mut img = Image::new(2, 2);
        img.set(0, 0, Color::white());
        let path = std::env::temp_dir().join("path_tracer_image_test.ppm");
        let path_str = path.to_str().unwrap();

        img.dump(path_str).unwrap();
        let contents = std::fs::read_to_string(path_str).unwrap();
        let mut lines = contents.lines();

        assert_eq!(lines.next().unwrap(), "P3");
        assert_eq!(lines.next().unwrap(), "2 2");
        assert_eq!(lines.next().unwrap(), "255");
        let pixel_lines: Vec<&str> = lines.collect();
        assert_eq!(pixel_lines.len(), 4);

        std::fs::remove_file(path_str).ok();
    }
}
