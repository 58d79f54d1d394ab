use crate::{ResourceError, Result};
use std::path::Path;

/// Decoded image, always 4 bytes per pixel in R, G, B, A order, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub const BYTES_PER_PIXEL: usize = 4;

    pub fn pitch(&self) -> usize {
        self.width * Self::BYTES_PER_PIXEL
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let at = y * self.pitch() + x * Self::BYTES_PER_PIXEL;
        [
            self.pixels[at],
            self.pixels[at + 1],
            self.pixels[at + 2],
            self.pixels[at + 3],
        ]
    }
}

pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = match stb_image::image::load(path) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(ResourceError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "32-bit float images not supported".to_string(),
            });
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => {
            return Err(ResourceError::Decode {
                path: path.to_path_buf(),
                reason: e,
            })
        }
    };

    let pixels = match expand_to_rgba(img.depth, &img.data) {
        Some(pixels) => pixels,
        None => {
            return Err(ResourceError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: format!("{} channels per pixel", img.depth),
            })
        }
    };
    log::debug!(
        "decoded {} ({}x{}, {} channels)",
        path.display(),
        img.width,
        img.height,
        img.depth
    );

    Ok(RgbaImage {
        width: img.width,
        height: img.height,
        pixels,
    })
}

/// Widens grey, grey+alpha and RGB pixel data to RGBA. Returns `None` for
/// channel counts stb_image never produces.
pub fn expand_to_rgba(depth: usize, data: &[u8]) -> Option<Vec<u8>> {
    if !(1..=4).contains(&depth) {
        return None;
    }
    let mut out = Vec::with_capacity(data.len() / depth * RgbaImage::BYTES_PER_PIXEL);
    for px in data.chunks_exact(depth) {
        let rgba = match *px {
            [l] => [l, l, l, 0xFF],
            [l, a] => [l, l, l, a],
            [r, g, b] => [r, g, b, 0xFF],
            [r, g, b, a] => [r, g, b, a],
            _ => unreachable!("chunk size bounded by depth"),
        };
        out.extend_from_slice(&rgba);
    }
    Some(out)
}
