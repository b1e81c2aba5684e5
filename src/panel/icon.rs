//! Decoded tab/window icons
//!
//! Icons are kept as decoded RGBA8 buffers. Two icons loaded independently
//! from the same file compare equal, which is what default-icon suppression
//! on reattach relies on.

use std::path::Path;

use crate::error::DockError;

/// An RGBA8 image, row-major, `width * height * 4` bytes
#[derive(Debug, Clone)]
pub struct Icon {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Icon {
    /// Build an icon from a raw RGBA8 buffer
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        (rgba.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    /// A single-color icon (ARGB `0xAARRGGBB`)
    pub fn solid(width: u32, height: u32, argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        let rgba = [r, g, b, a].repeat(width as usize * height as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decode an encoded image (PNG, ICO, ...) from memory
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, DockError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// Decode an image file from disk
    pub fn from_path(path: &Path) -> Result<Self, DockError> {
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        tracing::debug!(path = %path.display(), width, height, "loaded icon");
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Byte-level equality of the decoded pixels
    pub fn pixel_eq(&self, other: &Icon) -> bool {
        self.width == other.width && self.height == other.height && self.rgba == other.rgba
    }

    /// Pixel at (x, y) as ARGB `0xAARRGGBB`, or `None` outside the image
    pub fn argb_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[i..i + 4];
        Some(u32::from_be_bytes([px[3], px[0], px[1], px[2]]))
    }
}

impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        self.pixel_eq(other)
    }
}

impl Eq for Icon {}
