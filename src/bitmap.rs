//! Decoded Images as Packed-Pixel Bitmaps
//!
//! A [`Bitmap`] is a decoded image already converted to the crate's packed
//! `0xAARRGGBB` layout, ready to composite into the frame buffer. File
//! decoding itself is delegated to the `image` crate.

use std::path::Path;

use crate::error::{RasterError, Result};
use crate::util::argb;

/// An image stored as packed `0xAARRGGBB` pixels, row-major
#[derive(Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Decode an image file into a packed bitmap.
    ///
    /// Any format the `image` crate recognizes works; pixels come back in
    /// the same `0xAARRGGBB` layout the frame buffer uses. A missing file or
    /// unsupported format surfaces as [`RasterError::Decode`]; there is no
    /// pixel data to misuse on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RasterError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let count = (width as usize) * (height as usize);

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| RasterError::Allocation { bytes: count * 4 })?;

        // 8-bit RGBA to packed ARGB
        for px in rgba.pixels() {
            let [r, g, b, a] = px.0;
            pixels.push(argb(a, r, g, b));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap from already-packed pixel data.
    /// Returns None when the pixel count does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() == (width * height) as usize {
            Some(Self {
                width,
                height,
                pixels,
            })
        } else {
            None
        }
    }

    /// Generate a checkerboard pattern, the placeholder used when image
    /// decoding fails.
    pub fn checkerboard(size: u32, tile_size: u32, c1: u32, c2: u32) -> Self {
        let mut pixels = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                let checker = ((x / tile_size) + (y / tile_size)) % 2 == 0;
                pixels.push(if checker { c1 } else { c2 });
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major packed pixels, stride == width
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
