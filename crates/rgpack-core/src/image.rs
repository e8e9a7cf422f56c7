/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Source and destination image buffers
//!
//! A [`SourceImage`] is read only and stores interleaved RGBA samples at
//! 16 bit scale, whatever the layout and depth of the decoded file was.
//! A [`PackedImage`] is the write side, an RGBA image with 8 bit channels.
use zune_core::colorspace::ColorSpace;

use crate::errors::PackErrors;

/// Number of interleaved samples per pixel in both buffers
pub const RGBA_COMPONENTS: usize = 4;

/// A decoded image exposing RGBA samples at 16 bit precision
///
/// Color samples are alpha premultiplied. Opaque images are unaffected,
/// translucent pixels have their red and green scaled by alpha, the same
/// values an RGBA sampler over a non-premultiplied image reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width:   usize,
    height:  usize,
    samples: Vec<u16>
}

impl SourceImage {
    /// Create a source image from 8 bit pixels
    ///
    /// Samples are widened to 16 bits by replicating the byte, so `0xAB`
    /// becomes `0xABAB`.
    ///
    /// # Errors
    /// - `UnsupportedFormat` if the colorspace is not Luma, LumaA, RGB or RGBA
    /// - `DimensionMismatch` if `pixels` does not hold `width*height` pixels
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<SourceImage, PackErrors> {
        Self::from_samples(pixels, width, height, colorspace, |x| u16::from(x) * 257)
    }

    /// Create a source image from 16 bit pixels
    ///
    /// # Errors
    /// - `UnsupportedFormat` if the colorspace is not Luma, LumaA, RGB or RGBA
    /// - `DimensionMismatch` if `pixels` does not hold `width*height` pixels
    pub fn from_u16(
        pixels: &[u16], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<SourceImage, PackErrors> {
        Self::from_samples(pixels, width, height, colorspace, |x| x)
    }

    fn from_samples<T: Copy, F: Fn(T) -> u16>(
        pixels: &[T], width: usize, height: usize, colorspace: ColorSpace, widen: F
    ) -> Result<SourceImage, PackErrors> {
        let components = match colorspace {
            ColorSpace::Luma => 1,
            ColorSpace::LumaA => 2,
            ColorSpace::RGB => 3,
            ColorSpace::RGBA => 4,
            other => {
                return Err(PackErrors::UnsupportedFormat(format!(
                    "colorspace {other:?} cannot be sampled as RGBA"
                )))
            }
        };
        let expected = width * height * components;

        if pixels.len() != expected {
            return Err(PackErrors::DimensionMismatch {
                expected,
                found: pixels.len()
            });
        }
        let mut samples = Vec::with_capacity(width * height * RGBA_COMPONENTS);

        for pix in pixels.chunks_exact(components) {
            let rgba = match *pix {
                [y] => {
                    let y = widen(y);
                    [y, y, y, u16::MAX]
                }
                [y, a] => {
                    let (y, a) = (widen(y), widen(a));
                    [y, y, y, a]
                }
                [r, g, b] => [widen(r), widen(g), widen(b), u16::MAX],
                [r, g, b, a] => [widen(r), widen(g), widen(b), widen(a)],
                _ => unreachable!()
            };
            samples.extend_from_slice(&premultiply(rgba));
        }

        Ok(SourceImage {
            width,
            height,
            samples
        })
    }

    /// Width and height of the image
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Interleaved RGBA samples, row major
    #[must_use]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// RGBA samples of the pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate is out of bounds
    #[must_use]
    pub fn rgba(&self, x: usize, y: usize) -> [u16; 4] {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");

        let start = (y * self.width + x) * RGBA_COMPONENTS;
        let mut out = [0; 4];
        out.copy_from_slice(&self.samples[start..start + RGBA_COMPONENTS]);
        out
    }
}

#[allow(clippy::cast_possible_truncation)]
fn premultiply(rgba: [u16; 4]) -> [u16; 4] {
    let [r, g, b, a] = rgba;

    if a == u16::MAX {
        return rgba;
    }
    let a32 = u32::from(a);
    let scale = |c: u16| (u32::from(c) * a32 / 65535) as u16;

    [scale(r), scale(g), scale(b), a]
}

/// An RGBA image with 8 bit channels holding packed red and green
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedImage {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl PackedImage {
    /// Allocate a zeroed image
    #[must_use]
    pub fn new(width: usize, height: usize) -> PackedImage {
        PackedImage {
            width,
            height,
            pixels: vec![0; width * height * RGBA_COMPONENTS]
        }
    }

    /// Wrap existing RGBA8 pixels
    ///
    /// # Errors
    /// `DimensionMismatch` if `pixels` does not hold `width*height` RGBA pixels
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<PackedImage, PackErrors> {
        let expected = width * height * RGBA_COMPONENTS;

        if pixels.len() != expected {
            return Err(PackErrors::DimensionMismatch {
                expected,
                found: pixels.len()
            });
        }
        Ok(PackedImage {
            width,
            height,
            pixels
        })
    }

    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved RGBA bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate is out of bounds
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");

        let start = (y * self.width + x) * RGBA_COMPONENTS;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[start..start + RGBA_COMPONENTS]);
        out
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::errors::PackErrors;
    use crate::image::{PackedImage, SourceImage};

    #[test]
    fn widen_8_bit_samples() {
        let image = SourceImage::from_u8(&[255, 0, 0xAB], 1, 1, ColorSpace::RGB).unwrap();
        assert_eq!(image.rgba(0, 0), [65535, 0, 0xABAB, 65535]);
    }

    #[test]
    fn luma_replicates_into_color() {
        let image = SourceImage::from_u16(&[1000, 2000], 2, 1, ColorSpace::Luma).unwrap();
        assert_eq!(image.rgba(0, 0), [1000, 1000, 1000, 65535]);
        assert_eq!(image.rgba(1, 0), [2000, 2000, 2000, 65535]);
    }

    #[test]
    fn alpha_is_premultiplied() {
        let image = SourceImage::from_u8(&[255, 128, 0, 0], 1, 2, ColorSpace::LumaA).unwrap();
        // 65535 * 0x8080 / 65535
        assert_eq!(image.rgba(0, 0), [0x8080, 0x8080, 0x8080, 0x8080]);
        assert_eq!(image.rgba(0, 1), [0, 0, 0, 0]);

        let image = SourceImage::from_u16(&[40000, 20000, 0, 32768], 1, 1, ColorSpace::RGBA).unwrap();
        assert_eq!(image.rgba(0, 0), [20000, 10000, 0, 32768]);
    }

    #[test]
    fn mismatched_length_is_rejected() {
        let err = SourceImage::from_u8(&[0; 5], 2, 1, ColorSpace::RGB).unwrap_err();
        assert!(matches!(
            err,
            PackErrors::DimensionMismatch {
                expected: 6,
                found:    5
            }
        ));
        assert!(PackedImage::from_raw(1, 1, vec![0; 3]).is_err());
    }

    #[test]
    fn unsupported_colorspace_is_rejected() {
        let err = SourceImage::from_u8(&[0; 3], 1, 1, ColorSpace::YCbCr).unwrap_err();
        assert!(matches!(err, PackErrors::UnsupportedFormat(_)));
    }
}
