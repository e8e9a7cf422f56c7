/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pack the red and green channels of an image
//!
//! Every pixel `(r, g, _, _)` of the source becomes
//! ```text
//! (coarse(r), fine(r), coarse(g), fine(g))
//! ```
//! in the output, each component scaled to 8 bits by truncation.
//!
//! Pixels are independent of each other, with the `threads` feature the
//! image is split into row bands which are packed in parallel.
use log::trace;

use crate::codec::{encode_float_rg, normalize, quantize};
use crate::diagnostics::{Diagnostics, NoDiagnostics, RangeAnomaly, ANOMALY_THRESHOLD};
use crate::image::{PackedImage, SourceImage, RGBA_COMPONENTS};

/// Result of packing a single pixel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PackedPixel {
    /// Output channels
    pub bytes: [u8; 4],
    original:  f64,
    coarse:    f64
}

impl PackedPixel {
    /// Check whether the coarse red byte strays from the direct
    /// truncation of the red sample, placing the result at `(x, y)`
    ///
    /// The difference is computed on bytes and wraps.
    #[must_use]
    pub fn range_anomaly(&self, x: usize, y: usize) -> Option<RangeAnomaly> {
        let original_as_int = quantize(self.original);
        let coarse_as_int = self.bytes[0];

        if original_as_int.wrapping_sub(coarse_as_int) >= ANOMALY_THRESHOLD {
            return Some(RangeAnomaly {
                x,
                y,
                original: self.original,
                original_as_int,
                coarse: self.coarse,
                coarse_as_int
            });
        }
        None
    }
}

/// Pack the 16 bit red and green samples of one pixel
#[must_use]
pub fn pack_pixel(r: u16, g: u16) -> PackedPixel {
    let norm_r = normalize(r);
    let norm_g = normalize(g);

    let enc_r = encode_float_rg(norm_r);
    let enc_g = encode_float_rg(norm_g);

    PackedPixel {
        bytes:    [
            quantize(enc_r.coarse),
            quantize(enc_r.fine),
            quantize(enc_g.coarse),
            quantize(enc_g.fine)
        ],
        original: norm_r,
        coarse:   enc_r.coarse
    }
}

/// Pack red and green channels into a new RGBA image
///
/// # Example
/// ```
/// use rgpack_core::diagnostics::LogDiagnostics;
/// use rgpack_core::image::SourceImage;
/// use rgpack_core::pipeline::PackRG;
/// use zune_core::colorspace::ColorSpace;
///
/// let source = SourceImage::from_u16(&[65535, 0, 0], 1, 1, ColorSpace::RGB).unwrap();
/// let diagnostics = LogDiagnostics::new();
/// let packed = PackRG::with_diagnostics(&diagnostics).execute(&source);
///
/// assert_eq!(packed.pixel(0, 0), [0, 0, 0, 0]);
/// assert_eq!(diagnostics.count(), 1);
/// ```
pub struct PackRG<'a> {
    diagnostics: &'a dyn Diagnostics
}

impl PackRG<'static> {
    /// Create a packer that drops diagnostics
    #[must_use]
    pub fn new() -> PackRG<'static> {
        PackRG {
            diagnostics: &NoDiagnostics
        }
    }
}

impl Default for PackRG<'static> {
    fn default() -> Self {
        PackRG::new()
    }
}

impl<'a> PackRG<'a> {
    /// Create a packer reporting range anomalies to `diagnostics`
    #[must_use]
    pub fn with_diagnostics(diagnostics: &'a dyn Diagnostics) -> PackRG<'a> {
        PackRG { diagnostics }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "Pack RG"
    }

    /// Pack `image`, returning a new image of the same dimensions
    #[must_use]
    pub fn execute(&self, image: &SourceImage) -> PackedImage {
        let (width, height) = image.dimensions();
        let mut packed = PackedImage::new(width, height);

        trace!("Running {} on a {}x{} image", self.name(), width, height);

        if width == 0 || height == 0 {
            return packed;
        }
        #[cfg(feature = "threads")]
        let bands = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        #[cfg(not(feature = "threads"))]
        let bands = 1;

        self.pack_into(image, packed.as_bytes_mut(), bands);

        packed
    }

    /// Pack `image` into `output`, splitting the rows into at most `bands`
    /// bands which are packed on their own threads
    pub(crate) fn pack_into(&self, image: &SourceImage, output: &mut [u8], bands: usize) {
        let (width, height) = image.dimensions();
        let source = image.samples();

        let bands = bands.clamp(1, height.max(1));

        if bands == 1 || width == 0 {
            self.pack_band(source, output, 0, width);
            return;
        }
        let rows_per_band = height.div_ceil(bands);
        let band_length = rows_per_band * width * RGBA_COMPONENTS;

        trace!("Packing with {} threads, {} rows each", bands, rows_per_band);

        std::thread::scope(|s| {
            for (band, (src, out)) in source
                .chunks(band_length)
                .zip(output.chunks_mut(band_length))
                .enumerate()
            {
                let first_pixel = band * rows_per_band * width;
                s.spawn(move || self.pack_band(src, out, first_pixel, width));
            }
        });
    }

    fn pack_band(&self, source: &[u16], output: &mut [u8], first_pixel: usize, width: usize) {
        for (i, (src, out)) in source
            .chunks_exact(RGBA_COMPONENTS)
            .zip(output.chunks_exact_mut(RGBA_COMPONENTS))
            .enumerate()
        {
            let pixel = pack_pixel(src[0], src[1]);
            out.copy_from_slice(&pixel.bytes);

            let index = first_pixel + i;

            if let Some(anomaly) = pixel.range_anomaly(index % width, index / width) {
                self.diagnostics.range_anomaly(&anomaly);
            }
        }
    }
}
