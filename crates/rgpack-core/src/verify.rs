/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode packed pixels and measure how well they reconstruct the source
use crate::codec::{decode_float_rg, normalize, EncodedPair, MAX_BYTE};
use crate::errors::PackErrors;
use crate::image::{PackedImage, SourceImage, RGBA_COMPONENTS};

/// Worst reconstruction error seen per channel, in the unit range
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Reconstruction {
    pub max_error_red:   f64,
    pub max_error_green: f64,
    pub pixels:          usize
}

/// Recover the normalized red and green values of a packed pixel
#[must_use]
pub fn unpack_pixel(pixel: [u8; 4]) -> (f64, f64) {
    let pair = |coarse: u8, fine: u8| EncodedPair {
        coarse: f64::from(coarse) / MAX_BYTE,
        fine:   f64::from(fine) / MAX_BYTE
    };
    (
        decode_float_rg(pair(pixel[0], pixel[1])),
        decode_float_rg(pair(pixel[2], pixel[3]))
    )
}

/// Decode every pixel of `packed` and compare it against `source`
///
/// # Errors
/// `DimensionMismatch` if the two images differ in size
pub fn verify(source: &SourceImage, packed: &PackedImage) -> Result<Reconstruction, PackErrors> {
    if source.dimensions() != packed.dimensions() {
        let (sw, sh) = source.dimensions();
        let (pw, ph) = packed.dimensions();

        return Err(PackErrors::DimensionMismatch {
            expected: sw * sh,
            found:    pw * ph
        });
    }
    let mut stats = Reconstruction::default();

    for (src, out) in source
        .samples()
        .chunks_exact(RGBA_COMPONENTS)
        .zip(packed.as_bytes().chunks_exact(RGBA_COMPONENTS))
    {
        let (red, green) = unpack_pixel([out[0], out[1], out[2], out[3]]);

        stats.max_error_red = stats.max_error_red.max((red - normalize(src[0])).abs());
        stats.max_error_green = stats.max_error_green.max((green - normalize(src[1])).abs());
        stats.pixels += 1;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::image::{PackedImage, SourceImage};
    use crate::pipeline::PackRG;
    use crate::verify::{unpack_pixel, verify};

    #[test]
    fn unpack_known_bytes() {
        let (red, green) = unpack_pixel([0, 0, 255, 0]);
        assert_eq!(red, 0.0);
        assert!((green - 1.0).abs() < 1e-12);

        let (red, _) = unpack_pixel([127, 127, 0, 0]);
        assert!((red - (127.0 / 255.0 + 127.0 / 65025.0)).abs() < 1e-12);
    }

    #[test]
    fn gradient_reconstructs_closely() {
        // every 16 bit sample except the saturated one, which wraps to zero
        let pixels: Vec<u16> = (0..u16::MAX).step_by(7).collect();
        let width = pixels.len();

        let source = SourceImage::from_u16(&pixels, width, 1, ColorSpace::Luma).unwrap();
        let packed = PackRG::new().execute(&source);
        let stats = verify(&source, &packed).unwrap();

        assert_eq!(stats.pixels, width);
        assert!(stats.max_error_red < 2.0 / 255.0, "{stats:?}");
        assert!(stats.max_error_green < 2.0 / 255.0, "{stats:?}");
    }

    #[test]
    fn saturated_sample_is_reported() {
        let source = SourceImage::from_u16(&[65535], 1, 1, ColorSpace::Luma).unwrap();
        let packed = PackRG::new().execute(&source);
        let stats = verify(&source, &packed).unwrap();

        assert!((stats.max_error_red - 1.0).abs() < 1e-12);
    }

    #[test]
    fn size_mismatch() {
        let source = SourceImage::from_u16(&[0; 4], 2, 2, ColorSpace::Luma).unwrap();
        assert!(verify(&source, &PackedImage::new(1, 1)).is_err());
    }
}
