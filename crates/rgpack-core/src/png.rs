/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading sources and writing results as png
//!
//! Decoding and encoding are delegated to `zune-png`, this module only
//! converts between its buffers and [`SourceImage`]/[`PackedImage`].
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_core::result::DecodingResult;
use zune_png::{PngDecoder, PngEncoder};

use crate::errors::PackErrors;
use crate::image::{PackedImage, SourceImage};

/// First eight bytes of every png file
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Decode an in memory png into a [`SourceImage`]
///
/// Both 8 and 16 bit images are accepted, palette images are expanded by
/// the decoder.
///
/// # Errors
/// `UnsupportedFormat` if the data is not a png or the decoder rejects it
pub fn decode_png(data: &[u8]) -> Result<SourceImage, PackErrors> {
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(PackErrors::UnsupportedFormat(
            "missing png signature".to_string()
        ));
    }
    let mut decoder = PngDecoder::new(ZCursor::new(data));

    decoder
        .decode_headers()
        .map_err(|e| PackErrors::UnsupportedFormat(format!("png: {e:?}")))?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| PackErrors::UnsupportedFormat("png: missing dimensions".to_string()))?;
    let colorspace = decoder
        .colorspace()
        .ok_or_else(|| PackErrors::UnsupportedFormat("png: missing colorspace".to_string()))?;

    debug!("Png is {width}x{height}, colorspace {colorspace:?}");

    let pixels = decoder
        .decode()
        .map_err(|e| PackErrors::UnsupportedFormat(format!("png: {e:?}")))?;

    match pixels {
        DecodingResult::U8(data) => SourceImage::from_u8(&data, width, height, colorspace),
        DecodingResult::U16(data) => SourceImage::from_u16(&data, width, height, colorspace),
        _ => Err(PackErrors::UnsupportedFormat(
            "png: unexpected sample type".to_string()
        ))
    }
}

/// Read and decode the source image at `path`
///
/// # Errors
/// - `SourceNotFound` if the file cannot be read
/// - `UnsupportedFormat` if it is not a decodable png
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceImage, PackErrors> {
    let path = path.as_ref();

    info!("Reading {:?}", path);

    let data = std::fs::read(path).map_err(|source| PackErrors::SourceNotFound {
        path: path.to_path_buf(),
        source
    })?;

    decode_png(&data)
}

/// Encode `image` as an 8 bit RGBA png and write it to `path`
///
/// # Errors
/// `WriteFailure` if the file cannot be created, or encoding or writing fails
pub fn write_result<P: AsRef<Path>>(path: P, image: &PackedImage) -> Result<(), PackErrors> {
    let path = path.as_ref();
    let failure = |reason: String| PackErrors::WriteFailure {
        path: path.to_path_buf(),
        reason
    };

    info!("Writing {:?}", path);

    let file = File::create(path).map_err(|e| failure(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    let options = EncoderOptions::new(
        image.width(),
        image.height(),
        ColorSpace::RGBA,
        BitDepth::Eight
    );
    let mut encoder = PngEncoder::new(image.as_bytes(), options);

    let written = encoder
        .encode(&mut writer)
        .map_err(|e| failure(format!("png: {e:?}")))?;

    writer.flush().map_err(|e| failure(e.to_string()))?;

    debug!("Wrote {written} bytes");

    Ok(())
}
