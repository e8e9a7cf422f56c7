/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Two byte fixed point packing for image channels
//!
//! This stores a 16 bit precision scalar inside two 8 bit channels by
//! splitting it into a coarse byte and a fine residual byte. The scalar is
//! recovered with a dot product, the same trick shaders use to pack
//! normal map components into an 8 bit texture.
//!
//! The red and green channels of a source image are packed into a new
//! RGBA image laid out as `(coarse(red), fine(red), coarse(green), fine(green))`.
//!
//! # Example
//! - Pack a 16 bit gray image
//! ```
//! use rgpack_core::image::SourceImage;
//! use rgpack_core::pipeline::PackRG;
//! use zune_core::colorspace::ColorSpace;
//!
//! let source = SourceImage::from_u16(&[0x8080; 4], 2, 2, ColorSpace::Luma).unwrap();
//! let packed = PackRG::new().execute(&source);
//!
//! assert_eq!(packed.dimensions(), (2, 2));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod codec;
pub mod diagnostics;
pub mod errors;
pub mod image;
pub mod pipeline;
pub mod png;
pub mod verify;
