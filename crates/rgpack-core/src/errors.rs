/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when packing an image
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All errors that can stop a packing run
#[derive(Debug, Error)]
pub enum PackErrors {
    /// The source path could not be opened or read
    #[error("Source file {path:?} not found: {source}")]
    SourceNotFound {
        path:   PathBuf,
        #[source]
        source: io::Error
    },
    /// The source could not be decoded as a supported raster image
    #[error("Could not decode source, only png is supported: {0}")]
    UnsupportedFormat(String),
    /// The result could not be encoded, created or written
    #[error("Could not write result to {path:?}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },
    /// A buffer length does not agree with the image dimensions
    #[error("Dimension mismatch, expected {expected} but found {found}")]
    DimensionMismatch { expected: usize, found: usize }
}
