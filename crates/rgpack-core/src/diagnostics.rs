/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Diagnostic side channel for the packing pipeline
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

/// Deviation (on a 0-255 scale) at which a pixel is reported
pub const ANOMALY_THRESHOLD: u8 = 10;

/// A pixel whose packed coarse red byte strays from the
/// direct 8 bit truncation of its red sample
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeAnomaly {
    pub x:               usize,
    pub y:               usize,
    /// Normalized red sample
    pub original:        f64,
    /// Direct 8 bit truncation of the red sample
    pub original_as_int: u8,
    /// Coarse component produced by the codec
    pub coarse:          f64,
    /// 8 bit truncation of the coarse component
    pub coarse_as_int:   u8
}

/// Receives anomalies found while packing
///
/// Implementations may be called from several threads at once.
pub trait Diagnostics: Sync {
    fn range_anomaly(&self, anomaly: &RangeAnomaly);
}

/// Discards everything
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn range_anomaly(&self, _: &RangeAnomaly) {}
}

/// Writes each anomaly to the debug log and keeps a count
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    count: AtomicUsize
}

impl LogDiagnostics {
    #[must_use]
    pub fn new() -> LogDiagnostics {
        LogDiagnostics::default()
    }

    /// Number of anomalies seen so far
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Diagnostics for LogDiagnostics {
    fn range_anomaly(&self, anomaly: &RangeAnomaly) {
        self.count.fetch_add(1, Ordering::Relaxed);

        debug!(
            "Pixel ({},{}): original: {}, original as int: {}, new: {}, new as int: {}",
            anomaly.x,
            anomaly.y,
            anomaly.original,
            anomaly.original_as_int,
            anomaly.coarse,
            anomaly.coarse_as_int
        );
    }
}
