/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scalar codec
//!
//! Splits a normalized scalar into a coarse and a fine component, each of
//! which fits an 8 bit channel.
//!
//! The encoding is equivalent to the shader routine
//! ```text
//! float2 enc = float2(1.0, 255.0) * v;
//! enc = frac(enc);
//! enc.x -= enc.y * (1.0 / 255.0);
//! ```
//! and decoding is `dot(enc, float2(1.0, 1.0 / 255.0))`.

/// Multipliers applied to the scalar before taking the fractional part
const ENCODE_MUL: [f64; 2] = [1.0, 255.0];

/// Weight of the fine component
const ENCODE_BIT: f64 = 1.0 / 255.0;

/// Dot product weights for decoding
const DECODE_DOT: [f64; 2] = [1.0, 1.0 / 255.0];

/// Largest value of a 16 bit channel sample
pub const MAX_SAMPLE: f64 = 65535.0;

/// Largest value of an 8 bit channel
pub const MAX_BYTE: f64 = 255.0;

/// A scalar split into coarse and fine components
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EncodedPair {
    pub coarse: f64,
    pub fine:   f64
}

/// Fractional part using floor, so negative inputs still land in `[0, 1)`
#[inline(always)]
fn frac(n: f64) -> f64 {
    n - n.floor()
}

/// Encode a scalar nominally in `[0, 1)` into a coarse/fine pair
///
/// Out of range input is not rejected, the fractional reduction wraps it
/// back into the unit range.
#[must_use]
#[inline]
pub fn encode_float_rg(v: f64) -> EncodedPair {
    let raw_x = frac(ENCODE_MUL[0] * v);
    let raw_y = frac(ENCODE_MUL[1] * v);

    EncodedPair {
        coarse: raw_x - raw_y * ENCODE_BIT,
        fine:   raw_y
    }
}

/// Recombine a coarse/fine pair into the original scalar
#[must_use]
#[inline]
pub fn decode_float_rg(pair: EncodedPair) -> f64 {
    pair.coarse * DECODE_DOT[0] + pair.fine * DECODE_DOT[1]
}

/// Convert a 16 bit channel sample into the unit range
#[must_use]
#[inline]
pub fn normalize(v: u16) -> f64 {
    f64::from(v) / MAX_SAMPLE
}

/// Scale a unit range value to the 8 bit range, without truncating
#[must_use]
#[inline]
pub fn denormalize(v: f64) -> f64 {
    v * MAX_BYTE
}

/// Scale a unit range value to an 8 bit channel
///
/// The fractional part is truncated, not rounded. Values outside the
/// representable range saturate at 0 and 255.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(v: f64) -> u8 {
    denormalize(v) as u8
}
