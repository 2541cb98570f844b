//! Per-tier sine entry points.
//!
//! The sine is the shifted cosine, sin(x) = cos(pi/2 - x), so these reuse the
//! same reducer and kernels as cos.rs.

use super::Error;
use super::kernel::{Digits32, Digits52, Digits73, Digits121};
use super::reduce;

/// sin(x), accurate to about 3.2 decimal digits.
#[inline(always)]
pub fn sin_32(x: f64) -> Result<f64, Error> {
    reduce::sin::<Digits32>(x)
}

/// sin(x), accurate to about 5.2 decimal digits.
#[inline(always)]
pub fn sin_52(x: f64) -> Result<f64, Error> {
    reduce::sin::<Digits52>(x)
}

/// sin(x), accurate to about 7.3 decimal digits.
#[inline(always)]
pub fn sin_73(x: f64) -> Result<f64, Error> {
    reduce::sin::<Digits73>(x)
}

/// sin(x), accurate to about 12.1 decimal digits.
#[inline(always)]
pub fn sin_121(x: f64) -> Result<f64, Error> {
    reduce::sin::<Digits121>(x)
}
