//! Per-tier cosine entry points.
//!
//! Thin wrappers around the shared range reducer in reduce.rs; each accepts
//! any finite x.

use super::Error;
use super::kernel::{Digits32, Digits52, Digits73, Digits121};
use super::reduce;

/// cos(x), accurate to about 3.2 decimal digits.
#[inline(always)]
pub fn cos_32(x: f64) -> Result<f64, Error> {
    reduce::cos::<Digits32>(x)
}

/// cos(x), accurate to about 5.2 decimal digits.
#[inline(always)]
pub fn cos_52(x: f64) -> Result<f64, Error> {
    reduce::cos::<Digits52>(x)
}

/// cos(x), accurate to about 7.3 decimal digits.
#[inline(always)]
pub fn cos_73(x: f64) -> Result<f64, Error> {
    reduce::cos::<Digits73>(x)
}

/// cos(x), accurate to about 12.1 decimal digits.
#[inline(always)]
pub fn cos_121(x: f64) -> Result<f64, Error> {
    reduce::cos::<Digits121>(x)
}
