//! Range reduction shared by every tier.
//!
//! Folds x into [0, 2pi) with the remainder and evenness of cos, then reflects
//! each quadrant onto [0, pi/2] so the kernel never sees anything wider.

use super::Error;
use super::consts::{HALF_PI, PI, TWO_OVER_PI, TWO_PI};
use super::kernel::{Tier, eval};

/// cos(x) for any finite x using tier `T`.
#[inline]
pub fn cos<T: Tier>(x: f64) -> Result<f64, Error> {
    if !x.is_finite() {
        log::warn!("cos: non-finite argument {x}");
        return Err(Error::NonFinite(x));
    }

    // cos(-x) = cos(x)
    let v = (x % TWO_PI).abs();
    let quadrant = (v * TWO_OVER_PI) as i32;
    match quadrant {
        0 => Ok(eval::<T>(v)),
        1 => Ok(-eval::<T>(PI - v)),
        2 => Ok(-eval::<T>(v - PI)),
        3 => Ok(eval::<T>(TWO_PI - v)),
        _ => {
            log::error!("cos: quadrant {quadrant} out of range for x={x} (reduced {v})");
            Err(Error::Quadrant(quadrant))
        }
    }
}

/// sin(x) = cos(pi/2 - x) using tier `T`.
///
/// A non-finite `x` fails with [`Error::NonFinite`] carrying the shifted
/// argument `pi/2 - x`, so `sin(+inf)` reports `-inf`.
#[inline]
pub fn sin<T: Tier>(x: f64) -> Result<f64, Error> {
    cos::<T>(HALF_PI - x)
}
