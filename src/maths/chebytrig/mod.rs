#![allow(clippy::excessive_precision)]

pub mod consts;
mod cos;
mod error;
mod kernel;
mod reduce;
mod sin;

pub use cos::{cos_32, cos_52, cos_73, cos_121};
pub use error::Error;
pub use kernel::{Digits32, Digits52, Digits73, Digits121, Tier};
pub use reduce::{cos, sin};
pub use sin::{sin_32, sin_52, sin_73, sin_121};
