#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::chebytrig::*;
