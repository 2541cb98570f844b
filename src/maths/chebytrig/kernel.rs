//! Even cosine polynomials on [0, pi/2], one coefficient table per tier.
//!
//! Each tier evaluates
//!
//! ```text
//! cos(x) ≈ c1 + x²(c2 + x²(c3 + x²(c4 + ...)))
//! ```
//!
//! The tables are least-error fits over [0, pi/2] (after Ganssle, "A Guide to
//! Approximations"), not truncated Taylor series. Outside that interval the
//! error grows quickly, so only the range reducer calls [`eval`].

mod sealed {
    pub trait Sealed {}
}

/// An accuracy tier: a fixed coefficient table and its declared precision.
///
/// Sealed; the four tiers below are the only implementors.
pub trait Tier: sealed::Sealed {
    /// Declared accuracy in decimal digits.
    const DIGITS: f64;
    /// Bound on the absolute error over the real line, 10^-floor(DIGITS).
    const TOLERANCE: f64;
    /// Horner coefficients c1..cN of the polynomial in x².
    const COEFFS: &'static [f64];
}

/// About 3.2 decimal digits, 3 terms.
#[derive(Debug, Clone, Copy)]
pub enum Digits32 {}

/// About 5.2 decimal digits, 4 terms.
#[derive(Debug, Clone, Copy)]
pub enum Digits52 {}

/// About 7.3 decimal digits, 5 terms.
#[derive(Debug, Clone, Copy)]
pub enum Digits73 {}

/// About 12.1 decimal digits, 7 terms.
#[derive(Debug, Clone, Copy)]
pub enum Digits121 {}

impl sealed::Sealed for Digits32 {}
impl sealed::Sealed for Digits52 {}
impl sealed::Sealed for Digits73 {}
impl sealed::Sealed for Digits121 {}

impl Tier for Digits32 {
    const DIGITS: f64 = 3.2;
    const TOLERANCE: f64 = 1e-3;
    const COEFFS: &'static [f64] = &[0.99940307, -0.49558072, 0.03679168];
}

impl Tier for Digits52 {
    const DIGITS: f64 = 5.2;
    const TOLERANCE: f64 = 1e-5;
    const COEFFS: &'static [f64] = &[
        0.9999932946,
        -0.4999124376,
        0.0414877472,
        -0.0012712095,
    ];
}

impl Tier for Digits73 {
    const DIGITS: f64 = 7.3;
    const TOLERANCE: f64 = 1e-7;
    const COEFFS: &'static [f64] = &[
        0.999999953464,
        -0.499999053455,
        0.0416635846769,
        -0.0013853704264,
        0.00002315393167,
    ];
}

impl Tier for Digits121 {
    const DIGITS: f64 = 12.1;
    const TOLERANCE: f64 = 1e-12;
    const COEFFS: &'static [f64] = &[
        0.99999999999925182,
        -0.49999999997024012,
        0.041666666473384543,
        -0.001388888418000423,
        0.0000248010406484558,
        -0.0000002752469638432,
        0.0000000019907856854,
    ];
}

/// cos(x) for x in [0, pi/2].
#[inline(always)]
pub(super) fn eval<T: Tier>(x: f64) -> f64 {
    let x2 = x * x;
    T::COEFFS.iter().rev().fold(0.0, |acc, &c| c + x2 * acc)
}
