//! π-derived constants shared by the range reducer and the sine phase shift.

pub const PI: f64 = 3.1415926535897932384626433;
pub const TWO_PI: f64 = 2.0 * PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const TWO_OVER_PI: f64 = 2.0 / PI;
