pub mod vec;
pub mod mat;
pub mod quat;
pub mod transform;

use core::fmt;

/// Error returned by the checked scalar-division operations.
///
/// Division never silently produces infinities or NaN; a zero divisor is
/// reported as this value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot divide by zero")
    }
}

impl std::error::Error for DivideByZero {}
