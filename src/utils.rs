//! Validation and arithmetic helpers shared by the vector types.

use crate::{Error, Result};
use log::{Level, log};
use num_traits::ToPrimitive;
use std::any;

/// Converts a numeric value into a vector component.
///
/// Fails with `Error::TypeMismatch`, reported against `name`, if the value has no `f64`
/// representation.
pub(crate) fn to_component<T: ToPrimitive>(value: T, name: &'static str) -> Result<f64> {
    value.to_f64().ok_or_else(|| {
        let actual = any::type_name::<T>();
        log!(
            Level::Debug,
            "{} of type {} cannot be used as f64",
            name,
            actual
        );
        Error::TypeMismatch {
            name,
            expected: "f64",
            actual,
        }
    })
}

/// Converts the values handed to a swizzle setter into exactly `N` components.
///
/// Nothing is returned unless every value converts, so callers can assign the result without
/// leaving the vector half-written.
pub(crate) fn components<T: ToPrimitive + Copy, const N: usize>(
    accessor: &'static str,
    values: &[T],
) -> Result<[f64; N]> {
    if values.len() != N {
        log!(
            Level::Debug,
            "{} was given {} values instead of {}",
            accessor,
            values.len(),
            N
        );
        return Err(Error::InvalidArgumentLength {
            accessor,
            expected: N,
            actual: values.len(),
        });
    }
    let mut components = [0.; N];
    for (component, &value) in components.iter_mut().zip(values) {
        *component = to_component(value, "values")?;
    }
    Ok(components)
}

/// Floored division of two floats.
///
/// The quotient is rounded toward negative infinity and the implied remainder takes the sign of
/// the divisor. Dividing by zero gives the IEEE-754 result (infinite or NaN) instead of failing.
pub(crate) fn floor_div(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0. {
        return (dividend / divisor).floor();
    }
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0. && (divisor < 0.) != (remainder < 0.) {
        quotient -= 1.;
    }
    if quotient == 0. {
        // Keep the sign of the true quotient, e.g. -0. // 2 gives -0.
        return 0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.
    } else {
        floored
    }
}
