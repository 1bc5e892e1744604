//! Right-hand operands of vector addition and subtraction.

use num_traits::AsPrimitive;

/// The right-hand side of an addition or a subtraction.
///
/// Vectors add component-wise, scalars are broadcast to every component. Anything that converts
/// into an `Operand` can be used with `+`, `-`, `+=`, `-=` and the named equivalents.
///
/// # Examples
///
/// ```
/// use vectors::{Operand, Vector2};
/// let vector = Vector2::new(1., 2.);
/// assert_eq!(Operand::Vector(vector), Operand::from(vector));
/// assert_eq!(Operand::<Vector2>::Scalar(3.), Operand::from(3_u8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<V> {
    /// A vector of the same type, applied component by component.
    Vector(V),
    /// A scalar, applied to every component.
    Scalar(f64),
}

impl<V> Operand<V> {
    /// Creates a scalar operand from any primitive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::{Operand, Vector3};
    /// let operand: Operand<Vector3> = Operand::scalar(2_i64);
    /// assert_eq!(Operand::Scalar(2.), operand);
    /// ```
    pub fn scalar<S: AsPrimitive<f64>>(scalar: S) -> Operand<V> {
        Operand::Scalar(scalar.as_())
    }
}

impl_scalar_operand!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;

    #[test]
    fn integers_become_floats() {
        assert_eq!(Operand::<Vector3>::Scalar(-4.), Operand::from(-4_i32));
        assert_eq!(Operand::<Vector3>::Scalar(7.), Operand::from(7_usize));
    }

    #[test]
    fn nan_scalar() {
        match Operand::<Vector3>::from(f32::NAN) {
            Operand::Scalar(scalar) => assert!(scalar.is_nan()),
            Operand::Vector(_) => panic!("a float should be a scalar operand"),
        }
    }
}
