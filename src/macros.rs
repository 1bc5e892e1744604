//! Internal-use macros.

/// Implements `From<$ty>` for `Operand`, so any primitive number broadcasts as a scalar.
macro_rules! impl_scalar_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<V> From<$ty> for $crate::Operand<V> {
                fn from(scalar: $ty) -> $crate::Operand<V> {
                    $crate::Operand::Scalar(num_traits::AsPrimitive::<f64>::as_(scalar))
                }
            }
        )*
    };
}
