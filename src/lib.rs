//! Two- and three-dimensional Euclidean vectors.
//!
//! # Creating vectors
//!
//! Create a `Vector2` or a `Vector3` from its components:
//!
//! ```
//! use vectors::{Vector2, Vector3};
//! let flat = Vector2::new(3., 4.);
//! let deep = Vector3::new(1., 0., 0.);
//! assert_eq!(5., flat.length());
//! assert_eq!(Vector3::X, deep);
//! ```
//!
//! Components are always stored as `f64`. Use `try_new` to build a vector out of other numbers:
//!
//! ```
//! use vectors::Vector2;
//! let vector = Vector2::try_new(3, 4_u64).unwrap();
//! assert_eq!(Vector2::new(3., 4.), vector);
//! ```
//!
//! Or start from an angle:
//!
//! ```
//! use vectors::Vector2;
//! let vector = Vector2::from_angle(90., 2.);
//! assert!(vector.approx_eq(Vector2::new(0., 2.), 1e-12));
//! ```
//!
//! # Arithmetic
//!
//! Vectors add and subtract component-wise, and scalars are broadcast to every component:
//!
//! ```
//! use vectors::Vector2;
//! let vector = Vector2::new(1., 2.) + Vector2::new(3., 4.);
//! assert_eq!(Vector2::new(4., 6.), vector);
//! assert_eq!(Vector2::new(5., 7.), vector + 1);
//! ```
//!
//! Only scalars can multiply or divide a vector. Division by zero is not checked:
//!
//! ```
//! use vectors::Vector3;
//! let vector = Vector3::new(1., 2., 3.) * 2 / 0.5;
//! assert_eq!(Vector3::new(4., 8., 12.), vector);
//! assert!((vector / 0).x.is_infinite());
//! ```
//!
//! Anything else is rejected by the compiler:
//!
//! ```compile_fail
//! use vectors::Vector2;
//! let vector = Vector2::new(1., 1.) + "a";
//! ```
//!
//! ```compile_fail
//! use vectors::Vector3;
//! let vector = Vector3::X * Vector3::Y;
//! ```
//!
//! # Changing vectors in place
//!
//! Methods like `normalize`, `rotate`, or `scale` change the vector and return it, so they can be
//! chained. Their `-ed` counterparts return a new vector instead:
//!
//! ```
//! use vectors::Vector2;
//! let mut vector = Vector2::new(0., 4.);
//! let unit = vector.normalized();
//! vector.normalize().scale(3).rotate(-90.);
//! assert_eq!(Vector2::new(0., 1.), unit);
//! assert!(vector.approx_eq(Vector2::new(3., 0.), 1e-12));
//! ```
//!
//! # Swizzling
//!
//! Read and write several components at once, in any order:
//!
//! ```
//! use vectors::Vector3;
//! let mut vector = Vector3::new(1., 2., 3.);
//! assert_eq!((3., 1.), vector.zx());
//! vector.set_zyx(&[4, 5, 6]).unwrap();
//! assert_eq!(Vector3::new(6., 5., 4.), vector);
//! assert!(vector.set_xy(&[1., 2., 3.]).is_err());
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]

#[macro_use]
mod macros;

mod error;
mod operand;
mod utils;
mod vector2;
mod vector3;

pub use error::Error;
pub use operand::Operand;
pub use vector2::Vector2;
pub use vector3::Vector3;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
