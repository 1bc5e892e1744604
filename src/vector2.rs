//! Two-dimensional vectors.

use crate::{Error, Operand, Result, utils};
use log::{Level, log};
use num_traits::{AsPrimitive, ToPrimitive};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// An x, y vector.
///
/// Methods ending in `-ed` (`normalized`, `rotated`, `scaled`, ...) return a new vector. Their
/// counterparts (`normalize`, `rotate`, `scale`, ...) change the vector in place and return it
/// again, so calls can be chained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2::new(0., 0.);

    /// The unit vector along x.
    pub const X: Vector2 = Vector2::new(1., 0.);

    /// The unit vector along y.
    pub const Y: Vector2 = Vector2::new(0., 1.);

    /// Creates a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::new(1., 2.);
    /// assert_eq!(1., vector.x);
    /// assert_eq!(2., vector.y);
    /// ```
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    /// Creates a new vector from any numbers, converting them to floats.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::try_new(3_u8, -4_i64).unwrap();
    /// assert_eq!(Vector2::new(3., -4.), vector);
    /// ```
    pub fn try_new<X: ToPrimitive, Y: ToPrimitive>(x: X, y: Y) -> Result<Vector2> {
        Ok(Vector2 {
            x: utils::to_component(x, "x")?,
            y: utils::to_component(y, "y")?,
        })
    }

    /// Creates a vector from an angle in degrees and a length.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::from_angle(180., 2.);
    /// assert!((vector.x + 2.).abs() < 1e-12);
    /// assert!(vector.y.abs() < 1e-12);
    /// ```
    pub fn from_angle(angle_degrees: f64, length: f64) -> Vector2 {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Vector2::new(cos * length, sin * length)
    }

    /// Creates a unit vector from an angle in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// assert_eq!(Vector2::X, Vector2::from_degrees(0.));
    /// ```
    pub fn from_degrees(angle_degrees: f64) -> Vector2 {
        Vector2::from_angle(angle_degrees, 1.)
    }

    /// Returns the component at `index`, where x is 0 and y is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::new(1., 2.);
    /// assert_eq!(2., vector.get(1).unwrap());
    /// assert!(vector.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<f64> {
        self.component(index).copied()
    }

    /// Sets the component at `index`, where x is 0 and y is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let mut vector = Vector2::default();
    /// vector.set(0, 3).unwrap();
    /// assert_eq!(3., vector.x);
    /// ```
    pub fn set<T: ToPrimitive>(&mut self, index: usize, value: T) -> Result<()> {
        let value = utils::to_component(value, "value")?;
        *self.component_mut(index)? = value;
        Ok(())
    }

    fn component(&self, index: usize) -> Result<&f64> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            _ => Err(Error::IndexOutOfRange { index, len: 2 }),
        }
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f64> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(Error::IndexOutOfRange { index, len: 2 }),
        }
    }

    /// Returns the sum of this vector and a vector or a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::new(1., 2.);
    /// assert_eq!(Vector2::new(4., 6.), vector.plus(Vector2::new(3., 4.)));
    /// assert_eq!(Vector2::new(2., 3.), vector.plus(1));
    /// ```
    pub fn plus<O: Into<Operand<Vector2>>>(&self, other: O) -> Vector2 {
        match other.into() {
            Operand::Vector(other) => Vector2::new(self.x + other.x, self.y + other.y),
            Operand::Scalar(scalar) => Vector2::new(self.x + scalar, self.y + scalar),
        }
    }

    /// Returns the difference of this vector and a vector or a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::new(1., 2.);
    /// assert_eq!(Vector2::ZERO, vector.minus(vector));
    /// assert_eq!(Vector2::new(0.5, 1.5), vector.minus(0.5));
    /// ```
    pub fn minus<O: Into<Operand<Vector2>>>(&self, other: O) -> Vector2 {
        match other.into() {
            Operand::Vector(other) => Vector2::new(self.x - other.x, self.y - other.y),
            Operand::Scalar(scalar) => Vector2::new(self.x - scalar, self.y - scalar),
        }
    }

    /// Returns this vector multiplied by a scalar.
    pub fn scaled<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector2 {
        let scalar = scalar.as_();
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Returns this vector divided by a scalar.
    ///
    /// Division by zero is not checked, so the components become infinite or NaN.
    pub fn divided<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector2 {
        let scalar = scalar.as_();
        Vector2::new(self.x / scalar, self.y / scalar)
    }

    /// Returns this vector floor-divided by a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let vector = Vector2::new(7., -7.);
    /// assert_eq!(Vector2::new(3., -4.), vector.floor_divided(2));
    /// ```
    pub fn floor_divided<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector2 {
        let scalar = scalar.as_();
        Vector2::new(
            utils::floor_div(self.x, scalar),
            utils::floor_div(self.y, scalar),
        )
    }

    /// Adds a vector or a scalar to this vector in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let mut vector = Vector2::new(1., 2.);
    /// vector.add_in_place(1).scale(2);
    /// assert_eq!(Vector2::new(4., 6.), vector);
    /// ```
    pub fn add_in_place<O: Into<Operand<Vector2>>>(&mut self, other: O) -> &mut Vector2 {
        *self = self.plus(other);
        self
    }

    /// Subtracts a vector or a scalar from this vector in place.
    pub fn sub_in_place<O: Into<Operand<Vector2>>>(&mut self, other: O) -> &mut Vector2 {
        *self = self.minus(other);
        self
    }

    /// Multiplies this vector by a scalar in place.
    pub fn scale<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector2 {
        *self = self.scaled(scalar);
        self
    }

    /// Divides this vector by a scalar in place.
    pub fn divide<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector2 {
        *self = self.divided(scalar);
        self
    }

    /// Floor-divides this vector by a scalar in place.
    pub fn floor_divide<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector2 {
        *self = self.floor_divided(scalar);
        self
    }

    /// Returns the length (Euclidean norm) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// assert_eq!(5., Vector2::new(3., 4.).length());
    /// ```
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the squared length of this vector, which is cheaper than `length`.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero-length vector stays the zero vector.
    pub fn normalize(&mut self) -> &mut Vector2 {
        *self = self.normalized();
        self
    }

    /// Returns this vector scaled to unit length, or the zero vector if its length is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// assert_eq!(Vector2::new(0.6, 0.8), Vector2::new(3., 4.).normalized());
    /// assert_eq!(Vector2::ZERO, Vector2::ZERO.normalized());
    /// ```
    pub fn normalized(&self) -> Vector2 {
        let length = self.length();
        if length == 0. {
            log!(
                Level::Debug,
                "{} has no length, normalizing to zero",
                self
            );
            Vector2::ZERO
        } else {
            Vector2::new(self.x / length, self.y / length)
        }
    }

    /// Returns the dot product with another vector.
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z component of the cross product with another vector, i.e. the signed area
    /// of the parallelogram the two vectors span.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// assert_eq!(1., Vector2::X.cross(Vector2::Y));
    /// assert_eq!(-1., Vector2::Y.cross(Vector2::X));
    /// ```
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates this vector counterclockwise by an angle in degrees, in place.
    pub fn rotate(&mut self, angle_degrees: f64) -> &mut Vector2 {
        *self = self.rotated(angle_degrees);
        self
    }

    /// Returns this vector rotated counterclockwise by an angle in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let rotated = Vector2::X.rotated(90.);
    /// assert!(rotated.x.abs() < 1e-9);
    /// assert!((rotated.y - 1.).abs() < 1e-9);
    /// ```
    pub fn rotated(&self, angle_degrees: f64) -> Vector2 {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns the distance between the points described by the two vectors.
    pub fn distance_to(&self, other: Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linearly interpolates between this vector and another one.
    ///
    /// `alpha` is not clamped, so values outside of `[0, 1]` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let start = Vector2::new(0., 0.);
    /// let end = Vector2::new(2., 4.);
    /// assert_eq!(Vector2::new(1., 2.), start.lerp(end, 0.5));
    /// assert_eq!(Vector2::new(4., 8.), start.lerp(end, 2.));
    /// ```
    pub fn lerp(&self, other: Vector2, alpha: f64) -> Vector2 {
        Vector2::new(
            self.x + (other.x - self.x) * alpha,
            self.y + (other.y - self.y) * alpha,
        )
    }

    /// Returns approximate equality, where every component differs by at most `epsilon`.
    pub fn approx_eq(&self, other: Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Returns an independent copy of this vector.
    pub fn copy(&self) -> Vector2 {
        *self
    }

    /// Returns `(x, y)`.
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Sets x and y, in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// let mut vector = Vector2::default();
    /// vector.set_xy(&[1, 2]).unwrap();
    /// assert_eq!((1., 2.), vector.xy());
    /// assert!(vector.set_xy(&[1, 2, 3]).is_err());
    /// ```
    pub fn set_xy<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [x, y] = utils::components::<_, 2>("xy", values)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Returns `(y, x)`.
    pub fn yx(&self) -> (f64, f64) {
        (self.y, self.x)
    }

    /// Sets y and x, in that order.
    pub fn set_yx<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [y, x] = utils::components::<_, 2>("yx", values)?;
        self.y = y;
        self.x = x;
        Ok(())
    }

    /// Returns the components truncated toward zero, or `None` if either one is NaN, infinite,
    /// or too large for an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector2;
    /// assert_eq!(Some((1, -2)), Vector2::new(1.9, -2.9).integer());
    /// assert_eq!(None, Vector2::new(f64::NAN, 0.).integer());
    /// ```
    pub fn integer(&self) -> Option<(i64, i64)> {
        self.intxy()
    }

    /// Returns `(x, y)` truncated toward zero, see `integer`.
    pub fn intxy(&self) -> Option<(i64, i64)> {
        Some((self.x.to_i64()?, self.y.to_i64()?))
    }

    /// Returns `(y, x)` truncated toward zero, see `integer`.
    pub fn intyx(&self) -> Option<(i64, i64)> {
        Some((self.y.to_i64()?, self.x.to_i64()?))
    }
}

impl<O: Into<Operand<Vector2>>> Add<O> for Vector2 {
    type Output = Vector2;

    fn add(self, other: O) -> Vector2 {
        self.plus(other)
    }
}

impl<O: Into<Operand<Vector2>>> AddAssign<O> for Vector2 {
    fn add_assign(&mut self, other: O) {
        let _ = self.add_in_place(other);
    }
}

impl<O: Into<Operand<Vector2>>> Sub<O> for Vector2 {
    type Output = Vector2;

    fn sub(self, other: O) -> Vector2 {
        self.minus(other)
    }
}

impl<O: Into<Operand<Vector2>>> SubAssign<O> for Vector2 {
    fn sub_assign(&mut self, other: O) {
        let _ = self.sub_in_place(other);
    }
}

impl<S: AsPrimitive<f64>> Mul<S> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: S) -> Vector2 {
        self.scaled(scalar)
    }
}

impl<S: AsPrimitive<f64>> MulAssign<S> for Vector2 {
    fn mul_assign(&mut self, scalar: S) {
        let _ = self.scale(scalar);
    }
}

impl<S: AsPrimitive<f64>> Div<S> for Vector2 {
    type Output = Vector2;

    fn div(self, scalar: S) -> Vector2 {
        self.divided(scalar)
    }
}

impl<S: AsPrimitive<f64>> DivAssign<S> for Vector2 {
    fn div_assign(&mut self, scalar: S) {
        let _ = self.divide(scalar);
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

/// Panics if the index is not 0 or 1. Use `Vector2::get` to get an error instead.
impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.component(index) {
            Ok(component) => component,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Panics if the index is not 0 or 1. Use `Vector2::set` to get an error instead.
impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.component_mut(index) {
            Ok(component) => component,
            Err(err) => panic!("{}", err),
        }
    }
}

impl From<Vector2> for Operand<Vector2> {
    fn from(vector: Vector2) -> Operand<Vector2> {
        Operand::Vector(vector)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(vector: Vector2) -> [f64; 2] {
        [vector.x, vector.y]
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(vector: Vector2) -> (f64, f64) {
        vector.xy()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:?}, {:?})", self.x, self.y)
    }
}
