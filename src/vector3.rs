//! Three-dimensional vectors.

use crate::{Error, Operand, Result, utils};
use log::{Level, log};
use num_traits::{AsPrimitive, ToPrimitive};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

const UNIT_TOLERANCE: f64 = 1e-9;

/// An x, y, z vector.
///
/// Like `Vector2`, the `-ed` methods return new vectors and the others work in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0., 0., 0.);

    /// The unit vector along x.
    pub const X: Vector3 = Vector3::new(1., 0., 0.);

    /// The unit vector along y.
    pub const Y: Vector3 = Vector3::new(0., 1., 0.);

    /// The unit vector along z.
    pub const Z: Vector3 = Vector3::new(0., 0., 1.);

    /// Creates a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let vector = Vector3::new(1., 2., 3.);
    /// assert_eq!(3., vector.z);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Creates a new vector from any numbers, converting them to floats.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let vector = Vector3::try_new(1, 2_u16, 3.5_f32).unwrap();
    /// assert_eq!(Vector3::new(1., 2., 3.5), vector);
    /// ```
    pub fn try_new<X: ToPrimitive, Y: ToPrimitive, Z: ToPrimitive>(
        x: X,
        y: Y,
        z: Z,
    ) -> Result<Vector3> {
        Ok(Vector3 {
            x: utils::to_component(x, "x")?,
            y: utils::to_component(y, "y")?,
            z: utils::to_component(z, "z")?,
        })
    }

    /// Returns the component at `index`, where x is 0, y is 1, and z is 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::{Error, Vector3};
    /// let vector = Vector3::new(1., 2., 3.);
    /// assert_eq!(3., vector.get(2).unwrap());
    /// assert_eq!(
    ///     Error::IndexOutOfRange { index: 3, len: 3 },
    ///     vector.get(3).unwrap_err()
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<f64> {
        self.component(index).copied()
    }

    /// Sets the component at `index`, where x is 0, y is 1, and z is 2.
    pub fn set<T: ToPrimitive>(&mut self, index: usize, value: T) -> Result<()> {
        let value = utils::to_component(value, "value")?;
        *self.component_mut(index)? = value;
        Ok(())
    }

    fn component(&self, index: usize) -> Result<&f64> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            2 => Ok(&self.z),
            _ => Err(Error::IndexOutOfRange { index, len: 3 }),
        }
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f64> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(Error::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Returns the sum of this vector and a vector or a scalar.
    pub fn plus<O: Into<Operand<Vector3>>>(&self, other: O) -> Vector3 {
        match other.into() {
            Operand::Vector(other) => {
                Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
            }
            Operand::Scalar(scalar) => {
                Vector3::new(self.x + scalar, self.y + scalar, self.z + scalar)
            }
        }
    }

    /// Returns the difference of this vector and a vector or a scalar.
    pub fn minus<O: Into<Operand<Vector3>>>(&self, other: O) -> Vector3 {
        match other.into() {
            Operand::Vector(other) => {
                Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
            }
            Operand::Scalar(scalar) => {
                Vector3::new(self.x - scalar, self.y - scalar, self.z - scalar)
            }
        }
    }

    /// Returns this vector multiplied by a scalar.
    pub fn scaled<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector3 {
        let scalar = scalar.as_();
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns this vector divided by a scalar, without checking for zero.
    pub fn divided<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector3 {
        let scalar = scalar.as_();
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Returns this vector floor-divided by a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let vector = Vector3::new(5., -5., 0.5);
    /// assert_eq!(Vector3::new(2., -3., 0.), vector.floor_divided(2));
    /// ```
    pub fn floor_divided<S: AsPrimitive<f64>>(&self, scalar: S) -> Vector3 {
        let scalar = scalar.as_();
        Vector3::new(
            utils::floor_div(self.x, scalar),
            utils::floor_div(self.y, scalar),
            utils::floor_div(self.z, scalar),
        )
    }

    /// Adds a vector or a scalar to this vector in place.
    pub fn add_in_place<O: Into<Operand<Vector3>>>(&mut self, other: O) -> &mut Vector3 {
        *self = self.plus(other);
        self
    }

    /// Subtracts a vector or a scalar from this vector in place.
    pub fn sub_in_place<O: Into<Operand<Vector3>>>(&mut self, other: O) -> &mut Vector3 {
        *self = self.minus(other);
        self
    }

    /// Multiplies this vector by a scalar in place.
    pub fn scale<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector3 {
        *self = self.scaled(scalar);
        self
    }

    /// Divides this vector by a scalar in place.
    pub fn divide<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector3 {
        *self = self.divided(scalar);
        self
    }

    /// Floor-divides this vector by a scalar in place.
    pub fn floor_divide<S: AsPrimitive<f64>>(&mut self, scalar: S) -> &mut Vector3 {
        *self = self.floor_divided(scalar);
        self
    }

    /// Returns the length (Euclidean norm) of this vector.
    ///
    /// Computed with `hypot`, so large components do not overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// assert_eq!(5., Vector3::new(0., 3., 4.).length());
    /// ```
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Returns the squared length of this vector.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scales this vector to unit length in place, leaving a zero vector at zero.
    pub fn normalize(&mut self) -> &mut Vector3 {
        *self = self.normalized();
        self
    }

    /// Returns this vector scaled to unit length, or the zero vector if its length is zero.
    pub fn normalized(&self) -> Vector3 {
        let length = self.length();
        if length == 0. {
            log!(
                Level::Debug,
                "{} has no length, normalizing to zero",
                self
            );
            Vector3::ZERO
        } else {
            Vector3::new(self.x / length, self.y / length, self.z / length)
        }
    }

    /// Returns the dot product with another vector.
    pub fn dot(&self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// assert_eq!(Vector3::Z, Vector3::X.cross(Vector3::Y));
    /// ```
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Rotates this vector around `axis` by an angle in degrees, in place.
    ///
    /// See `rotated`.
    pub fn rotate(&mut self, axis: Vector3, angle_degrees: f64) -> &mut Vector3 {
        *self = self.rotated(axis, angle_degrees);
        self
    }

    /// Returns this vector rotated around `axis` by an angle in degrees.
    ///
    /// This is Rodrigues' rotation formula, `v cos θ + (k × v) sin θ + k (k · v)(1 - cos θ)`.
    /// The axis `k` is used as given: pass a unit vector to get a pure rotation, anything else
    /// also scales and skews the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let rotated = Vector3::X.rotated(Vector3::Z, 90.);
    /// assert!(rotated.approx_eq(Vector3::Y, 1e-12));
    /// ```
    pub fn rotated(&self, axis: Vector3, angle_degrees: f64) -> Vector3 {
        if (axis.length_squared() - 1.).abs() > UNIT_TOLERANCE {
            log!(
                Level::Trace,
                "rotating {} around {}, which is not a unit vector",
                self,
                axis
            );
        }
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let cross = axis.cross(*self);
        let dot = axis.dot(*self);
        *self * cos + cross * sin + axis * dot * (1. - cos)
    }

    /// Returns the distance between the points described by the two vectors.
    pub fn distance_to(&self, other: Vector3) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }

    /// Linearly interpolates between this vector and another one, without clamping `alpha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let start = Vector3::new(1., 1., 1.);
    /// let end = Vector3::new(3., 5., 1.);
    /// assert_eq!(Vector3::new(2., 3., 1.), start.lerp(end, 0.5));
    /// assert_eq!(Vector3::new(0., -1., 1.), start.lerp(end, -0.5));
    /// ```
    pub fn lerp(&self, other: Vector3, alpha: f64) -> Vector3 {
        Vector3::new(
            self.x + (other.x - self.x) * alpha,
            self.y + (other.y - self.y) * alpha,
            self.z + (other.z - self.z) * alpha,
        )
    }

    /// Returns approximate equality, where every component differs by at most `epsilon`.
    pub fn approx_eq(&self, other: Vector3, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// Returns an independent copy of this vector.
    pub fn copy(&self) -> Vector3 {
        *self
    }

    /// Returns `(x, y)`.
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Sets x and y, in that order.
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

    /// Returns `(x, z)`.
    pub fn xz(&self) -> (f64, f64) {
        (self.x, self.z)
    }

    /// Sets x and z, in that order.
    pub fn set_xz<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [x, z] = utils::components::<_, 2>("xz", values)?;
        self.x = x;
        self.z = z;
        Ok(())
    }

    /// Returns `(z, x)`.
    pub fn zx(&self) -> (f64, f64) {
        (self.z, self.x)
    }

    /// Sets z and x, in that order.
    pub fn set_zx<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [z, x] = utils::components::<_, 2>("zx", values)?;
        self.z = z;
        self.x = x;
        Ok(())
    }

    /// Returns `(y, z)`.
    pub fn yz(&self) -> (f64, f64) {
        (self.y, self.z)
    }

    /// Sets y and z, in that order.
    pub fn set_yz<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [y, z] = utils::components::<_, 2>("yz", values)?;
        self.y = y;
        self.z = z;
        Ok(())
    }

    /// Returns `(z, y)`.
    pub fn zy(&self) -> (f64, f64) {
        (self.z, self.y)
    }

    /// Sets z and y, in that order.
    pub fn set_zy<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [z, y] = utils::components::<_, 2>("zy", values)?;
        self.z = z;
        self.y = y;
        Ok(())
    }

    /// Returns `(x, y, z)`.
    pub fn xyz(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Sets x, y, and z, in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let mut vector = Vector3::default();
    /// vector.set_xyz(&[1, 2, 3]).unwrap();
    /// assert_eq!(Vector3::new(1., 2., 3.), vector);
    /// assert!(vector.set_xyz(&[1, 2]).is_err());
    /// ```
    pub fn set_xyz<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [x, y, z] = utils::components::<_, 3>("xyz", values)?;
        self.x = x;
        self.y = y;
        self.z = z;
        Ok(())
    }

    /// Returns `(x, z, y)`.
    pub fn xzy(&self) -> (f64, f64, f64) {
        (self.x, self.z, self.y)
    }

    /// Sets x, z, and y, in that order.
    pub fn set_xzy<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [x, z, y] = utils::components::<_, 3>("xzy", values)?;
        self.x = x;
        self.z = z;
        self.y = y;
        Ok(())
    }

    /// Returns `(y, x, z)`.
    pub fn yxz(&self) -> (f64, f64, f64) {
        (self.y, self.x, self.z)
    }

    /// Sets y, x, and z, in that order.
    pub fn set_yxz<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [y, x, z] = utils::components::<_, 3>("yxz", values)?;
        self.y = y;
        self.x = x;
        self.z = z;
        Ok(())
    }

    /// Returns `(y, z, x)`.
    pub fn yzx(&self) -> (f64, f64, f64) {
        (self.y, self.z, self.x)
    }

    /// Sets y, z, and x, in that order.
    pub fn set_yzx<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [y, z, x] = utils::components::<_, 3>("yzx", values)?;
        self.y = y;
        self.z = z;
        self.x = x;
        Ok(())
    }

    /// Returns `(z, x, y)`.
    pub fn zxy(&self) -> (f64, f64, f64) {
        (self.z, self.x, self.y)
    }

    /// Sets z, x, and y, in that order.
    pub fn set_zxy<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [z, x, y] = utils::components::<_, 3>("zxy", values)?;
        self.z = z;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Returns `(z, y, x)`.
    pub fn zyx(&self) -> (f64, f64, f64) {
        (self.z, self.y, self.x)
    }

    /// Sets z, y, and x, in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectors::Vector3;
    /// let mut vector = Vector3::default();
    /// vector.set_zyx(&[1., 2., 3.]).unwrap();
    /// assert_eq!(Vector3::new(3., 2., 1.), vector);
    /// assert_eq!((1., 2., 3.), vector.zyx());
    /// ```
    pub fn set_zyx<T: ToPrimitive + Copy>(&mut self, values: &[T]) -> Result<()> {
        let [z, y, x] = utils::components::<_, 3>("zyx", values)?;
        self.z = z;
        self.y = y;
        self.x = x;
        Ok(())
    }
}

impl<O: Into<Operand<Vector3>>> Add<O> for Vector3 {
    type Output = Vector3;

    fn add(self, other: O) -> Vector3 {
        self.plus(other)
    }
}

impl<O: Into<Operand<Vector3>>> AddAssign<O> for Vector3 {
    fn add_assign(&mut self, other: O) {
        let _ = self.add_in_place(other);
    }
}

impl<O: Into<Operand<Vector3>>> Sub<O> for Vector3 {
    type Output = Vector3;

    fn sub(self, other: O) -> Vector3 {
        self.minus(other)
    }
}

impl<O: Into<Operand<Vector3>>> SubAssign<O> for Vector3 {
    fn sub_assign(&mut self, other: O) {
        let _ = self.sub_in_place(other);
    }
}

impl<S: AsPrimitive<f64>> Mul<S> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: S) -> Vector3 {
        self.scaled(scalar)
    }
}

impl<S: AsPrimitive<f64>> MulAssign<S> for Vector3 {
    fn mul_assign(&mut self, scalar: S) {
        let _ = self.scale(scalar);
    }
}

impl<S: AsPrimitive<f64>> Div<S> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: S) -> Vector3 {
        self.divided(scalar)
    }
}

impl<S: AsPrimitive<f64>> DivAssign<S> for Vector3 {
    fn div_assign(&mut self, scalar: S) {
        let _ = self.divide(scalar);
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

/// Panics if the index is greater than 2. Use `Vector3::get` to get an error instead.
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.component(index) {
            Ok(component) => component,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Panics if the index is greater than 2. Use `Vector3::set` to get an error instead.
impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.component_mut(index) {
            Ok(component) => component,
            Err(err) => panic!("{}", err),
        }
    }
}

impl From<Vector3> for Operand<Vector3> {
    fn from(vector: Vector3) -> Operand<Vector3> {
        Operand::Vector(vector)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(vector: Vector3) -> [f64; 3] {
        [vector.x, vector.y, vector.z]
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(vector: Vector3) -> (f64, f64, f64) {
        vector.xyz()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}
