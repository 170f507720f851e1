//! Homogeneous 4D vector type.
//!
//! [`Vector4f`] holds a point or direction in homogeneous coordinates.
//! Points carry `w = 1` and directions `w = 0`; the type does not enforce
//! either, it only defaults to `w = 1`.
//!
//! # The `w` policy
//!
//! Additive and scalar arithmetic works on `x, y, z` only. Every arithmetic
//! result is built with `w = 1.0`, whatever the operands' `w` were:
//!
//! ```rust
//! use rsr_math::Vector4f;
//!
//! let a = Vector4f::new(1.0, 2.0, 3.0, 0.0);
//! let b = Vector4f::new(4.0, 5.0, 6.0, 7.0);
//! assert_eq!(a + b, Vector4f::new(5.0, 7.0, 9.0, 1.0));
//! assert_eq!((a * 2.0).w, 1.0);
//! ```

use approx::AbsDiffEq;
use rsr_core::{Error, Result};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::debug;

/// A homogeneous vector `(x, y, z, w)`.
///
/// # Construction
///
/// - [`Vector4f::default`] - `(0, 0, 0, 1)`
/// - [`Vector4f::from_xyz`] - `(x, y, z, 1)`
/// - [`Vector4f::new`] - all four components
///
/// # Example
///
/// ```rust
/// use rsr_math::Vector4f;
///
/// let p = Vector4f::from_xyz(3.0, 4.0, 0.0);
/// assert_eq!(p.w, 1.0);
/// assert_eq!(p.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4f {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// Homogeneous component
    pub w: f32,
}

impl Vector4f {
    /// The origin point `(0, 0, 0, 1)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from all four components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point `(x, y, z, 1)`.
    #[inline]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates from an array `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Euclidean length of `(x, y, z)`. `w` does not participate.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length of `(x, y, z)` (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns true if all four components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Default for Vector4f {
    #[inline]
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Scales `v` to unit length.
///
/// `w` of the result is `1.0`, as for any scalar product. A zero-length
/// input divides by zero and yields non-finite components; use
/// [`try_normalize`] to have that reported instead.
///
/// # Example
///
/// ```rust
/// use rsr_math::{normalize, Vector4f};
///
/// let n = normalize(Vector4f::from_xyz(0.0, 3.0, 4.0));
/// assert!((n.length() - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize(v: Vector4f) -> Vector4f {
    v * (1.0 / v.length())
}

/// Checked [`normalize`]: fails with [`Error::ZeroLength`] when `v` has no
/// length to divide by.
pub fn try_normalize(v: Vector4f) -> Result<Vector4f> {
    let len = v.length();
    if len == 0.0 {
        debug!(x = v.x, y = v.y, z = v.z, "refusing to normalize zero-length vector");
        return Err(Error::ZeroLength);
    }
    Ok(v * (1.0 / len))
}

/// 2D cross product in the xy-plane: `a.x * b.y - a.y * b.x`.
///
/// This is the z component of the full cross product of the projections of
/// `a` and `b` onto the xy-plane; it is antisymmetric in its arguments.
#[inline]
pub fn cross(a: Vector4f, b: Vector4f) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Computes `a.x * a.y + b.x * b.y`.
///
/// Note this is *not* the inner product `a · b`: each term multiplies
/// components of the same vector. Existing callers depend on this value, so
/// it is kept as is. Compute `a.x * b.x + a.y * b.y + a.z * b.z` directly
/// when the inner product is wanted.
#[inline]
pub fn dot(a: Vector4f, b: Vector4f) -> f32 {
    a.x * a.y + b.x * b.y
}

// Indexing
impl Index<usize> for Vector4f {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4f index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector4f {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4f index out of bounds: {}", i),
        }
    }
}

// Vector4f + Vector4f
impl Add for Vector4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_xyz(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vector4f - Vector4f
impl Sub for Vector4f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_xyz(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vector4f * f32
impl Mul<f32> for Vector4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_xyz(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f32 * Vector4f
impl Mul<Vector4f> for f32 {
    type Output = Vector4f;

    #[inline]
    fn mul(self, rhs: Vector4f) -> Vector4f {
        rhs * self
    }
}

impl Neg for Vector4f {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_xyz(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector4f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector4f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector4f {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 4]> for Vector4f {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector4f> for [f32; 4] {
    #[inline]
    fn from(v: Vector4f) -> [f32; 4] {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vector4f {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self> {
        let a: [f32; 4] = s
            .try_into()
            .map_err(|_| Error::component_count(4, s.len()))?;
        Ok(Self::from_array(a))
    }
}

// Tolerance comparison over all four components, `w` included
impl AbsDiffEq for Vector4f {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl From<glam::Vec4> for Vector4f {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector4f> for glam::Vec4 {
    #[inline]
    fn from(v: Vector4f) -> glam::Vec4 {
        v.to_glam()
    }
}
