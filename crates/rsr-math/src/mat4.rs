//! 4x4 matrix type for homogeneous transforms.
//!
//! [`Matrix4f`] backs the model/view/projection chain of a renderer. Build
//! one from the factories in this crate ([`crate::identity`],
//! [`crate::transform`], [`crate::scale`], [`crate::rotate_x`], ...) and
//! combine them with `*`.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **row vectors**:
//!
//! ```text
//!               | m00 m01 m02 m03 |
//! [x y z w]  *  | m10 m11 m12 m13 |  =  [ x*m00 + y*m10 + z*m20 + w*m30, ... ]
//!               | m20 m21 m22 m23 |
//!               | m30 m31 m32 m33 |
//! ```
//!
//! written as `matrix * vector` in code.
//!
//! # Indexing
//!
//! `m[row][col]` reads or writes one element. A row outside `[0, 3]` is a
//! programming error and panics with the offending index in the message;
//! [`Matrix4f::try_get`] and [`Matrix4f::try_set`] report it instead.
//!
//! ```rust
//! use rsr_math::Matrix4f;
//!
//! let mut m = Matrix4f::default();
//! m[1][2] = 5.0;
//! assert_eq!(m[1][2], 5.0);
//! assert_eq!(m[(1, 2)], 5.0);
//! ```

use crate::Vector4f;
use approx::AbsDiffEq;
use rsr_core::{Error, Result};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::debug;

/// Largest valid row or column index.
const MAX_INDEX: usize = 3;

/// A 4x4 single-precision matrix.
///
/// Defaults to the **zero** matrix; call [`crate::identity`] (or use
/// [`Matrix4f::IDENTITY`]) when an identity is wanted.
///
/// # Example
///
/// ```rust
/// use rsr_math::{identity, Matrix4f};
///
/// let m = Matrix4f::default();
/// assert_eq!(m, Matrix4f::ZERO);
/// assert_eq!(identity() * m, m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4f {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Matrix4f {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from its sixteen elements, row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsr_math::Matrix4f;
    ///
    /// let m = Matrix4f::from_rows([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Matrix4f::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Returns a row as a vector, `w` included.
    ///
    /// # Panics
    ///
    /// If `i > 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4f {
        Vector4f::from_array(self[i])
    }

    /// Returns a column as a vector, `w` included.
    ///
    /// # Panics
    ///
    /// If `j > 3`.
    #[inline]
    pub fn col(&self, j: usize) -> Vector4f {
        check_index("y", j);
        Vector4f::new(self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Reads element `(row, col)`, reporting out-of-range indices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsr_math::Matrix4f;
    ///
    /// let m = Matrix4f::IDENTITY;
    /// assert_eq!(m.try_get(2, 2), Ok(1.0));
    /// assert!(m.try_get(4, 0).is_err());
    /// ```
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32> {
        validate(row, col)?;
        Ok(self.m[row][col])
    }

    /// Writes element `(row, col)`, reporting out-of-range indices.
    pub fn try_set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        validate(row, col)?;
        self.m[row][col] = value;
        Ok(())
    }

    /// Multiplies `v` as a row vector: `result[j] = sum_i v[i] * m[i][j]`.
    ///
    /// Same as `self * v`. All four result components are computed, so
    /// unlike vector arithmetic this can produce any `w`.
    #[inline]
    pub fn mul_vec4(&self, v: Vector4f) -> Vector4f {
        let m = &self.m;
        Vector4f::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }

    /// Multiplies two matrices: `c[i][j] = sum_k self[i][k] * other[k][j]`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }

    /// Applies `f` to every element.
    #[inline]
    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            m: self.m.map(|row| row.map(&f)),
        }
    }

    /// Combines matching elements of two matrices with `f`.
    #[inline]
    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = f(self.m[i][j], other.m[i][j]);
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4.
    ///
    /// Element positions are preserved: row `i`, column `j` of the result
    /// is `self[i][j]`. glam multiplies column vectors, so `to_glam() * v`
    /// equals `self.transpose() * v` here, not `self * v`.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam is column-major, so its columns are our transposed rows
        glam::Mat4::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat4, preserving element positions.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

impl Default for Matrix4f {
    fn default() -> Self {
        Self::ZERO
    }
}

#[inline]
#[track_caller]
fn check_index(axis: &str, index: usize) {
    assert!(
        index <= MAX_INDEX,
        "Invalid argument {axis}: expected in [0, 3], got {index}."
    );
}

fn validate(row: usize, col: usize) -> Result<()> {
    for (axis, index) in [("x", row), ("y", col)] {
        if index > MAX_INDEX {
            debug!(axis, index, "matrix index out of range");
            return Err(Error::index_out_of_range(axis, index, MAX_INDEX));
        }
    }
    Ok(())
}

impl Index<usize> for Matrix4f {
    type Output = [f32; 4];

    #[inline]
    #[track_caller]
    fn index(&self, x: usize) -> &[f32; 4] {
        check_index("x", x);
        &self.m[x]
    }
}

impl IndexMut<usize> for Matrix4f {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, x: usize) -> &mut [f32; 4] {
        check_index("x", x);
        &mut self.m[x]
    }
}

impl Index<(usize, usize)> for Matrix4f {
    type Output = f32;

    #[inline]
    #[track_caller]
    fn index(&self, (x, y): (usize, usize)) -> &f32 {
        check_index("x", x);
        check_index("y", y);
        &self.m[x][y]
    }
}

impl IndexMut<(usize, usize)> for Matrix4f {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut f32 {
        check_index("x", x);
        check_index("y", y);
        &mut self.m[x][y]
    }
}

// Matrix4f + Matrix4f
impl Add for Matrix4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

// Matrix4f - Matrix4f
impl Sub for Matrix4f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

// Matrix4f * Matrix4f
impl Mul for Matrix4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Matrix4f * f32
impl Mul<f32> for Matrix4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

// f32 * Matrix4f
impl Mul<Matrix4f> for f32 {
    type Output = Matrix4f;

    #[inline]
    fn mul(self, rhs: Matrix4f) -> Matrix4f {
        rhs * self
    }
}

// Matrix4f * Vector4f (row vector)
impl Mul<Vector4f> for Matrix4f {
    type Output = Vector4f;

    #[inline]
    fn mul(self, rhs: Vector4f) -> Vector4f {
        self.mul_vec4(rhs)
    }
}

impl Neg for Matrix4f {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl AddAssign for Matrix4f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Matrix4f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Matrix4f {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Matrix4f {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl AbsDiffEq for Matrix4f {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl From<[[f32; 4]; 4]> for Matrix4f {
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<glam::Mat4> for Matrix4f {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix4f> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix4f) -> glam::Mat4 {
        m.to_glam()
    }
}
