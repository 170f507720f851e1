//! Factories for the common homogeneous transforms.
//!
//! Every function returns a fresh [`Matrix4f`]; nothing is cached or shared.
//!
//! The layouts are the textbook ones, written row by row: translation
//! offsets sit in the last column and rotations use the usual sine/cosine
//! pattern for each axis. Because `matrix * vector` multiplies a **row**
//! vector, feed a transform's [`Matrix4f::transpose`] when the textbook
//! column-vector result is wanted:
//!
//! ```rust
//! use rsr_math::{transform, Vector4f};
//!
//! let t = transform(1.0, 2.0, 3.0);
//! let p = Vector4f::from_xyz(10.0, 10.0, 10.0);
//! assert_eq!(t.transpose() * p, Vector4f::new(11.0, 12.0, 13.0, 1.0));
//! ```
//!
//! Scale matrices are diagonal and behave the same under either convention.

use crate::{Matrix4f, Vector4f};

/// Returns the 4x4 identity matrix.
#[inline]
pub fn identity() -> Matrix4f {
    Matrix4f::IDENTITY
}

/// Translation matrix with offsets in the last column.
///
/// ```text
/// | 1 0 0 dx |
/// | 0 1 0 dy |
/// | 0 0 1 dz |
/// | 0 0 0 1  |
/// ```
#[rustfmt::skip]
pub fn transform(dx: f32, dy: f32, dz: f32) -> Matrix4f {
    Matrix4f::new(
        1.0, 0.0, 0.0, dx,
        0.0, 1.0, 0.0, dy,
        0.0, 0.0, 1.0, dz,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// [`transform`] taking its offsets from `d.x`, `d.y`, `d.z`. `d.w` is
/// ignored.
#[inline]
pub fn transform_vector(d: Vector4f) -> Matrix4f {
    transform(d.x, d.y, d.z)
}

/// Diagonal scale matrix with `1.0` in the homogeneous corner.
///
/// # Example
///
/// ```rust
/// use rsr_math::{scale, Vector4f};
///
/// let m = scale(2.0, 3.0, 4.0);
/// assert_eq!(m * Vector4f::from_xyz(1.0, 1.0, 1.0), Vector4f::new(2.0, 3.0, 4.0, 1.0));
/// ```
#[rustfmt::skip]
pub fn scale(sx: f32, sy: f32, sz: f32) -> Matrix4f {
    Matrix4f::new(
        sx,  0.0, 0.0, 0.0,
        0.0, sy,  0.0, 0.0,
        0.0, 0.0, sz,  0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// [`scale`] taking its factors from `s.x`, `s.y`, `s.z`. `s.w` is ignored.
#[inline]
pub fn scale_vector(s: Vector4f) -> Matrix4f {
    scale(s.x, s.y, s.z)
}

/// Rotation about the x axis by `angle` radians.
#[rustfmt::skip]
pub fn rotate_x(angle: f32) -> Matrix4f {
    let (s, c) = angle.sin_cos();
    Matrix4f::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c,   -s,  0.0,
        0.0, s,   c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the y axis by `angle` radians.
///
/// `-sin(angle)` sits at `[0][2]` and `sin(angle)` at `[2][0]`.
#[rustfmt::skip]
pub fn rotate_y(angle: f32) -> Matrix4f {
    let (s, c) = angle.sin_cos();
    Matrix4f::new(
        c,   0.0, -s,  0.0,
        0.0, 1.0, 0.0, 0.0,
        s,   0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the z axis by `angle` radians.
#[rustfmt::skip]
pub fn rotate_z(angle: f32) -> Matrix4f {
    let (s, c) = angle.sin_cos();
    Matrix4f::new(
        c,   -s,  0.0, 0.0,
        s,   c,   0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}
