//! # rsr-math
//!
//! Homogeneous linear algebra for rendering pipelines.
//!
//! This crate provides the numeric layer a renderer builds its
//! model/view/projection transforms from:
//!
//! - [`Vector4f`] - homogeneous point/vector `(x, y, z, w)`
//! - [`Matrix4f`] - 4x4 row-major matrix
//! - Vector helpers: [`normalize`], [`try_normalize`], [`cross`], [`dot`]
//! - Transform factories: [`identity`], [`transform`], [`scale`],
//!   [`rotate_x`], [`rotate_y`], [`rotate_z`]
//!
//! # Conventions
//!
//! Matrices are stored in **row-major** order and multiply vectors as
//! **row vectors** (the vector sits on the left):
//!
//! ```text
//!                   | m00 m01 m02 m03 |
//! [x y z w]    *    | m10 m11 m12 m13 |   =  [ sum_i v[i] * m[i][j] ]
//!                   | m20 m21 m22 m23 |
//!                   | m30 m31 m32 m33 |
//! ```
//!
//! In code this is written `matrix * vector`.
//!
//! Vector `+`, `-`, unary `-` and scalar `*` only combine `x, y, z`. The `w`
//! of their result is always reset to `1.0`.
//!
//! # Usage
//!
//! ```rust
//! use rsr_math::{scale, Vector4f};
//!
//! let m = scale(2.0, 3.0, 4.0);
//! let v = Vector4f::new(1.0, 1.0, 1.0, 1.0);
//! assert_eq!(m * v, Vector4f::new(2.0, 3.0, 4.0, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the wider Rust graphics ecosystem
//! - [`tracing`] - diagnostics from the checked operations
//! - `rsr-core` - error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod transform;
mod vec4;

pub use mat4::*;
pub use transform::*;
pub use vec4::*;

pub use rsr_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec4 as GlamVec4};
}
