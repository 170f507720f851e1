//! # rsr-color
//!
//! RGBA color values for the rsr rendering layer.
//!
//! - [`Color4f`] - straight (non-premultiplied) RGBA with `f32` channels
//!
//! Channels are nominally in `[0, 1]` but nothing except
//! [`Color4f::correct`] enforces that, so intermediate results may overshoot
//! freely:
//!
//! ```rust
//! use rsr_color::Color4f;
//!
//! let mut c = Color4f::rgb(0.5, 0.25, 0.125) * 2.5;
//! assert!(!c.is_in_range());
//! c.correct();
//! assert_eq!(c, Color4f::new(1.0, 0.625, 0.3125, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `Vec4` interop
//! - [`tracing`] - reports channels clamped by `correct`
//! - `rsr-core` - error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color4;

pub use color4::*;

pub use rsr_core::{Error, Result};
