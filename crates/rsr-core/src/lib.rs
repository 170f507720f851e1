//! # rsr-core
//!
//! Core types shared by the rsr math layer.
//!
//! This crate provides the foundation the other rsr crates build on:
//!
//! - [`Error`] / [`Result`] - recoverable failures of the checked APIs
//!
//! ## Crate Structure
//!
//! ```text
//! rsr-core (this crate)
//!    ^
//!    |
//!    +-- rsr-math (Vector4f, Matrix4f, transform factories)
//!    +-- rsr-color (Color4f, blending, correction)
//! ```
//!
//! ## Feature Flags
//!
//! None. Serialization is opt-in per value crate via their `serde` feature.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;
