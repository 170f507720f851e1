//! RGBA color with alpha blending and channel correction.
//!
//! # Operators
//!
//! | expression | result |
//! |------------|--------|
//! | `a + b`    | `b` blended over `a` by `b.alpha` |
//! | `c * k`    | every channel (alpha included) scaled by `k` |
//! | `-c`       | photometric negative `1 - c` of red, green, blue |
//!
//! None of them clamp. Call [`Color4f::correct`] when in-range channels are
//! required.

use approx::AbsDiffEq;
use rsr_core::{Error, Result};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};
use tracing::trace;

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// The default is transparent black `(0, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color4f {
    /// Red channel
    pub red: f32,
    /// Green channel
    pub green: f32,
    /// Blue channel
    pub blue: f32,
    /// Alpha (opacity) channel
    pub alpha: f32,
}

impl Color4f {
    /// Transparent black `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates from an array `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Clamps every channel, alpha included, into `[0, 1]` in place.
    ///
    /// Channels already in range are left untouched. NaN channels are left
    /// as they are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsr_color::Color4f;
    ///
    /// let mut c = Color4f::new(-0.5, 0.5, 1.5, 2.0);
    /// c.correct();
    /// assert_eq!(c, Color4f::new(0.0, 0.5, 1.0, 1.0));
    /// ```
    pub fn correct(&mut self) {
        let before = *self;
        let mut clamped = false;
        for channel in [
            &mut self.red,
            &mut self.green,
            &mut self.blue,
            &mut self.alpha,
        ] {
            let value = (*channel).clamp(0.0, 1.0);
            // bitwise, so a NaN channel never counts as changed
            if value.to_bits() != channel.to_bits() {
                *channel = value;
                clamped = true;
            }
        }
        if clamped {
            trace!(?before, after = ?self, "color corrected");
        }
    }

    /// Returns a corrected copy, leaving `self` as is.
    #[inline]
    pub fn corrected(mut self) -> Self {
        self.correct();
        self
    }

    /// Returns true if every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_in_range(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Converts to glam Vec4 `(r, g, b, a)`.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::from_array(self.to_array())
    }

    /// Creates from glam Vec4 `(r, g, b, a)`.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

// Color4f + Color4f: blend rhs over self by rhs.alpha
impl Add for Color4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let a = rhs.alpha;
        let keep = 1.0 - a;
        Self::new(
            self.red * keep + rhs.red * a,
            self.green * keep + rhs.green * a,
            self.blue * keep + rhs.blue * a,
            a + self.alpha * keep,
        )
    }
}

// Color4f * f32
impl Mul<f32> for Color4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.red * rhs,
            self.green * rhs,
            self.blue * rhs,
            self.alpha * rhs,
        )
    }
}

// f32 * Color4f
impl Mul<Color4f> for f32 {
    type Output = Color4f;

    #[inline]
    fn mul(self, rhs: Color4f) -> Color4f {
        rhs * self
    }
}

impl Neg for Color4f {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue, self.alpha)
    }
}

impl AddAssign for Color4f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MulAssign<f32> for Color4f {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 4]> for Color4f {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color4f> for [f32; 4] {
    #[inline]
    fn from(c: Color4f) -> [f32; 4] {
        c.to_array()
    }
}

impl TryFrom<&[f32]> for Color4f {
    type Error = Error;

    /// Accepts 3 channels (opaque) or 4.
    fn try_from(s: &[f32]) -> Result<Self> {
        match *s {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(Error::component_count(4, s.len())),
        }
    }
}

impl AbsDiffEq for Color4f {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.red.abs_diff_eq(&other.red, epsilon)
            && self.green.abs_diff_eq(&other.green, epsilon)
            && self.blue.abs_diff_eq(&other.blue, epsilon)
            && self.alpha.abs_diff_eq(&other.alpha, epsilon)
    }
}

impl From<glam::Vec4> for Color4f {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Color4f> for glam::Vec4 {
    #[inline]
    fn from(c: Color4f) -> glam::Vec4 {
        c.to_glam()
    }
}
