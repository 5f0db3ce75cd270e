//! The [`Animatable`] trait for types that support interpolation.

use crate::geometry::{Point, Rect};

/// A type that can be linearly interpolated.
///
/// * `t = 0.0` returns `self`
/// * `t = 1.0` returns `target`
///
/// Implementations clamp `t` to `[0.0, 1.0]`.
pub trait Animatable: Clone {
	fn lerp(&self, target: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		self + (target - self) * t
	}
}

impl Animatable for Point {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		Point::new(self.x.lerp(&target.x, t), self.y.lerp(&target.y, t))
	}
}

impl Animatable for Rect {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		Self {
			x: self.x.lerp(&target.x, t),
			y: self.y.lerp(&target.y, t),
			width: self.width.lerp(&target.width, t),
			height: self.height.lerp(&target.height, t),
		}
	}
}
