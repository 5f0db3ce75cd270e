//! Easing functions for animation curves.

/// Easing function for controlling animation curves.
///
/// Transforms linear progress `t ∈ [0.0, 1.0]` into curved progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
	/// Constant speed.
	#[default]
	Linear,

	/// Quadratic ease-in: `t²`
	EaseIn,

	/// Quadratic ease-out: `1 - (1-t)²`
	EaseOut,
}

impl Easing {
	/// Apply the easing function to linear progress.
	///
	/// Input `t` is clamped to `[0.0, 1.0]`.
	#[inline]
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseIn => t * t,
			Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
		}
	}
}
