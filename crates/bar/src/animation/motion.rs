//! A single slide of the presentation surface between two frames.

use std::time::Duration;

use super::easing::Easing;
use super::lerp::Animatable;
use crate::geometry::Rect;

/// Animation from one frame to another, sampled by elapsed time.
///
/// Unlike a wall-clock tween, a motion carries no start instant. The manager
/// records when it started on its own timer clock and passes the elapsed time
/// to [`Motion::sample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
	pub from: Rect,
	pub to: Rect,
	pub duration: Duration,
	pub easing: Easing,
}

impl Motion {
	/// Creates a motion with linear easing.
	pub fn new(from: Rect, to: Rect, duration: Duration) -> Self {
		Self {
			from,
			to,
			duration,
			easing: Easing::Linear,
		}
	}

	#[must_use]
	pub fn with_easing(mut self, easing: Easing) -> Self {
		self.easing = easing;
		self
	}

	/// Returns linear progress (0.0 to 1.0) after `elapsed`.
	pub fn progress(&self, elapsed: Duration) -> f32 {
		if self.duration.is_zero() {
			return 1.0;
		}
		(elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
	}

	/// Returns the eased frame after `elapsed`.
	pub fn sample(&self, elapsed: Duration) -> Rect {
		self.from.lerp(&self.to, self.easing.apply(self.progress(elapsed)))
	}
}
