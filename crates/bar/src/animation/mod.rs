//! Animation primitives for banner motion.
//!
//! [`Easing`] shapes progress, [`Animatable`] interpolates geometry and
//! [`Motion`] describes one slide of the presentation surface, sampled
//! against the manager's virtual clock rather than wall time.
//!
//! ```
//! use std::time::Duration;
//! use msgbar::animation::{Easing, Motion};
//! use msgbar::geometry::Rect;
//!
//! let hidden = Rect::new(0.0, -60.0, 320.0, 60.0);
//! let rest = Rect::new(0.0, 20.0, 320.0, 60.0);
//! let motion = Motion::new(hidden, rest, Duration::from_millis(250)).with_easing(Easing::EaseOut);
//!
//! assert_eq!(motion.sample(Duration::ZERO), hidden);
//! assert_eq!(motion.sample(Duration::from_millis(250)), rest);
//! ```

mod easing;
mod lerp;
mod motion;

pub use easing::Easing;
pub use lerp::Animatable;
pub use motion::Motion;
