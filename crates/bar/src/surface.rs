//! The presentation surface seam.
//!
//! The manager never draws. It measures, attaches, animates and removes a
//! banner through [`PresentationSurface`], and keeps animation timing on its
//! own clock.

use crate::animation::Motion;
use crate::geometry::{Rect, Size};
use crate::request::BannerRequest;
use crate::style::BannerStyle;
use crate::types::Edge;

/// Renderable, animatable view a banner is drawn onto.
///
/// One surface shows at most one banner, and it is never asked to run two
/// animations at once.
pub trait PresentationSurface {
	/// Screen area banners are laid out in.
	fn viewport(&self) -> Size;

	/// Platform inset at `edge`, such as a status bar. Used when no offset is configured.
	fn edge_inset(&self, _edge: Edge) -> f32 {
		0.0
	}

	/// Space the banner needs at the given width. Same input, same output.
	fn measure(&mut self, banner: &BannerRequest, available_width: f32) -> Size;

	/// Puts the banner on screen at `frame`, usually just outside the viewport.
	fn attach(&mut self, banner: &BannerRequest, style: &BannerStyle, frame: Rect);

	/// Starts moving the attached banner. Completion is tracked by the manager.
	fn animate(&mut self, motion: Motion);

	/// Detaches the banner immediately.
	fn remove(&mut self);
}

type Factory<S> = Box<dyn FnOnce() -> S>;

/// Surface slot created on first use.
pub struct LazySurface<S> {
	surface: Option<S>,
	factory: Option<Factory<S>>,
}

impl<S> LazySurface<S> {
	/// Defers construction until the first banner is shown.
	pub fn new(factory: impl FnOnce() -> S + 'static) -> Self {
		Self {
			surface: None,
			factory: Some(Box::new(factory)),
		}
	}

	/// Wraps an already constructed surface.
	pub fn ready(surface: S) -> Self {
		Self {
			surface: Some(surface),
			factory: None,
		}
	}

	pub fn is_created(&self) -> bool {
		self.surface.is_some()
	}

	/// Returns the surface if it has been created.
	pub fn get(&self) -> Option<&S> {
		self.surface.as_ref()
	}

	/// Returns the surface if it has been created, without creating it.
	pub fn get_mut(&mut self) -> Option<&mut S> {
		self.surface.as_mut()
	}

	/// Returns the surface, running the factory first if needed.
	pub fn get_or_create(&mut self) -> &mut S {
		if let Some(factory) = self.factory.take() {
			self.surface = Some(factory());
		}
		match &mut self.surface {
			Some(surface) => surface,
			None => unreachable!("LazySurface holds either a surface or its factory"),
		}
	}
}

impl<S: std::fmt::Debug> std::fmt::Debug for LazySurface<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LazySurface")
			.field("surface", &self.surface)
			.field("pending_factory", &self.factory.is_some())
			.finish()
	}
}
