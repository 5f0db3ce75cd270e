//! Banner measurement helpers and edge placement.

use crate::geometry::{Point, Rect, Size};
use crate::types::Edge;

/// Fixed metrics of the banner layout: an icon column followed by title and description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerMetrics {
	/// Inset around the content and between icon and text.
	pub padding: f32,
	/// Square icon edge length.
	pub icon_size: f32,
	/// Upward nudge applied to the first text line.
	pub text_offset: f32,
}

impl Default for BannerMetrics {
	fn default() -> Self {
		Self {
			padding: 10.0,
			icon_size: 36.0,
			text_offset: 2.0,
		}
	}
}

impl BannerMetrics {
	/// Width left for text once padding and the icon column are taken out.
	pub fn text_width(&self, banner_width: f32) -> f32 {
		(banner_width - self.padding * 3.0 - self.icon_size).max(0.0)
	}

	/// Height of a banner whose title and description measured as given.
	///
	/// Never shorter than the padded icon.
	pub fn content_height(&self, title: Size, description: Size) -> f32 {
		let text = self.padding * 2.0 + title.height + description.height;
		let icon = self.padding * 2.0 + self.icon_size;
		text.max(icon)
	}

	/// Origin of the icon within the banner.
	pub fn icon_origin(&self) -> Point {
		Point::new(self.padding, self.padding)
	}

	/// Origin of the first text line within the banner.
	///
	/// A description-only banner centers its single block vertically.
	pub fn text_origin(&self, banner_height: f32, title: Size, has_title: bool) -> Point {
		let x = self.padding + self.icon_size + self.padding;
		let y = if has_title {
			self.padding - self.text_offset
		} else {
			(banner_height * 0.5).ceil() - (title.height * 0.5).ceil() - self.text_offset
		};
		Point::new(x, y)
	}
}

/// The two frames a banner moves between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerFrames {
	/// Just outside the viewport at the chosen edge.
	pub hidden: Rect,
	/// Resting on screen, inset from the edge by the offset.
	pub rest: Rect,
}

/// Places a banner of `height` against `edge`.
///
/// The banner spans the viewport width. `offset` insets the rest frame from
/// the edge, typically by the status bar height.
pub fn place(viewport: Size, height: f32, edge: Edge, offset: f32) -> BannerFrames {
	let size = Size::new(viewport.width, height);
	let (hidden_y, rest_y) = match edge {
		Edge::Top => (-height, offset),
		Edge::Bottom => (viewport.height, viewport.height - height - offset),
	};
	BannerFrames {
		hidden: Rect::from_parts(Point::new(0.0, hidden_y), size),
		rest: Rect::from_parts(Point::new(0.0, rest_y), size),
	}
}
