//! A surface that draws banners as log lines.

use msgbar::animation::Motion;
use msgbar::geometry::{Rect, Size};
use msgbar::layout::BannerMetrics;
use msgbar::{BannerRequest, BannerStyle, Edge, PresentationSurface, Rgba};
use tracing::{debug, info};

/// Terminal cell advance in points.
const CELL_WIDTH: f32 = 8.0;
const LINE_HEIGHT: f32 = 18.0;
/// Status bar height reported at the top edge.
const STATUS_BAR: f32 = 20.0;

#[derive(Debug)]
pub struct ConsoleSurface {
	viewport: Size,
	metrics: BannerMetrics,
	frame: Option<Rect>,
}

impl ConsoleSurface {
	pub fn new(viewport: Size) -> Self {
		debug!(width = viewport.width, height = viewport.height, "console surface created");
		Self {
			viewport,
			metrics: BannerMetrics::default(),
			frame: None,
		}
	}

	fn text_block(&self, text: Option<&str>, width: f32) -> Size {
		let columns = (width / CELL_WIDTH).floor().max(1.0) as usize;
		let lines: usize = text.map_or(0, |text| text.lines().map(|line| line.chars().count().div_ceil(columns).max(1)).sum());
		Size::new(width, lines as f32 * LINE_HEIGHT)
	}

	/// True while the last frame drawn overlaps the viewport.
	fn is_on_screen(&self) -> bool {
		self.frame.is_some_and(|frame| frame.intersects(self.viewport))
	}
}

fn hex(color: Rgba) -> String {
	let [r, g, b, a] = color.to_rgba8();
	format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

impl PresentationSurface for ConsoleSurface {
	fn viewport(&self) -> Size {
		self.viewport
	}

	fn edge_inset(&self, edge: Edge) -> f32 {
		match edge {
			Edge::Top => STATUS_BAR,
			Edge::Bottom => 0.0,
		}
	}

	fn measure(&mut self, banner: &BannerRequest, available_width: f32) -> Size {
		let text_width = self.metrics.text_width(available_width);
		let title = self.text_block(banner.title.as_deref(), text_width);
		let description = self.text_block(banner.description.as_deref(), text_width);
		Size::new(available_width, self.metrics.content_height(title, description))
	}

	fn attach(&mut self, banner: &BannerRequest, style: &BannerStyle, frame: Rect) {
		let title = self.text_block(banner.title.as_deref(), self.metrics.text_width(frame.width));
		let icon = self.metrics.icon_origin();
		let text = self.metrics.text_origin(frame.height, title, banner.title.is_some());
		info!(
			kind = banner.kind.as_str(),
			title = banner.title.as_deref().unwrap_or(""),
			description = banner.description.as_deref().unwrap_or(""),
			icon = %style.icon,
			background = %hex(style.background),
			stroke = %hex(style.stroke),
			height = frame.height,
			icon_x = icon.x,
			icon_y = icon.y,
			text_x = text.x,
			text_y = text.y,
			"banner attached"
		);
		self.frame = Some(frame);
	}

	fn animate(&mut self, motion: Motion) {
		self.frame = Some(motion.to);
		debug!(
			from_y = motion.from.y,
			to_y = motion.to.y,
			ms = motion.duration.as_millis() as u64,
			ends_on_screen = self.is_on_screen(),
			"slide"
		);
	}

	fn remove(&mut self) {
		let on_screen = self.is_on_screen();
		if let Some(frame) = self.frame.take() {
			debug!(y = frame.y, on_screen, "banner removed");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_banner_is_icon_height() {
		let mut surface = ConsoleSurface::new(Size::new(375.0, 667.0));
		let size = surface.measure(&BannerRequest::info("Info").description("This is information"), 375.0);
		assert_eq!(size.height, 20.0 + 2.0 * LINE_HEIGHT);
	}

	#[test]
	fn top_edge_clears_status_bar() {
		let surface = ConsoleSurface::new(Size::new(375.0, 667.0));
		assert_eq!(surface.edge_inset(Edge::Top), STATUS_BAR);
		assert_eq!(surface.edge_inset(Edge::Bottom), 0.0);
	}

	#[test]
	fn slide_out_leaves_viewport() {
		let mut surface = ConsoleSurface::new(Size::new(375.0, 667.0));
		let hidden = Rect::new(0.0, -56.0, 375.0, 56.0);
		let rest = Rect::new(0.0, 20.0, 375.0, 56.0);
		surface.attach(&BannerRequest::info("Info"), &msgbar::StyleSheet::default().info, hidden);
		assert!(!surface.is_on_screen());

		surface.animate(Motion::new(hidden, rest, std::time::Duration::from_millis(250)));
		assert!(surface.is_on_screen());
		surface.animate(Motion::new(rest, hidden, std::time::Duration::from_millis(250)));
		assert!(!surface.is_on_screen());

		surface.remove();
		assert!(!surface.is_on_screen());
	}

	#[test]
	fn colors_render_as_hex() {
		assert_eq!(hex(Rgba::new(1.0, 0.0, 0.0, 1.0)), "#ff0000ff");
	}
}
