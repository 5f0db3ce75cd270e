//! A surface that records every call, for tests and headless hosts.

use crate::animation::Motion;
use crate::geometry::{Rect, Size};
use crate::layout::BannerMetrics;
use crate::request::BannerRequest;
use crate::style::BannerStyle;
use crate::surface::PresentationSurface;
use crate::types::Edge;

/// Approximate advance of one title glyph.
const TITLE_GLYPH_WIDTH: f32 = 9.0;
/// Approximate advance of one description glyph.
const DESCRIPTION_GLYPH_WIDTH: f32 = 7.0;
const TITLE_LINE_HEIGHT: f32 = 19.0;
const DESCRIPTION_LINE_HEIGHT: f32 = 17.0;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
	Attach { title: Option<String>, icon: String, frame: Rect },
	Animate(Motion),
	Remove,
}

/// Records calls and measures text with fixed glyph advances.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
	viewport: Size,
	inset: f32,
	metrics: BannerMetrics,
	calls: Vec<SurfaceCall>,
	attached: Option<BannerRequest>,
}

impl RecordingSurface {
	pub fn new(viewport: Size) -> Self {
		Self {
			viewport,
			inset: 0.0,
			metrics: BannerMetrics::default(),
			calls: Vec::new(),
			attached: None,
		}
	}

	/// Reports `inset` as the status bar height at both edges.
	#[must_use]
	pub fn with_inset(mut self, inset: f32) -> Self {
		self.inset = inset;
		self
	}

	pub fn calls(&self) -> &[SurfaceCall] {
		&self.calls
	}

	/// Banner currently attached, if any.
	pub fn attached(&self) -> Option<&BannerRequest> {
		self.attached.as_ref()
	}

	/// Titles in attach order.
	pub fn attached_titles(&self) -> Vec<String> {
		self.calls
			.iter()
			.filter_map(|call| match call {
				SurfaceCall::Attach { title, .. } => Some(title.clone().unwrap_or_default()),
				_ => None,
			})
			.collect()
	}

	/// Motions in call order.
	pub fn motions(&self) -> Vec<Motion> {
		self.calls
			.iter()
			.filter_map(|call| match call {
				SurfaceCall::Animate(motion) => Some(*motion),
				_ => None,
			})
			.collect()
	}

	pub fn remove_count(&self) -> usize {
		self.calls.iter().filter(|call| matches!(call, SurfaceCall::Remove)).count()
	}
}

/// Height of `text` wrapped at `width` with a fixed glyph advance.
fn block_height(text: Option<&str>, glyph_width: f32, line_height: f32, width: f32) -> f32 {
	let Some(text) = text.filter(|t| !t.is_empty()) else {
		return 0.0;
	};
	let per_line = (width / glyph_width).floor().max(1.0) as usize;
	let lines: usize = text.lines().map(|line| line.chars().count().div_ceil(per_line).max(1)).sum();
	lines as f32 * line_height
}

impl PresentationSurface for RecordingSurface {
	fn viewport(&self) -> Size {
		self.viewport
	}

	fn edge_inset(&self, _edge: Edge) -> f32 {
		self.inset
	}

	fn measure(&mut self, banner: &BannerRequest, available_width: f32) -> Size {
		let text_width = self.metrics.text_width(available_width);
		let title = Size::new(
			text_width,
			block_height(banner.title.as_deref(), TITLE_GLYPH_WIDTH, TITLE_LINE_HEIGHT, text_width),
		);
		let description = Size::new(
			text_width,
			block_height(banner.description.as_deref(), DESCRIPTION_GLYPH_WIDTH, DESCRIPTION_LINE_HEIGHT, text_width),
		);
		Size::new(available_width, self.metrics.content_height(title, description))
	}

	fn attach(&mut self, banner: &BannerRequest, style: &BannerStyle, frame: Rect) {
		self.attached = Some(banner.clone());
		self.calls.push(SurfaceCall::Attach {
			title: banner.title.clone(),
			icon: style.icon.clone(),
			frame,
		});
	}

	fn animate(&mut self, motion: Motion) {
		self.calls.push(SurfaceCall::Animate(motion));
	}

	fn remove(&mut self) {
		self.attached = None;
		self.calls.push(SurfaceCall::Remove);
	}
}
