//! Kind-to-style lookup table handed to the presentation surface.

use serde::Deserialize;

use crate::types::Kind;

/// Default opacity of banner backgrounds.
pub const BACKGROUND_ALPHA: f32 = 0.96;

/// RGBA color with components in `[0.0, 1.0]`.
///
/// Deserializes from a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Rgba {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Rgba {
	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
		Self::new(r, g, b, 1.0)
	}

	/// Converts to 8-bit channels, rounding to nearest.
	pub fn to_rgba8(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
	}
}

impl From<[f32; 4]> for Rgba {
	fn from([r, g, b, a]: [f32; 4]) -> Self {
		Self::new(r, g, b, a)
	}
}

/// Resolved styling for one banner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BannerStyle {
	/// Fill behind the whole banner.
	pub background: Rgba,
	/// One-point rule along the banner's bottom edge.
	pub stroke: Rgba,
	/// Icon asset name resolved by the surface.
	pub icon: String,
}

/// Per-kind styles. Partial overrides fall back to the built-in palette.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
	pub info: BannerStyle,
	pub success: BannerStyle,
	pub error: BannerStyle,
}

impl Default for StyleSheet {
	fn default() -> Self {
		Self {
			info: BannerStyle {
				background: Rgba::new(0.0, 0.482, 1.0, BACKGROUND_ALPHA),
				stroke: Rgba::opaque(0.0, 0.415, 0.803),
				icon: "icon-info.png".to_string(),
			},
			success: BannerStyle {
				background: Rgba::new(0.0, 0.831, 0.176, BACKGROUND_ALPHA),
				stroke: Rgba::opaque(0.0, 0.772, 0.164),
				icon: "icon-success.png".to_string(),
			},
			error: BannerStyle {
				background: Rgba::new(1.0, 0.611, 0.0, BACKGROUND_ALPHA),
				stroke: Rgba::opaque(0.949, 0.580, 0.0),
				icon: "icon-error.png".to_string(),
			},
		}
	}
}

impl StyleSheet {
	pub fn for_kind(&self, kind: Kind) -> &BannerStyle {
		match kind {
			Kind::Info => &self.info,
			Kind::Success => &self.success,
			Kind::Error => &self.error,
		}
	}
}
