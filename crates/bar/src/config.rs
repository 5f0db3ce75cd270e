//! Manager configuration and its TOML form.
//!
//! ```toml
//! discard_repeated = true
//! show_at_bottom = false
//! offset = 20.0
//! default_duration_secs = 3.0
//! animation_duration_secs = 0.25
//!
//! [style.error]
//! background = [0.8, 0.1, 0.1, 0.96]
//! stroke = [0.6, 0.0, 0.0, 1.0]
//! icon = "icon-error.png"
//! ```
//!
//! Every key is optional. Changes applied through
//! [`crate::MessageBar::configure`] take effect on the next banner shown.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{BarError, Result};
use crate::style::StyleSheet;

/// Rest time used when a request carries no duration.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);
/// Length of both the entry and the exit slide.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Runtime configuration of a [`crate::MessageBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
	/// Drop queued banners identical to the one shown just before them.
	pub discard_repeated: bool,
	/// Slide in from the bottom edge instead of the top.
	pub show_at_bottom: bool,
	/// Extra inset from the edge. `None` asks the surface for its edge inset.
	pub offset: Option<f32>,
	pub default_duration: Duration,
	pub animation_duration: Duration,
	pub style: StyleSheet,
}

impl Default for BarConfig {
	fn default() -> Self {
		Self {
			discard_repeated: false,
			show_at_bottom: false,
			offset: None,
			default_duration: DEFAULT_DURATION,
			animation_duration: DEFAULT_ANIMATION_DURATION,
			style: StyleSheet::default(),
		}
	}
}

/// On-disk shape. Durations are fractional seconds.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
	discard_repeated: bool,
	show_at_bottom: bool,
	offset: Option<f32>,
	default_duration_secs: f64,
	animation_duration_secs: f64,
	style: StyleSheet,
}

impl Default for ConfigFile {
	fn default() -> Self {
		let defaults = BarConfig::default();
		Self {
			discard_repeated: defaults.discard_repeated,
			show_at_bottom: defaults.show_at_bottom,
			offset: defaults.offset,
			default_duration_secs: defaults.default_duration.as_secs_f64(),
			animation_duration_secs: defaults.animation_duration.as_secs_f64(),
			style: defaults.style,
		}
	}
}

impl BarConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let file: ConfigFile = toml::from_str(input)?;
		file.try_into()
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| BarError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}

	/// Resolves the edge offset, falling back to the surface-provided inset.
	pub fn offset_or(&self, surface_inset: f32) -> f32 {
		self.offset.unwrap_or(surface_inset)
	}
}

impl TryFrom<ConfigFile> for BarConfig {
	type Error = BarError;

	fn try_from(file: ConfigFile) -> Result<Self> {
		if let Some(offset) = file.offset
			&& !(offset.is_finite() && offset >= 0.0)
		{
			return Err(BarError::InvalidConfig(format!("offset must be a finite non-negative number, got {offset}")));
		}
		Ok(Self {
			discard_repeated: file.discard_repeated,
			show_at_bottom: file.show_at_bottom,
			offset: file.offset,
			default_duration: secs("default_duration_secs", file.default_duration_secs)?,
			animation_duration: secs("animation_duration_secs", file.animation_duration_secs)?,
			style: file.style,
		})
	}
}

fn secs(field: &str, value: f64) -> Result<Duration> {
	Duration::try_from_secs_f64(value)
		.map_err(|_| BarError::InvalidConfig(format!("{field} must be a non-negative number of seconds, got {value}")))
}
