//! Core enums shared by the queue, the manager and the surface.

use std::str::FromStr;

/// Banner category. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
	/// Informational message (default).
	#[default]
	Info,
	/// Operation completed successfully.
	Success,
	/// Something went wrong.
	Error,
}

impl Kind {
	pub const ALL: [Kind; 3] = [Kind::Info, Kind::Success, Kind::Error];

	pub const fn as_str(self) -> &'static str {
		match self {
			Kind::Info => "info",
			Kind::Success => "success",
			Kind::Error => "error",
		}
	}
}

impl FromStr for Kind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Kind::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| format!("unknown banner kind '{s}' (expected info, success or error)"))
	}
}

/// Screen edge banners slide in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
	#[default]
	Top,
	Bottom,
}

impl Edge {
	pub const fn from_show_at_bottom(show_at_bottom: bool) -> Self {
		if show_at_bottom { Edge::Bottom } else { Edge::Top }
	}
}

/// Lifecycle phase of the manager's single banner slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// Nothing on screen.
	#[default]
	Idle,
	/// Animating into view.
	Showing,
	/// Fully visible, waiting for tap or timeout.
	Visible,
	/// Animating out of view.
	Dismissing,
}

impl Phase {
	/// Returns true while a banner occupies the slot.
	pub const fn is_occupied(self) -> bool {
		!matches!(self, Phase::Idle)
	}
}

/// Why a displayed banner left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
	/// The user tapped the banner.
	Tapped,
	/// The display duration elapsed.
	TimedOut,
	/// The host dismissed it through [`crate::MessageBar::dismiss_current`].
	Requested,
}

/// Why a banner was dropped without a dismissal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardCause {
	/// Identical to the previously shown banner while repeats are discarded.
	Duplicate,
	/// Removed by [`crate::MessageBar::hide_all`].
	HideAll,
}
