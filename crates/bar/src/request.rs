//! Banner requests produced by callers.

use std::time::Duration;

use crate::types::Kind;

/// Identifier assigned to a request when it is enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub(crate) u64);

impl std::fmt::Display for BannerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A message a caller wants shown.
///
/// At least one of `title` or `description` should be non-empty. This is not
/// enforced; an empty request renders an empty banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerRequest {
	pub title: Option<String>,
	pub description: Option<String>,
	pub kind: Kind,
	/// Rest time override; `None` uses the manager's configured default.
	pub duration: Option<Duration>,
}

impl BannerRequest {
	pub fn new(kind: Kind) -> Self {
		Self { kind, ..Self::default() }
	}

	/// Creates an info banner with a title.
	pub fn info(title: impl Into<String>) -> Self {
		Self::new(Kind::Info).title(title)
	}

	/// Creates a success banner with a title.
	pub fn success(title: impl Into<String>) -> Self {
		Self::new(Kind::Success).title(title)
	}

	/// Creates an error banner with a title.
	pub fn error(title: impl Into<String>) -> Self {
		Self::new(Kind::Error).title(title)
	}

	#[must_use]
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn kind(mut self, kind: Kind) -> Self {
		self.kind = kind;
		self
	}

	/// Overrides how long the banner rests on screen before auto-dismissing.
	///
	/// Without an override the manager's configured default applies.
	#[must_use]
	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration = Some(duration);
		self
	}

	/// Returns true when neither title nor description has text.
	pub fn is_blank(&self) -> bool {
		self.title.as_deref().is_none_or(str::is_empty) && self.description.as_deref().is_none_or(str::is_empty)
	}

	/// Returns the de-duplication key for this request.
	pub fn key(&self) -> BannerKey {
		BannerKey {
			title: self.title.clone(),
			description: self.description.clone(),
			kind: self.kind,
		}
	}
}

/// Equality key used when discarding repeated banners.
///
/// Two requests are repeats when title, description and kind all match.
/// Duration and outcome channels are not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BannerKey {
	title: Option<String>,
	description: Option<String>,
	kind: Kind,
}
