//! The banner queue manager.
//!
//! [`MessageBar`] owns the pending queue, the single on-screen slot and the
//! timer clock. The host constructs one at its composition root, feeds it
//! taps and elapsed time, and reads outcomes from [`Ticket`]s or a
//! subscription.
//!
//! ```
//! use std::time::Duration;
//! use msgbar::{BannerRequest, BarConfig, MessageBar, Phase, TicketState};
//! use msgbar::geometry::Size;
//! use msgbar::testing::RecordingSurface;
//!
//! let mut bar = MessageBar::new(BarConfig::default(), || RecordingSurface::new(Size::new(320.0, 480.0)));
//! let mut ticket = bar.show_message(BannerRequest::info("Saved").description("Draft stored"));
//! assert_eq!(bar.phase(), Phase::Showing);
//!
//! bar.tick(Duration::from_secs(4));
//! assert_eq!(bar.phase(), Phase::Idle);
//! assert!(matches!(ticket.state(), TicketState::Dismissed(_)));
//! ```

mod cycle;
#[cfg(test)]
mod invariants;

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::animation::Motion;
use crate::config::BarConfig;
use crate::event::{BarEvent, Completion, Subscribers, Ticket};
use crate::geometry::{Point, Rect};
use crate::layout::BannerFrames;
use crate::queue::{BannerQueue, QueuedBanner};
use crate::request::{BannerId, BannerKey, BannerRequest};
use crate::style::StyleSheet;
use crate::surface::{LazySurface, PresentationSurface};
use crate::timer::{TimerHandle, TimerQueue};
use crate::types::{DiscardCause, DismissReason, Phase};

/// Timer payloads driving the show/dismiss cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wakeup {
	/// Entry animation finished.
	Entered(BannerId),
	/// Rest time elapsed.
	RestElapsed(BannerId),
	/// Exit animation finished.
	Exited(BannerId),
}

/// The banner occupying the on-screen slot.
#[derive(Debug)]
struct ActiveBanner {
	id: BannerId,
	request: BannerRequest,
	completion: Completion,
	phase: Phase,
	frames: BannerFrames,
	motion: Motion,
	motion_started: Duration,
	rest: Duration,
	/// Pending entry, rest or exit timer.
	timer: Option<TimerHandle>,
	/// Set by the first dismissal trigger; later triggers are ignored.
	hit: bool,
	reason: Option<DismissReason>,
}

impl ActiveBanner {
	fn frame_at(&self, now: Duration) -> Rect {
		self.motion.sample(now.saturating_sub(self.motion_started))
	}
}

/// Serializes banners onto one presentation surface.
#[derive(Debug)]
pub struct MessageBar<S> {
	config: BarConfig,
	queue: BannerQueue,
	timers: TimerQueue<Wakeup>,
	surface: LazySurface<S>,
	active: Option<ActiveBanner>,
	subscribers: Subscribers,
}

impl<S: PresentationSurface> MessageBar<S> {
	/// Creates a manager whose surface is built on the first show.
	pub fn new(config: BarConfig, factory: impl FnOnce() -> S + 'static) -> Self {
		Self::from_slot(config, LazySurface::new(factory))
	}

	/// Creates a manager around an existing surface.
	pub fn with_surface(config: BarConfig, surface: S) -> Self {
		Self::from_slot(config, LazySurface::ready(surface))
	}

	fn from_slot(config: BarConfig, surface: LazySurface<S>) -> Self {
		Self {
			config,
			queue: BannerQueue::default(),
			timers: TimerQueue::new(),
			surface,
			active: None,
			subscribers: Subscribers::default(),
		}
	}

	/// Enqueues a banner and shows it right away if nothing is on screen.
	pub fn show_message(&mut self, request: BannerRequest) -> Ticket {
		let id = self.queue.next_id();
		let (ticket, completion) = Ticket::new(id);
		debug!(banner = %id, kind = request.kind.as_str(), queued = self.queue.len(), "banner enqueued");
		self.queue.push(QueuedBanner { id, request, completion });

		if !self.is_visible() {
			self.show_next();
		}
		ticket
	}

	/// Removes the current banner without animating and drops everything queued.
	///
	/// No dismissal outcome is produced for any of them: tickets resolve as
	/// discarded and subscribers see [`BarEvent::Discarded`].
	pub fn hide_all(&mut self) {
		let cancelled = self.timers.clear();
		let removed = self.active.take().map(|active| active.id);
		if let Some(id) = removed {
			if let Some(surface) = self.surface.get_mut() {
				surface.remove();
			}
			self.subscribers.publish(BarEvent::Discarded { id, cause: DiscardCause::HideAll });
		}
		let dropped = self.queue.drain();
		let dropped_count = dropped.len();
		for banner in dropped {
			self.discard(banner, DiscardCause::HideAll);
		}
		self.queue.clear_last_shown();
		debug!(removed = ?removed, dropped = dropped_count, cancelled_timers = cancelled, "hid all banners");
	}

	/// Dismisses the current banner as if tapped.
	///
	/// Accepted while it is entering or resting. Returns false when there is
	/// nothing to dismiss or it is already leaving.
	pub fn tap(&mut self) -> bool {
		match self.phase() {
			Phase::Showing | Phase::Visible => self.begin_dismiss(DismissReason::Tapped),
			Phase::Idle | Phase::Dismissing => false,
		}
	}

	/// Taps at `point` if it hits the banner's current frame.
	///
	/// Points outside the banner pass through and return false.
	pub fn tap_at(&mut self, point: Point) -> bool {
		match self.current_frame() {
			Some(frame) if frame.contains(point) => self.tap(),
			_ => false,
		}
	}

	/// Starts dismissing the current banner with [`DismissReason::Requested`].
	pub fn dismiss_current(&mut self) -> bool {
		self.begin_dismiss(DismissReason::Requested)
	}

	/// Advances the clock by `delta`, firing every timer that falls due.
	///
	/// Timers armed while handling an earlier one are measured from its
	/// deadline, so a long tick runs several banners back to back.
	pub fn tick(&mut self, delta: Duration) {
		let until = self.timers.now().saturating_add(delta);
		while let Some(wakeup) = self.timers.pop_due(until) {
			self.wake(wakeup);
		}
		self.timers.advance_to(until);
	}

	/// Registers a subscriber for every subsequent [`BarEvent`].
	pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<BarEvent> {
		self.subscribers.subscribe()
	}

	pub fn subscriber_count(&self) -> usize {
		self.subscribers.len()
	}

	/// Replaces the whole configuration. Applies from the next banner shown.
	pub fn configure(&mut self, config: BarConfig) {
		debug!(
			discard_repeated = config.discard_repeated,
			show_at_bottom = config.show_at_bottom,
			offset = ?config.offset,
			"message bar configured"
		);
		self.config = config;
	}

	pub fn set_discard_repeated(&mut self, discard_repeated: bool) {
		self.config.discard_repeated = discard_repeated;
	}

	pub fn set_show_at_bottom(&mut self, show_at_bottom: bool) {
		self.config.show_at_bottom = show_at_bottom;
	}

	/// Sets the edge inset. `None` falls back to the surface's own inset.
	pub fn set_offset(&mut self, offset: Option<f32>) {
		self.config.offset = offset;
	}

	pub fn set_style_sheet(&mut self, style: StyleSheet) {
		self.config.style = style;
	}

	pub fn config(&self) -> &BarConfig {
		&self.config
	}

	pub fn phase(&self) -> Phase {
		self.active.as_ref().map_or(Phase::Idle, |active| active.phase)
	}

	/// True while a banner is entering, resting or leaving.
	pub fn is_visible(&self) -> bool {
		self.phase().is_occupied()
	}

	pub fn queued_len(&self) -> usize {
		self.queue.len()
	}

	/// Pending banners, next first.
	pub fn queued(&self) -> impl Iterator<Item = (BannerId, &BannerRequest)> {
		self.queue.iter().map(|banner| (banner.id, &banner.request))
	}

	/// The banner on screen, if any.
	pub fn current(&self) -> Option<(BannerId, &BannerRequest)> {
		self.active.as_ref().map(|active| (active.id, &active.request))
	}

	/// Where the current banner is drawn at this instant.
	pub fn current_frame(&self) -> Option<Rect> {
		let now = self.timers.now();
		self.active.as_ref().map(|active| active.frame_at(now))
	}

	/// Key of the last banner selected while repeats are discarded.
	pub fn last_shown(&self) -> Option<&BannerKey> {
		self.queue.last_shown()
	}

	/// Time until the next timer fires. `None` when nothing is pending.
	pub fn next_wakeup(&self) -> Option<Duration> {
		self.timers.next_deadline()
	}

	/// Total time fed through [`MessageBar::tick`].
	pub fn clock(&self) -> Duration {
		self.timers.now()
	}

	/// The surface, once created.
	pub fn surface(&self) -> Option<&S> {
		self.surface.get()
	}

	pub fn surface_mut(&mut self) -> Option<&mut S> {
		self.surface.get_mut()
	}
}
