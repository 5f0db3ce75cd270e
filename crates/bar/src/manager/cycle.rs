//! Show and dismiss transitions.
//!
//! `Idle -> Showing -> Visible -> Dismissing -> Idle`, driven by timers on the
//! manager's clock. Every transition out of a phase cancels that phase's
//! timer, so a stale wakeup only ever finds a different banner or none.

use tracing::{debug, trace};

use super::{ActiveBanner, MessageBar, Wakeup};
use crate::animation::{Easing, Motion};
use crate::event::BarEvent;
use crate::layout;
use crate::queue::QueuedBanner;
use crate::request::BannerId;
use crate::surface::PresentationSurface;
use crate::types::{DiscardCause, DismissReason, Edge, Phase};

impl<S: PresentationSurface> MessageBar<S> {
	/// Selects and presents the next banner, or settles idle.
	pub(super) fn show_next(&mut self) {
		let selection = self.queue.select_next(self.config.discard_repeated);
		for banner in selection.discarded {
			self.discard(banner, DiscardCause::Duplicate);
		}
		match selection.next {
			Some(banner) => self.present(banner),
			None => trace!("message bar idle"),
		}
	}

	fn present(&mut self, banner: QueuedBanner) {
		let QueuedBanner { id, request, completion } = banner;
		let edge = Edge::from_show_at_bottom(self.config.show_at_bottom);
		let animation = self.config.animation_duration;
		let rest = request.duration.unwrap_or(self.config.default_duration);

		let surface = self.surface.get_or_create();
		let viewport = surface.viewport();
		let offset = self.config.offset_or(surface.edge_inset(edge));
		let size = surface.measure(&request, viewport.width);
		let frames = layout::place(viewport, size.height, edge, offset);
		let motion = Motion::new(frames.hidden, frames.rest, animation).with_easing(Easing::EaseOut);
		surface.attach(&request, self.config.style.for_kind(request.kind), frames.hidden);
		surface.animate(motion);

		let now = self.timers.now();
		let timer = self.timers.schedule(animation, Wakeup::Entered(id));
		debug!(
			banner = %id,
			kind = request.kind.as_str(),
			?edge,
			height = size.height,
			rest_ms = rest.as_millis() as u64,
			"banner showing"
		);

		self.active = Some(ActiveBanner {
			id,
			request,
			completion,
			phase: Phase::Showing,
			frames,
			motion,
			motion_started: now,
			rest,
			timer: Some(timer),
			hit: false,
			reason: None,
		});
		self.subscribers.publish(BarEvent::Shown { id });
	}

	pub(super) fn wake(&mut self, wakeup: Wakeup) {
		match wakeup {
			Wakeup::Entered(id) => self.on_entered(id),
			Wakeup::RestElapsed(id) => {
				if self.is_current(id) {
					self.begin_dismiss(DismissReason::TimedOut);
				}
			}
			Wakeup::Exited(id) => self.on_exited(id),
		}
	}

	fn is_current(&self, id: BannerId) -> bool {
		self.active.as_ref().is_some_and(|active| active.id == id)
	}

	fn on_entered(&mut self, id: BannerId) {
		let Some(active) = self.active.as_mut().filter(|active| active.id == id) else {
			return;
		};
		if active.phase != Phase::Showing {
			return;
		}
		active.phase = Phase::Visible;
		active.timer = Some(self.timers.schedule(active.rest, Wakeup::RestElapsed(id)));
		trace!(banner = %id, "banner visible");
	}

	/// Starts the exit slide from wherever the banner is drawn right now.
	///
	/// Only the first trigger per banner wins. Returns whether this call did.
	pub(super) fn begin_dismiss(&mut self, reason: DismissReason) -> bool {
		let now = self.timers.now();
		let Some(active) = self.active.as_mut() else {
			return false;
		};
		if active.hit {
			trace!(banner = %active.id, ?reason, "dismissal already in progress");
			return false;
		}
		active.hit = true;
		if let Some(timer) = active.timer.take() {
			self.timers.cancel(timer);
		}

		let from = active.frame_at(now);
		let animation = active.motion.duration;
		let motion = Motion::new(from, active.frames.hidden, animation).with_easing(Easing::EaseIn);
		active.phase = Phase::Dismissing;
		active.reason = Some(reason);
		active.motion = motion;
		active.motion_started = now;
		active.timer = Some(self.timers.schedule(animation, Wakeup::Exited(active.id)));
		debug!(banner = %active.id, ?reason, "banner dismissing");

		if let Some(surface) = self.surface.get_mut() {
			surface.animate(motion);
		}
		true
	}

	fn on_exited(&mut self, id: BannerId) {
		if !self.is_current(id) {
			return;
		}
		let Some(active) = self.active.take() else {
			return;
		};
		if let Some(surface) = self.surface.get_mut() {
			surface.remove();
		}

		let reason = active.reason.unwrap_or(DismissReason::Requested);
		active.completion.resolve(reason);
		self.subscribers.publish(BarEvent::Dismissed { id, reason });
		debug!(banner = %id, ?reason, remaining = self.queue.len(), "banner dismissed");

		if self.queue.is_empty() {
			self.queue.clear_last_shown();
		} else {
			self.show_next();
		}
	}

	/// Drops a queued banner without showing it. Its ticket resolves as discarded.
	pub(super) fn discard(&mut self, banner: QueuedBanner, cause: DiscardCause) {
		trace!(banner = %banner.id, ?cause, "banner discarded");
		self.subscribers.publish(BarEvent::Discarded { id: banner.id, cause });
	}
}
