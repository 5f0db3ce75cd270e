//! FIFO banner queue with optional repeat collapsing.
//!
//! Requests are never de-duplicated on insert. Repeats are discarded when
//! the next banner is selected, against the key of the last banner the
//! selector handed out.

use std::collections::VecDeque;

use crate::event::Completion;
use crate::request::{BannerId, BannerKey, BannerRequest};

/// Queue entry carrying the request and its outcome channel.
#[derive(Debug)]
pub(crate) struct QueuedBanner {
	pub(crate) id: BannerId,
	pub(crate) request: BannerRequest,
	pub(crate) completion: Completion,
}

/// Result of one selection step.
#[derive(Debug, Default)]
pub(crate) struct Selection {
	/// Banner to show next, if any remained.
	pub(crate) next: Option<QueuedBanner>,
	/// Repeats popped and dropped on the way, in queue order.
	pub(crate) discarded: Vec<QueuedBanner>,
}

/// Pending banners in insertion order.
#[derive(Debug, Default)]
pub(crate) struct BannerQueue {
	id_next: u64,
	queue: VecDeque<QueuedBanner>,
	last_shown: Option<BannerKey>,
}

impl BannerQueue {
	/// Allocates the next banner id.
	pub(crate) fn next_id(&mut self) -> BannerId {
		let id = BannerId(self.id_next);
		self.id_next = self.id_next.wrapping_add(1);
		id
	}

	pub(crate) fn push(&mut self, banner: QueuedBanner) {
		self.queue.push_back(banner);
	}

	/// Pops the next banner to show.
	///
	/// With `discard_repeated` unset this is a plain FIFO pop and the last
	/// shown key is cleared, since it no longer names the banner shown just
	/// before the next one. With it set, entries equal to the last
	/// shown key are popped into [`Selection::discarded`] until a different one
	/// turns up, which becomes the new last shown key. Exhausting the queue
	/// clears the key.
	pub(crate) fn select_next(&mut self, discard_repeated: bool) -> Selection {
		if !discard_repeated {
			self.last_shown = None;
			return Selection {
				next: self.queue.pop_front(),
				discarded: Vec::new(),
			};
		}

		let mut discarded = Vec::new();
		while let Some(banner) = self.queue.pop_front() {
			let key = banner.request.key();
			if self.last_shown.as_ref() == Some(&key) {
				discarded.push(banner);
				continue;
			}
			self.last_shown = Some(key);
			return Selection { next: Some(banner), discarded };
		}

		self.last_shown = None;
		Selection { next: None, discarded }
	}

	/// Removes every pending banner, oldest first.
	pub(crate) fn drain(&mut self) -> Vec<QueuedBanner> {
		self.queue.drain(..).collect()
	}

	pub(crate) fn last_shown(&self) -> Option<&BannerKey> {
		self.last_shown.as_ref()
	}

	pub(crate) fn clear_last_shown(&mut self) {
		self.last_shown = None;
	}

	pub(crate) fn len(&self) -> usize {
		self.queue.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = &QueuedBanner> {
		self.queue.iter()
	}
}
