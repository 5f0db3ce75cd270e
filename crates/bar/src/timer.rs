//! Single-threaded timer queue on a virtual clock.
//!
//! The host advances the clock explicitly, so firing order is deterministic
//! and no timer callback ever runs off the owning thread. Entries are
//! cancellable by handle.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
	deadline: Duration,
	seq: u64,
}

impl TimerHandle {
	/// Clock reading at which the entry fires.
	pub const fn deadline(&self) -> Duration {
		self.deadline
	}
}

/// Deadline-ordered queue of pending timers.
///
/// Entries sharing a deadline fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
	now: Duration,
	seq_next: u64,
	entries: BTreeMap<TimerHandle, T>,
}

impl<T> Default for TimerQueue<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> TimerQueue<T> {
	pub fn new() -> Self {
		Self {
			now: Duration::ZERO,
			seq_next: 0,
			entries: BTreeMap::new(),
		}
	}

	/// Current clock reading.
	pub const fn now(&self) -> Duration {
		self.now
	}

	/// Schedules `payload` to fire `delay` after the current clock reading.
	pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
		let handle = TimerHandle {
			deadline: self.now.saturating_add(delay),
			seq: self.seq_next,
		};
		self.seq_next = self.seq_next.wrapping_add(1);
		self.entries.insert(handle, payload);
		handle
	}

	/// Cancels a pending entry. Returns false if it already fired or was cancelled.
	pub fn cancel(&mut self, handle: TimerHandle) -> bool {
		self.entries.remove(&handle).is_some()
	}

	/// Pops the earliest entry due at or before `until`.
	///
	/// The clock moves to the fired entry's deadline, so anything scheduled
	/// while handling it is measured from that point. Callers drain with a
	/// loop and then call [`TimerQueue::advance_to`].
	pub fn pop_due(&mut self, until: Duration) -> Option<T> {
		let entry = self.entries.first_entry()?;
		if entry.key().deadline > until {
			return None;
		}
		let deadline = entry.key().deadline;
		let payload = entry.remove();
		self.now = self.now.max(deadline);
		Some(payload)
	}

	/// Moves the clock forward to `until`. Never moves it backwards.
	pub fn advance_to(&mut self, until: Duration) {
		self.now = self.now.max(until);
	}

	/// Time from now until the earliest pending deadline.
	pub fn next_deadline(&self) -> Option<Duration> {
		self.entries.keys().next().map(|handle| handle.deadline.saturating_sub(self.now))
	}

	/// Drops every pending entry and returns how many were dropped.
	pub fn clear(&mut self) -> usize {
		let dropped = self.entries.len();
		self.entries.clear();
		dropped
	}
}
