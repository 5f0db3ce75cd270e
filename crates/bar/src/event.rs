//! Outcome delivery: per-banner tickets and the manager's subscription list.

use tokio::sync::{mpsc, oneshot};

use crate::request::BannerId;
use crate::types::{DiscardCause, DismissReason};

/// Lifecycle notification broadcast to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
	/// The banner was attached to the surface and started its entry animation.
	Shown { id: BannerId },
	/// The banner finished its exit animation and left the screen.
	Dismissed { id: BannerId, reason: DismissReason },
	/// The banner was dropped without being dismissed.
	Discarded { id: BannerId, cause: DiscardCause },
}

impl BarEvent {
	pub const fn id(&self) -> BannerId {
		match self {
			BarEvent::Shown { id } | BarEvent::Dismissed { id, .. } | BarEvent::Discarded { id, .. } => *id,
		}
	}
}

/// Current state of a [`Ticket`] outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketState {
	/// Queued or on screen.
	Pending,
	/// Displayed and dismissed for the given reason.
	Dismissed(DismissReason),
	/// Dropped by de-duplication or [`crate::MessageBar::hide_all`].
	Discarded,
}

/// Receipt for one enqueued banner.
///
/// Resolves exactly once: to the dismissal reason if the banner was shown,
/// or to "discarded" if it never completed a dismissal.
#[derive(Debug)]
pub struct Ticket {
	id: BannerId,
	outcome: oneshot::Receiver<DismissReason>,
	resolved: Option<TicketState>,
}

impl Ticket {
	pub(crate) fn new(id: BannerId) -> (Self, Completion) {
		let (tx, rx) = oneshot::channel();
		let ticket = Self {
			id,
			outcome: rx,
			resolved: None,
		};
		(ticket, Completion { tx })
	}

	pub const fn id(&self) -> BannerId {
		self.id
	}

	/// Polls the outcome without blocking.
	pub fn state(&mut self) -> TicketState {
		if let Some(state) = self.resolved {
			return state;
		}
		let state = match self.outcome.try_recv() {
			Ok(reason) => TicketState::Dismissed(reason),
			Err(oneshot::error::TryRecvError::Empty) => return TicketState::Pending,
			Err(oneshot::error::TryRecvError::Closed) => TicketState::Discarded,
		};
		self.resolved = Some(state);
		state
	}

	/// Waits for the banner to leave the queue.
	///
	/// Returns `None` when the banner was discarded instead of dismissed. The
	/// manager must keep being ticked by another task for this to resolve.
	pub async fn outcome(self) -> Option<DismissReason> {
		match self.resolved {
			Some(TicketState::Dismissed(reason)) => return Some(reason),
			Some(TicketState::Discarded) => return None,
			Some(TicketState::Pending) | None => {}
		}
		self.outcome.await.ok()
	}
}

/// Manager-side half of a [`Ticket`]. Dropping it unresolved marks the ticket discarded.
#[derive(Debug)]
pub(crate) struct Completion {
	tx: oneshot::Sender<DismissReason>,
}

impl Completion {
	pub(crate) fn resolve(self, reason: DismissReason) {
		// The caller may have dropped its ticket.
		let _ = self.tx.send(reason);
	}
}

/// Explicit subscription list. Closed receivers are pruned on the next publish.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
	senders: Vec<mpsc::UnboundedSender<BarEvent>>,
}

impl Subscribers {
	pub(crate) fn subscribe(&mut self) -> mpsc::UnboundedReceiver<BarEvent> {
		let (tx, rx) = mpsc::unbounded_channel();
		self.senders.push(tx);
		rx
	}

	pub(crate) fn publish(&mut self, event: BarEvent) {
		self.senders.retain(|tx| tx.send(event).is_ok());
	}

	pub(crate) fn len(&self) -> usize {
		self.senders.len()
	}
}
