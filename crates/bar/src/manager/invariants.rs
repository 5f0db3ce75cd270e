use std::collections::HashMap;
use std::time::Duration;

use crate::geometry::Size;
use crate::testing::RecordingSurface;
use crate::{BannerRequest, BarConfig, BarEvent, DismissReason, MessageBar, Phase, TicketState};

const ENTRY_AND_REST: Duration = Duration::from_millis(3250);

fn bar(discard_repeated: bool) -> MessageBar<RecordingSurface> {
	let config = BarConfig {
		discard_repeated,
		..BarConfig::default()
	};
	MessageBar::with_surface(config, RecordingSurface::new(Size::new(320.0, 480.0)))
}

fn surface(bar: &MessageBar<RecordingSurface>) -> &RecordingSurface {
	bar.surface().expect("surface is created up front")
}

fn drain_events(rx: &mut tokio::sync::mpsc::UnboundedReceiver<BarEvent>) -> Vec<BarEvent> {
	std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

/// Must present banners in enqueue order when repeats are kept.
///
/// * Enforced in: `BannerQueue::select_next`, `MessageBar::show_next`
/// * Failure symptom: a later banner jumps ahead of an earlier one.
#[test]
fn test_banners_show_in_fifo_order() {
	let mut bar = bar(false);
	for title in ["A", "B", "A", "C"] {
		bar.show_message(BannerRequest::info(title));
	}
	bar.tick(Duration::from_secs(60));

	assert_eq!(surface(&bar).attached_titles(), vec!["A", "B", "A", "C"]);
	assert_eq!(bar.phase(), Phase::Idle);
}

/// Must keep at most one banner attached across the whole cycle.
///
/// * Enforced in: `MessageBar::show_message`, `MessageBar::on_exited`
/// * Failure symptom: two banners overlap on screen.
#[test]
fn test_at_most_one_banner_on_screen() {
	let mut bar = bar(false);
	for title in ["A", "B", "C"] {
		bar.show_message(BannerRequest::info(title));
	}

	for _ in 0..250 {
		bar.tick(Duration::from_millis(50));
		let recorded = surface(&bar);
		let on_screen = recorded.attached_titles().len() - recorded.remove_count();
		assert!(on_screen <= 1, "{on_screen} banners attached at {:?}", bar.clock());
		assert_eq!(on_screen == 1, bar.phase().is_occupied());
	}
	assert_eq!(surface(&bar).attached_titles().len(), 3);
}

/// Must collapse a run of identical banners into one when repeats are discarded.
///
/// * Enforced in: `BannerQueue::select_next`
/// * Failure symptom: the same banner flashes several times in a row.
#[test]
fn test_repeated_burst_collapses() {
	let mut bar = bar(true);
	let mut tickets: Vec<_> = ["A", "A", "A", "B"]
		.into_iter()
		.map(|title| bar.show_message(BannerRequest::info(title)))
		.collect();
	bar.tick(Duration::from_secs(60));

	assert_eq!(surface(&bar).attached_titles(), vec!["A", "B"]);
	let states: Vec<_> = tickets.iter_mut().map(|ticket| ticket.state()).collect();
	assert_eq!(
		states,
		vec![
			TicketState::Dismissed(DismissReason::TimedOut),
			TicketState::Discarded,
			TicketState::Discarded,
			TicketState::Dismissed(DismissReason::TimedOut),
		]
	);
}

/// Must only discard repeats of the banner shown immediately before.
///
/// * Enforced in: `BannerQueue::select_next`
/// * Failure symptom: a banner is swallowed because it appeared earlier.
#[test]
fn test_non_consecutive_repeats_are_shown() {
	let mut bar = bar(true);
	for title in ["A", "B", "A"] {
		bar.show_message(BannerRequest::info(title));
	}
	bar.tick(Duration::from_secs(60));

	assert_eq!(surface(&bar).attached_titles(), vec!["A", "B", "A"]);
}

/// Must deliver exactly one dismissal outcome per displayed banner.
///
/// * Enforced in: `MessageBar::begin_dismiss`, `MessageBar::on_exited`
/// * Failure symptom: a caller hears about a dismissal twice or never.
#[test]
fn test_each_shown_banner_dismissed_once() {
	let mut bar = bar(false);
	let mut rx = bar.subscribe();
	let mut first = bar.show_message(BannerRequest::info("A"));
	let mut second = bar.show_message(BannerRequest::success("B"));

	bar.tick(Duration::from_millis(100));
	assert!(bar.tap());
	bar.tick(Duration::from_millis(100));
	assert!(!bar.tap());
	assert!(!bar.dismiss_current());
	bar.tick(Duration::from_secs(60));

	assert_eq!(first.state(), TicketState::Dismissed(DismissReason::Tapped));
	assert_eq!(second.state(), TicketState::Dismissed(DismissReason::TimedOut));

	let mut dismissals: HashMap<_, usize> = HashMap::new();
	let mut shown = 0;
	for event in drain_events(&mut rx) {
		match event {
			BarEvent::Shown { .. } => shown += 1,
			BarEvent::Dismissed { id, .. } => *dismissals.entry(id).or_default() += 1,
			BarEvent::Discarded { .. } => panic!("nothing should be discarded"),
		}
	}
	assert_eq!(shown, 2);
	assert_eq!(dismissals.len(), 2);
	assert!(dismissals.values().all(|count| *count == 1));
}

/// Must clear the screen and the queue without any dismissal outcome on hide-all.
///
/// * Enforced in: `MessageBar::hide_all`
/// * Failure symptom: discarded banners report dismissals or reappear later.
#[test]
fn test_hide_all_discards_without_outcomes() {
	let mut bar = bar(false);
	let mut rx = bar.subscribe();
	let mut tickets: Vec<_> = ["A", "B", "C", "D"]
		.into_iter()
		.map(|title| bar.show_message(BannerRequest::info(title)))
		.collect();
	bar.tick(Duration::from_secs(1));
	assert_eq!(bar.phase(), Phase::Visible);
	assert_eq!(bar.queued_len(), 3);

	bar.hide_all();
	assert!(!bar.is_visible());
	assert_eq!(bar.queued_len(), 0);
	assert_eq!(bar.next_wakeup(), None);
	assert!(tickets.iter_mut().all(|ticket| ticket.state() == TicketState::Discarded));

	bar.tick(Duration::from_secs(60));
	let recorded = surface(&bar);
	assert_eq!(recorded.attached_titles(), vec!["A"]);
	assert_eq!(recorded.remove_count(), 1);
	// Entry only; hiding does not animate out.
	assert_eq!(recorded.motions().len(), 1);
	assert!(
		drain_events(&mut rx)
			.iter()
			.all(|event| !matches!(event, BarEvent::Dismissed { .. }))
	);
}

/// Must honor only the first of a tap and a timeout landing together.
///
/// * Enforced in: `MessageBar::begin_dismiss` (`hit` flag)
/// * Failure symptom: the exit animation restarts or two outcomes fire.
#[test]
fn test_tap_and_timeout_in_same_instant() {
	let mut bar = bar(false);
	let mut ticket = bar.show_message(BannerRequest::info("A"));
	bar.tick(ENTRY_AND_REST - Duration::from_millis(1));
	assert!(bar.tap());
	bar.tick(Duration::from_millis(1));
	bar.tick(Duration::from_secs(1));
	assert_eq!(ticket.state(), TicketState::Dismissed(DismissReason::Tapped));
	assert_eq!(surface(&bar).motions().len(), 2);

	let mut bar = self::bar(false);
	let mut ticket = bar.show_message(BannerRequest::info("A"));
	bar.tick(ENTRY_AND_REST);
	assert_eq!(bar.phase(), Phase::Dismissing);
	assert!(!bar.tap());
	bar.tick(Duration::from_secs(1));
	assert_eq!(ticket.state(), TicketState::Dismissed(DismissReason::TimedOut));
	assert_eq!(surface(&bar).motions().len(), 2);
}
