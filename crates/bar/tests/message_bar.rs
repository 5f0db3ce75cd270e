use std::time::Duration;

use msgbar::geometry::{Point, Rect, Size};
use msgbar::testing::RecordingSurface;
use msgbar::{BannerRequest, BarConfig, BarEvent, DismissReason, Kind, MessageBar, Phase, TicketState};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::{fixture, rstest};

const VIEWPORT: Size = Size::new(375.0, 667.0);

#[fixture]
fn bar() -> MessageBar<RecordingSurface> {
	MessageBar::with_surface(BarConfig::default(), RecordingSurface::new(VIEWPORT))
}

fn surface(bar: &MessageBar<RecordingSurface>) -> &RecordingSurface {
	bar.surface().expect("surface exists")
}

#[rstest]
#[case::top(false, 0.0, -56.0, 0.0)]
#[case::top_inset(false, 20.0, -56.0, 20.0)]
#[case::bottom(true, 0.0, 667.0, 611.0)]
#[case::bottom_inset(true, 10.0, 667.0, 601.0)]
fn banner_slides_between_edge_frames(
	mut bar: MessageBar<RecordingSurface>,
	#[case] show_at_bottom: bool,
	#[case] offset: f32,
	#[case] hidden_y: f32,
	#[case] rest_y: f32,
) {
	bar.set_show_at_bottom(show_at_bottom);
	bar.set_offset(Some(offset));
	bar.show_message(BannerRequest::info("Info").description("This is information"));

	let entry = surface(&bar).motions()[0];
	assert_eq!(entry.from, Rect::new(0.0, hidden_y, 375.0, 56.0));
	assert_eq!(entry.to, Rect::new(0.0, rest_y, 375.0, 56.0));

	bar.tick(Duration::from_secs(10));
	let exit = surface(&bar).motions()[1];
	assert_eq!(exit.from, entry.to);
	assert_eq!(exit.to, entry.from);
}

#[rstest]
#[case::tap_while_showing(Duration::from_millis(100), DismissReason::Tapped)]
#[case::tap_while_visible(Duration::from_secs(2), DismissReason::Tapped)]
#[case::no_tap(Duration::from_secs(5), DismissReason::TimedOut)]
fn outcome_depends_on_tap_time(mut bar: MessageBar<RecordingSurface>, #[case] tap_after: Duration, #[case] expected: DismissReason) {
	let mut ticket = bar.show_message(BannerRequest::error("Error").description("This is error"));
	bar.tick(tap_after);
	bar.tap();
	bar.tick(Duration::from_secs(5));

	assert_eq!(ticket.state(), TicketState::Dismissed(expected));
	assert_eq!(bar.phase(), Phase::Idle);
}

#[rstest]
#[case::inside(Point::new(10.0, 10.0), true)]
#[case::below(Point::new(10.0, 56.0), false)]
#[case::far_away(Point::new(200.0, 400.0), false)]
fn tap_at_hit_tests_resting_banner(mut bar: MessageBar<RecordingSurface>, #[case] point: Point, #[case] hits: bool) {
	bar.show_message(BannerRequest::success("Success"));
	bar.tick(Duration::from_secs(1));
	assert_eq!(bar.tap_at(point), hits);
}

#[rstest]
fn long_description_grows_banner(mut bar: MessageBar<RecordingSurface>) {
	let text = "Uploading the selected photos failed because the connection was lost midway.";
	bar.show_message(BannerRequest::new(Kind::Error).title("Upload failed").description(text));
	bar.tick(Duration::from_secs(1));

	let frame = bar.current_frame().expect("banner on screen");
	assert!(frame.height > 56.0, "{frame:?}");
	assert_eq!(frame.width, VIEWPORT.width);
}

#[rstest]
fn sample_app_session(mut bar: MessageBar<RecordingSurface>) {
	bar.set_discard_repeated(true);
	let mut rx = bar.subscribe();

	let info = || BannerRequest::info("Info").description("This is information").duration(Duration::from_millis(1500));
	bar.show_message(info());
	bar.show_message(info());
	bar.show_message(BannerRequest::success("Success").description("This is success"));
	bar.tick(Duration::from_millis(500));
	bar.tap();
	bar.tick(Duration::from_secs(10));

	assert_eq!(surface(&bar).attached_titles(), vec!["Info", "Success"]);
	let events: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
	let kinds: Vec<_> = events
		.iter()
		.map(|event| match event {
			BarEvent::Shown { .. } => "shown",
			BarEvent::Dismissed { .. } => "dismissed",
			BarEvent::Discarded { .. } => "discarded",
		})
		.collect();
	assert_eq!(kinds, vec!["shown", "dismissed", "discarded", "shown", "dismissed"]);
}

#[tokio::test]
async fn awaited_outcomes_follow_ticks() {
	let mut bar = MessageBar::with_surface(BarConfig::default(), RecordingSurface::new(VIEWPORT));
	let first = bar.show_message(BannerRequest::info("first"));
	let second = bar.show_message(BannerRequest::info("second"));
	bar.tick(Duration::from_secs(30));

	assert_eq!(first.outcome().await, Some(DismissReason::TimedOut));
	assert_eq!(second.outcome().await, Some(DismissReason::TimedOut));
}

#[derive(Debug, Clone)]
enum Op {
	Show(Kind),
	Tap,
	Dismiss,
	Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		3 => prop::sample::select(Kind::ALL.to_vec()).prop_map(Op::Show),
		1 => Just(Op::Tap),
		1 => Just(Op::Dismiss),
		4 => (0u64..2_000).prop_map(Op::Tick),
	]
}

proptest! {
	#[test]
	fn shown_in_enqueue_order_one_at_a_time(ops in prop::collection::vec(op(), 1..60)) {
		let mut bar = MessageBar::with_surface(BarConfig::default(), RecordingSurface::new(VIEWPORT));
		let mut rx = bar.subscribe();
		let mut enqueued = Vec::new();
		let mut tickets = Vec::new();

		for op in ops {
			match op {
				Op::Show(kind) => {
					let title = enqueued.len().to_string();
					tickets.push(bar.show_message(BannerRequest::new(kind).title(title.clone())));
					enqueued.push(title);
				}
				Op::Tap => {
					bar.tap();
				}
				Op::Dismiss => {
					bar.dismiss_current();
				}
				Op::Tick(ms) => bar.tick(Duration::from_millis(ms)),
			}

			let recorded = surface(&bar);
			let on_screen = recorded.attached_titles().len() - recorded.remove_count();
			prop_assert!(on_screen <= 1);
			prop_assert_eq!(on_screen == 1, bar.is_visible());
			let shown = recorded.attached_titles();
			prop_assert_eq!(&shown[..], &enqueued[..shown.len()]);
		}

		bar.tick(Duration::from_secs(4 * (enqueued.len() as u64 + 1)));
		prop_assert_eq!(surface(&bar).attached_titles(), enqueued);
		prop_assert_eq!(bar.phase(), Phase::Idle);

		for ticket in &mut tickets {
			prop_assert!(matches!(ticket.state(), TicketState::Dismissed(_)));
		}
		let dismissed = std::iter::from_fn(|| rx.try_recv().ok())
			.filter(|event| matches!(event, BarEvent::Dismissed { .. }))
			.count();
		prop_assert_eq!(dismissed, tickets.len());
	}
}
