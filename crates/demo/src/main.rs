//! Interactive message bar demo.
//!
//! Reads one command per line from stdin and drives a [`MessageBar`] on a
//! console surface that logs what a real surface would draw.

mod command;
mod console;

use std::path::PathBuf;

use clap::Parser;
use msgbar::geometry::Size;
use msgbar::{BarConfig, BarEvent, MessageBar};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, Instant, MissedTickBehavior};
use tracing::{info, trace, warn};

use crate::command::Command;
use crate::console::ConsoleSurface;

/// Redraw cadence while a banner is on screen.
const FRAME: Duration = Duration::from_millis(16);

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "msgbar-demo")]
#[command(about = "Show, tap and dismiss message bar banners from the terminal")]
struct Args {
	/// Config file path
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Slide banners in from the bottom edge
	#[arg(long)]
	bottom: bool,

	/// Collapse consecutive identical banners
	#[arg(long)]
	discard_repeated: bool,

	/// Viewport width in points
	#[arg(long, default_value_t = 375.0)]
	width: f32,

	/// Viewport height in points
	#[arg(long, default_value_t = 667.0)]
	height: f32,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;

	let mut config = load_config(args.config)?;
	config.show_at_bottom |= args.bottom;
	config.discard_repeated |= args.discard_repeated;

	let viewport = Size::new(args.width, args.height);
	let mut bar = MessageBar::new(config, move || ConsoleSurface::new(viewport));
	let mut events = bar.subscribe();

	info!("commands: info|error|success [title], tap, dismiss, hide, bottom, dedup, status, quit");

	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut frames = tokio::time::interval(FRAME);
	frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
	let mut last = Instant::now();

	loop {
		let animating = bar.phase().is_occupied();
		tokio::select! {
			line = lines.next_line() => {
				advance(&mut bar, &mut last);
				let Some(line) = line? else {
					break;
				};
				if line.trim().is_empty() {
					continue;
				}
				match line.parse::<Command>() {
					Ok(Command::Quit) => break,
					Ok(command) => command.apply(&mut bar),
					Err(error) => warn!(%error, "unrecognized command"),
				}
			}
			_ = frames.tick(), if animating => {
				advance(&mut bar, &mut last);
				if let Some(frame) = bar.current_frame() {
					trace!(y = frame.y, phase = ?bar.phase(), "frame");
				}
			}
			Some(event) = events.recv() => report(event),
		}
	}

	bar.hide_all();
	info!("bye");
	Ok(())
}

/// Feeds wall-clock time since the last call into the bar.
fn advance(bar: &mut MessageBar<ConsoleSurface>, last: &mut Instant) {
	let now = Instant::now();
	bar.tick(now.duration_since(*last));
	*last = now;
}

fn report(event: BarEvent) {
	match event {
		BarEvent::Shown { id } => info!(banner = %id, "shown"),
		BarEvent::Dismissed { id, reason } => info!(banner = %id, ?reason, "dismissed"),
		BarEvent::Discarded { id, cause } => info!(banner = %id, ?cause, "discarded"),
	}
}

/// Loads `path`, or `$XDG_CONFIG_HOME/msgbar/config.toml` when it exists.
fn load_config(path: Option<PathBuf>) -> msgbar::Result<BarConfig> {
	if let Some(path) = path {
		info!(path = %path.display(), "loading config");
		return BarConfig::load(path);
	}

	match dirs::config_dir().map(|dir| dir.join("msgbar").join("config.toml")) {
		Some(path) if path.is_file() => {
			info!(path = %path.display(), "loading config");
			BarConfig::load(path)
		}
		_ => Ok(BarConfig::default()),
	}
}
