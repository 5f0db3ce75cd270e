use std::str::FromStr;
use std::time::Duration;

use msgbar::{BannerRequest, Kind, MessageBar, PresentationSurface};
use tracing::info;

/// One line of demo input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	/// Show a preset banner, optionally retitled.
	Show { kind: Kind, title: Option<String> },
	Tap,
	Dismiss,
	Hide,
	ToggleBottom,
	ToggleDedup,
	Status,
	Quit,
}

impl FromStr for Command {
	type Err = String;

	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let line = line.trim();
		let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
		let rest = rest.trim();

		if let Ok(kind) = word.parse::<Kind>() {
			let title = (!rest.is_empty()).then(|| rest.to_string());
			return Ok(Command::Show { kind, title });
		}
		if !rest.is_empty() {
			return Err(format!("`{word}` takes no arguments"));
		}
		match word.to_ascii_lowercase().as_str() {
			"tap" => Ok(Command::Tap),
			"dismiss" => Ok(Command::Dismiss),
			"hide" => Ok(Command::Hide),
			"bottom" => Ok(Command::ToggleBottom),
			"dedup" => Ok(Command::ToggleDedup),
			"status" => Ok(Command::Status),
			"quit" | "exit" => Ok(Command::Quit),
			other => Err(format!("unknown command `{other}`")),
		}
	}
}

/// Banner the sample buttons show for `kind`.
pub fn preset(kind: Kind) -> BannerRequest {
	match kind {
		Kind::Info => BannerRequest::info("Info")
			.description("This is information")
			.duration(Duration::from_millis(1500)),
		Kind::Success => BannerRequest::success("Success").description("This is success"),
		Kind::Error => BannerRequest::error("Error").description("This is error"),
	}
}

impl Command {
	pub fn apply<S: PresentationSurface>(self, bar: &mut MessageBar<S>) {
		match self {
			Command::Show { kind, title } => {
				let mut request = preset(kind);
				if let Some(title) = title {
					request = request.title(title);
				}
				bar.show_message(request);
			}
			Command::Tap => {
				if !bar.tap() {
					info!("nothing to tap");
				}
			}
			Command::Dismiss => {
				if !bar.dismiss_current() {
					info!("nothing to dismiss");
				}
			}
			Command::Hide => bar.hide_all(),
			Command::ToggleBottom => {
				let bottom = !bar.config().show_at_bottom;
				bar.set_show_at_bottom(bottom);
				info!(show_at_bottom = bottom, "edge toggled");
			}
			Command::ToggleDedup => {
				let discard = !bar.config().discard_repeated;
				bar.set_discard_repeated(discard);
				info!(discard_repeated = discard, "repeat discarding toggled");
			}
			Command::Status => {
				let current = bar.current().map(|(id, request)| format!("{id} {}", request.title.as_deref().unwrap_or("")));
				info!(
					phase = ?bar.phase(),
					current = current.as_deref().unwrap_or("-"),
					queued = bar.queued_len(),
					show_at_bottom = bar.config().show_at_bottom,
					discard_repeated = bar.config().discard_repeated,
					"status"
				);
			}
			Command::Quit => {}
		}
	}
}
