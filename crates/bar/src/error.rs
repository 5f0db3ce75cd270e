//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`crate::BarConfig`].
///
/// Queue and display operations are infallible and never return these.
#[derive(Debug, Error)]
pub enum BarError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),

	/// A value parsed but is out of range.
	#[error("invalid config: {0}")]
	InvalidConfig(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, BarError>;
