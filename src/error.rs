use std::path::PathBuf;

use thiserror::Error;

/// Result type returned by regdoc's fallible entry points.
pub type Result<T> = std::result::Result<T, RegdocError>;

/// Failures surrounding the rendering core.
///
/// Rendering itself never fails; a missing item becomes an error panel on the page instead.
#[derive(Debug, Error)]
pub enum RegdocError {
	/// Reading an input or config file failed.
	#[error("failed to read '{path}': {source}")]
	Io {
		/// File that could not be read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// Doc node or config JSON did not decode.
	#[error("failed to decode {origin}: {source}")]
	Json {
		/// Human-readable description of the input.
		origin: String,
		/// Underlying decode error.
		#[source]
		source: serde_json::Error,
	},

	/// Configuration value was rejected.
	#[error("invalid configuration: {0}")]
	Config(String),
}

impl RegdocError {
	/// Wrap an I/O error with the offending path.
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}

	/// Wrap a decode error with a description of its input.
	pub fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
		Self::Json {
			origin: origin.into(),
			source,
		}
	}
}
