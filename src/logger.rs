//! Tracing subscriber setup for the command line.
//!
//! Library code only emits `tracing` events; installing a subscriber is left to the binary.
//! Logs go to stderr so rendered pages can be piped from stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither a flag nor `RUST_LOG` says otherwise.
pub const DEFAULT_FILTER: &str = "regdoc=info";

/// Pick the event filter for the given verbosity flags.
///
/// `verbose` wins over `quiet`; without either, `RUST_LOG` is honoured before the default.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
	if verbose {
		EnvFilter::new("regdoc=debug")
	} else if quiet {
		EnvFilter::new("regdoc=error")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
	}
}

/// Install the global subscriber. Call once, before any event is emitted.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_level(true)
		.with_ansi(!no_color && should_use_colors())
		.compact();

	tracing_subscriber::registry()
		.with(filter_for(verbose, quiet))
		.with(fmt_layer)
		.init();
}

/// Colours are off when `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
	std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flags_select_filters() {
		assert_eq!(filter_for(true, true).to_string(), "regdoc=debug");
		assert_eq!(filter_for(false, true).to_string(), "regdoc=error");
	}
}
