/* src/logger.rs */

use std::env;
use std::fmt;

/// Environment variable listing the origins whose debug output is enabled.
pub const DEBUG_VAR: &str = "DEBUG";

/// Environment variable capping the length of debug messages.
pub const DEBUG_SIZE_VAR: &str = "DEBUG_SIZE";

/// Debug gating and trimming settings shared by every [`Logger`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
	patterns: Vec<String>,
	max_size: Option<usize>,
}

impl LoggerConfig {
	/// Read `DEBUG` and `DEBUG_SIZE` from the process environment.
	#[must_use]
	pub fn from_env() -> Self {
		let debug = env::var(DEBUG_VAR).ok();
		let size = env::var(DEBUG_SIZE_VAR).ok();
		Self::from_vars(debug.as_deref(), size.as_deref())
	}

	/// Build a config from raw variable values.
	///
	/// `debug` is a comma-separated list of origin patterns; `*` matches every
	/// origin and any other pattern matches origins starting with it. `size`
	/// must be a positive integer to take effect.
	#[must_use]
	pub fn from_vars(debug: Option<&str>, size: Option<&str>) -> Self {
		let patterns = debug
			.unwrap_or_default()
			.split(',')
			.map(|p| p.trim().to_ascii_lowercase())
			.filter(|p| !p.is_empty())
			.collect();
		let max_size = size
			.and_then(|s| s.trim().parse::<usize>().ok())
			.filter(|&n| n > 0);

		Self { patterns, max_size }
	}

	/// Whether debug output is enabled for `origin`.
	#[must_use]
	pub fn debug_enabled(&self, origin: &str) -> bool {
		let origin = origin.to_ascii_lowercase();
		self.patterns.iter().any(|p| {
			let p = p.strip_suffix('*').unwrap_or(p.as_str());
			p.is_empty() || origin.starts_with(p)
		})
	}

	/// Maximum number of characters kept in a debug message.
	#[must_use]
	pub fn max_size(&self) -> Option<usize> {
		self.max_size
	}
}

/// Renders a byte slice as `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("0x")?;
		for b in self.0 {
			write!(f, "{b:02x}")?;
		}
		Ok(())
	}
}

/// Format `bytes` as `0x`-prefixed lowercase hex.
#[must_use]
pub fn format_bytes(bytes: &[u8]) -> String {
	Hex(bytes).to_string()
}

/// Leveled logger tagged with an upper-cased origin prefix.
///
/// `log`, `warn` and `error` always emit. `debug` emits only when the
/// configured `DEBUG` patterns match the origin. Events go through `tracing`,
/// so timestamps and output targets come from the installed subscriber.
#[derive(Debug, Clone)]
pub struct Logger {
	origin: String,
	prefix: String,
	debug: bool,
	max_size: Option<usize>,
}

impl Logger {
	/// Create a logger for `origin`, configured from the environment.
	#[must_use]
	pub fn new(origin: &str) -> Self {
		Self::with_config(origin, &LoggerConfig::from_env())
	}

	/// Create a logger for `origin` with an explicit configuration.
	#[must_use]
	pub fn with_config(origin: &str, config: &LoggerConfig) -> Self {
		Self {
			origin: origin.to_owned(),
			prefix: format!("{}:", origin.to_uppercase()),
			debug: config.debug_enabled(origin),
			max_size: config.max_size(),
		}
	}

	/// The `ORIGIN:` prefix written before every message.
	#[must_use]
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Whether [`Logger::debug`] produces output.
	#[must_use]
	pub fn is_debug_enabled(&self) -> bool {
		self.debug
	}

	/// Emit an informational message.
	pub fn log(&self, args: &[&dyn fmt::Display]) {
		let message = join(args);
		tracing::info!(origin = %self.origin, "{} {message}", self.prefix);
	}

	/// Emit a warning.
	pub fn warn(&self, args: &[&dyn fmt::Display]) {
		let message = join(args);
		tracing::warn!(origin = %self.origin, "{} {message}", self.prefix);
	}

	/// Emit an error.
	pub fn error(&self, args: &[&dyn fmt::Display]) {
		let message = join(args);
		tracing::error!(origin = %self.origin, "{} {message}", self.prefix);
	}

	/// Like [`Logger::log`], building the message from a closure.
	pub fn log_with<F>(&self, message: F)
	where
		F: FnOnce() -> String,
	{
		if tracing::enabled!(tracing::Level::INFO) {
			self.log(&[&message()]);
		}
	}

	/// Like [`Logger::warn`], building the message from a closure.
	pub fn warn_with<F>(&self, message: F)
	where
		F: FnOnce() -> String,
	{
		if tracing::enabled!(tracing::Level::WARN) {
			self.warn(&[&message()]);
		}
	}

	/// Like [`Logger::error`], building the message from a closure.
	pub fn error_with<F>(&self, message: F)
	where
		F: FnOnce() -> String,
	{
		if tracing::enabled!(tracing::Level::ERROR) {
			self.error(&[&message()]);
		}
	}

	/// Emit a debug message if enabled for this origin.
	pub fn debug(&self, args: &[&dyn fmt::Display]) {
		if self.debug {
			self.emit_debug(join(args));
		}
	}

	/// Like [`Logger::debug`], building the message only when enabled.
	pub fn debug_with<F>(&self, message: F)
	where
		F: FnOnce() -> String,
	{
		if self.debug {
			self.emit_debug(message());
		}
	}

	/// Format a debug message the way [`Logger::debug`] would, trimming it to
	/// the configured `DEBUG_SIZE`.
	#[must_use]
	pub fn format_debug(&self, args: &[&dyn fmt::Display]) -> String {
		self.trim(join(args))
	}

	fn emit_debug(&self, message: String) {
		let message = self.trim(message);
		tracing::debug!(origin = %self.origin, "{} {message}", self.prefix);
	}

	fn trim(&self, message: String) -> String {
		match self.max_size {
			Some(max) if message.chars().count() > max => {
				let mut out: String = message.chars().take(max).collect();
				out.push('…');
				out
			}
			_ => message,
		}
	}
}

fn join(args: &[&dyn fmt::Display]) -> String {
	args
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}
