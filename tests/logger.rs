/* tests/logger.rs */

#![cfg(feature = "tracing")]
#![allow(missing_docs)]

use std::io;
use std::sync::{Arc, Mutex};

use compact_util::{Hex, Logger, LoggerConfig, format_bytes};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
	fn contents(&self) -> String {
		String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
	}
}

impl io::Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn captured(f: impl FnOnce()) -> String {
	let capture = Capture::default();
	let writer = capture.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_ansi(false)
		.with_max_level(LevelFilter::TRACE)
		.finish();
	{
		let _guard = subscriber.set_default();
		f();
	}
	capture.contents()
}

fn config(debug: &str) -> LoggerConfig {
	LoggerConfig::from_vars(Some(debug), None)
}

#[test]
fn prefix_is_upper_cased_origin() {
	let l = Logger::with_config("test", &LoggerConfig::default());
	assert_eq!(l.prefix(), "TEST:");
}

#[test]
fn debug_exact_match() {
	assert!(Logger::with_config("test", &config("test")).is_debug_enabled());
}

#[test]
fn debug_partial_match() {
	let l = Logger::with_config("testing", &config("test"));
	assert!(l.is_debug_enabled());
	assert_eq!(l.prefix(), "TESTING:");
}

#[test]
fn debug_wildcard() {
	assert!(Logger::with_config("anything", &config("*")).is_debug_enabled());
	assert!(Logger::with_config("api-ws", &config("api*")).is_debug_enabled());
}

#[test]
fn debug_list_of_patterns() {
	let cfg = config("rpc, test");
	assert!(cfg.debug_enabled("test"));
	assert!(cfg.debug_enabled("rpc-core"));
	assert!(!cfg.debug_enabled("api"));
}

#[test]
fn debug_non_matching() {
	assert!(!Logger::with_config("test", &config("blah")).is_debug_enabled());
}

#[test]
fn debug_unset() {
	let cfg = LoggerConfig::from_vars(None, None);
	assert!(!Logger::with_config("test", &cfg).is_debug_enabled());
	assert_eq!(cfg.max_size(), None);
}

#[test]
fn debug_size_parsing() {
	assert_eq!(LoggerConfig::from_vars(None, Some("10")).max_size(), Some(10));
	assert_eq!(LoggerConfig::from_vars(None, Some("0")).max_size(), None);
	assert_eq!(LoggerConfig::from_vars(None, Some("many")).max_size(), None);
}

#[test]
fn formats_bytes_as_hex() {
	assert_eq!(format_bytes(&[0, 1, 2, 3]), "0x00010203");
	assert_eq!(format_bytes(&[]), "0x");
	assert_eq!(Hex(&[0xab, 0xcd]).to_string(), "0xabcd");
}

#[test]
fn joins_values_with_spaces() {
	let l = Logger::with_config("test", &LoggerConfig::default());
	let big = 12_345_678_900_987_654_321u128;
	let bytes = [0u8, 1, 2, 3];
	assert_eq!(
		l.format_debug(&[&"a", &2, &big, &Hex(&bytes)]),
		"a 2 12345678900987654321 0x00010203"
	);
}

#[test]
fn trims_debug_to_size() {
	let cfg = LoggerConfig::from_vars(Some("test"), Some("10"));
	let l = Logger::with_config("test", &cfg);
	let big = 12_345_678_900_987_654_321u128;
	assert_eq!(l.format_debug(&[&123, &"a", &big]), "123 a 1234…");
}

#[test]
fn trimmed_debug_reaches_subscriber() {
	let cfg = LoggerConfig::from_vars(Some("test"), Some("10"));
	let l = Logger::with_config("test", &cfg);
	let big = 12_345_678_900_987_654_321u128;
	let out = captured(|| l.debug(&[&123, &"a", &big]));
	assert!(out.contains("TEST: 123 a 1234…"));
	assert!(!out.contains("12345678900987654321"));
}

#[test]
fn closure_messages_reach_subscriber() {
	let l = Logger::with_config("test", &LoggerConfig::default());
	let out = captured(|| {
		l.log_with(|| String::from("a function test"));
		l.warn_with(|| format!("{} warned", 2));
		l.error_with(|| String::from("failed lazily"));
	});
	assert!(out.contains("TEST: a function test"));
	assert!(out.contains("TEST: 2 warned"));
	assert!(out.contains("TEST: failed lazily"));
}

#[test]
fn closure_messages_skipped_without_subscriber_interest() {
	let l = Logger::with_config("test", &LoggerConfig::default());
	let subscriber = tracing_subscriber::fmt()
		.with_writer(io::sink)
		.with_max_level(LevelFilter::OFF)
		.finish();
	let _guard = subscriber.set_default();
	let mut called = false;
	l.log_with(|| {
		called = true;
		String::new()
	});
	assert!(!called);
}

#[test]
fn log_levels_reach_subscriber() {
	let l = Logger::with_config("test", &LoggerConfig::default());
	let out = captured(|| {
		l.log(&[&"console.log test"]);
		l.warn(&[&"console.warn test"]);
		l.error(&[&"console.error test"]);
	});
	assert!(out.contains("INFO"));
	assert!(out.contains("TEST: console.log test"));
	assert!(out.contains("WARN"));
	assert!(out.contains("TEST: console.warn test"));
	assert!(out.contains("ERROR"));
	assert!(out.contains("TEST: console.error test"));
}

#[test]
fn debug_emits_when_enabled() {
	let l = Logger::with_config("test", &config("test"));
	let out = captured(|| l.debug(&[&"debug on"]));
	assert!(out.contains("DEBUG"));
	assert!(out.contains("TEST: debug on"));
}

#[test]
fn debug_silent_when_disabled() {
	let l = Logger::with_config("notDebug", &config("test"));
	let out = captured(|| l.debug(&[&"hidden"]));
	assert!(out.is_empty());
}

#[test]
fn debug_with_is_lazy() {
	let l = Logger::with_config("quiet", &LoggerConfig::default());
	let mut called = false;
	l.debug_with(|| {
		called = true;
		String::from("never")
	});
	assert!(!called);

	let l = Logger::with_config("test", &config("test"));
	let out = captured(|| l.debug_with(|| String::from("a function test")));
	assert!(out.contains("TEST: a function test"));
}
