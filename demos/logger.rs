/* demos/logger.rs */

#![allow(missing_docs)]

// Run with `DEBUG=demo DEBUG_SIZE=40 cargo run --example logger` to see the
// trimmed debug line.

use compact_util::{Hex, Logger};

fn main() {
	tracing_subscriber::fmt()
		.with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
		.init();

	let log = Logger::new("demo");
	let framed = compact_util::add_length(b"payload");

	log.log(&[&"framed", &framed.len(), &"bytes"]);
	log.debug(&[&"framed bytes", &Hex(&framed)]);
	log.debug_with(|| format!("debug enabled: {}", log.is_debug_enabled()));

	if let Err(e) = compact_util::decode_compact(&framed[..0]) {
		log.warn(&[&"expected failure:", &e]);
	}
}
