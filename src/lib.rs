/* src/lib.rs */

//! SCALE compact length-prefix codec with a few companion byte utilities.
//!
//! **Compact codec** (always available): decode the variable-length compact
//! integer that frames SCALE-encoded records, split it off a buffer, and
//! produce canonical encodings for the reverse direction.
//!
//! **Base64** (always available): validate and decode standard base64 text.
//!
//! **Random** (requires `ring` or `aws-lc-rs` feature): fill buffers from the
//! system CSPRNG.
//!
//! **Logger** (requires `tracing` feature): origin-prefixed leveled logging
//! whose debug output is gated by the `DEBUG` environment variable.

#[cfg(all(feature = "ring", feature = "aws-lc-rs"))]
compile_error!(
	"features `ring` and `aws-lc-rs` are mutually exclusive; enable only one crypto backend"
);

mod base64;
mod compact;
mod error;

#[cfg(any(feature = "ring", feature = "aws-lc-rs"))]
mod random;

#[cfg(feature = "tracing")]
mod logger;

pub use self::base64::{base64_decode, base64_validate};
pub use compact::{
	CompactMode, add_length, compact_len, decode_compact, encode_compact, read_compact, strip_length,
	write_compact,
};
pub use error::Error;

#[cfg(any(feature = "ring", feature = "aws-lc-rs"))]
pub use random::{random_bytes, random_fill};

#[cfg(feature = "tracing")]
pub use logger::{DEBUG_SIZE_VAR, DEBUG_VAR, Hex, Logger, LoggerConfig, format_bytes};
