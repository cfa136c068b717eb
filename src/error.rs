/* src/error.rs */

/// Errors that can occur while decoding compact prefixes and the other byte
/// utilities of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The input buffer is empty or shorter than the selected compact mode
	/// (or the framed payload) requires.
	#[error("invalid input: need at least {need} bytes, have {have}")]
	InvalidInput {
		/// Minimum number of bytes required.
		need: usize,
		/// Actual number of bytes available.
		have: usize,
	},

	/// A big-integer compact prefix is wider than the supported 16 bytes, or
	/// a decoded length does not fit in `usize`.
	#[error("compact value of {bytes} bytes does not fit the target integer")]
	CompactOverflow {
		/// Width in bytes of the encoded magnitude.
		bytes: usize,
	},

	/// The input is not valid standard base64.
	#[error("invalid base64: {0}")]
	InvalidBase64(String),

	/// The system random number generator failed to produce bytes.
	#[error("system random generator failure")]
	Random,
}
