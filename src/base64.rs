/* src/base64.rs */

use ::base64::Engine as _;
use ::base64::alphabet;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, general_purpose};

use crate::error::Error;

// Padding optional and trailing bits ignored, matching lenient decoders that
// producers of this data commonly use.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	general_purpose::PAD
		.with_decode_padding_mode(DecodePaddingMode::Indifferent)
		.with_decode_allow_trailing_bits(true),
);

/// Check that `value` is well-formed standard-alphabet base64.
///
/// At most two `=` padding characters are allowed, only at the end, and only
/// when they complete the last four-character group. Unpadded input is valid.
///
/// # Errors
///
/// Returns [`Error::InvalidBase64`] describing the first problem found.
pub fn base64_validate(value: &str) -> Result<(), Error> {
	if value.is_empty() {
		return Err(Error::InvalidBase64("empty input".into()));
	}

	let body = value.trim_end_matches('=');
	let padding = value.len() - body.len();
	if padding > 2 {
		return Err(Error::InvalidBase64(format!("{padding} padding characters")));
	}

	if let Some((pos, c)) = body
		.char_indices()
		.find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '+' || c == '/'))
	{
		return Err(Error::InvalidBase64(format!("unexpected {c:?} at offset {pos}")));
	}

	if body.len() % 4 == 1 {
		return Err(Error::InvalidBase64(format!("invalid length {}", body.len())));
	}

	// Padding, when present, must complete the final quantum exactly.
	if padding > 0 && (body.len() + padding) % 4 != 0 {
		return Err(Error::InvalidBase64(format!(
			"{padding} padding characters after {} symbols",
			body.len()
		)));
	}

	Ok(())
}

/// Decode standard base64 text into bytes.
///
/// The input is validated with [`base64_validate`] first; missing padding is
/// accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidBase64`] when validation or decoding fails.
pub fn base64_decode(value: &str) -> Result<Vec<u8>, Error> {
	base64_validate(value)?;
	LENIENT
		.decode(value)
		.map_err(|e| Error::InvalidBase64(e.to_string()))
}
