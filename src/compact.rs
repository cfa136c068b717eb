/* src/compact.rs */

use crate::error::Error;

/// Widest big-integer magnitude that fits the `u128` result.
const MAX_BIGINT_BYTES: usize = 16;

/// The four encoding modes of a compact prefix, selected by the two low-order
/// bits of the first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactMode {
	/// `0b00`: the value lives in the upper six bits of one byte.
	Single,
	/// `0b01`: two little-endian bytes, value shifted left by two.
	Two,
	/// `0b10`: four little-endian bytes, value shifted left by two.
	Four,
	/// `0b11`: the upper six bits hold `N - 4`, followed by `N` little-endian
	/// magnitude bytes.
	BigInt,
}

impl CompactMode {
	/// Select the mode encoded in the tag bits of `first`.
	#[must_use]
	pub const fn from_tag(first: u8) -> Self {
		match first & 0b11 {
			0b00 => Self::Single,
			0b01 => Self::Two,
			0b10 => Self::Four,
			_ => Self::BigInt,
		}
	}

	/// Total number of prefix bytes announced by `first`, tag byte included.
	#[must_use]
	pub const fn prefix_len(first: u8) -> usize {
		match Self::from_tag(first) {
			Self::Single => 1,
			Self::Two => 2,
			Self::Four => 4,
			Self::BigInt => 1 + (first >> 2) as usize + 4,
		}
	}
}

/// Decode a compact integer from the start of `buf`.
///
/// Returns the decoded value and the number of prefix bytes consumed (1, 2, 4
/// or `1 + N` in big-integer mode). Non-canonical encodings are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `buf` is empty or shorter than the
/// indicated prefix. Returns [`Error::CompactOverflow`] when a big-integer
/// magnitude has significant bytes beyond the 16th.
pub fn read_compact(buf: &[u8]) -> Result<(u128, usize), Error> {
	let &first = buf.first().ok_or(Error::InvalidInput { need: 1, have: 0 })?;
	let len = CompactMode::prefix_len(first);

	if buf.len() < len {
		return Err(Error::InvalidInput {
			need: len,
			have: buf.len(),
		});
	}

	let val = match CompactMode::from_tag(first) {
		CompactMode::Single => u128::from(first >> 2),
		CompactMode::Two => u128::from(u16::from_le_bytes([buf[0], buf[1]]) >> 2),
		CompactMode::Four => {
			u128::from(u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) >> 2)
		}
		CompactMode::BigInt => read_magnitude(&buf[1..len])?,
	};
	Ok((val, len))
}

fn read_magnitude(bytes: &[u8]) -> Result<u128, Error> {
	#[cfg(feature = "tracing")]
	tracing::trace!(width = bytes.len(), "decoding big-integer compact magnitude");

	// Zero high bytes are tolerated so wide non-canonical encodings still decode.
	if bytes.len() > MAX_BIGINT_BYTES && bytes[MAX_BIGINT_BYTES..].iter().any(|&b| b != 0) {
		return Err(Error::CompactOverflow { bytes: bytes.len() });
	}

	let width = bytes.len().min(MAX_BIGINT_BYTES);
	let mut le = [0u8; MAX_BIGINT_BYTES];
	le[..width].copy_from_slice(&bytes[..width]);
	Ok(u128::from_le_bytes(le))
}

/// Decode a compact length prefix and split it off `input`.
///
/// Returns the decoded value and every byte following the prefix. The
/// remainder borrows from `input` and may be empty.
///
/// # Errors
///
/// Same as [`read_compact`].
pub fn decode_compact(input: &[u8]) -> Result<(u128, &[u8]), Error> {
	let (val, len) = read_compact(input)?;
	Ok((val, &input[len..]))
}

/// Remove a compact length prefix from a length-framed record.
///
/// The prefix is read as the payload length `L`. Returns the total number of
/// bytes the record occupies (prefix plus `L`) and the `L` payload bytes.
/// Bytes after the record are not part of the returned payload.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the prefix is malformed or `input`
/// holds fewer than `L` payload bytes. Returns [`Error::CompactOverflow`]
/// when `L` does not fit `usize`.
pub fn strip_length(input: &[u8]) -> Result<(usize, &[u8]), Error> {
	let (length, offset) = read_compact(input)?;
	let overflow = || Error::CompactOverflow {
		bytes: significant_bytes(length),
	};
	let length = usize::try_from(length).map_err(|_| overflow())?;
	let total = offset.checked_add(length).ok_or_else(overflow)?;

	if input.len() < total {
		return Err(Error::InvalidInput {
			need: total,
			have: input.len(),
		});
	}

	Ok((total, &input[offset..total]))
}

/// Append the canonical (smallest) compact encoding of `value` to `buf`.
pub fn write_compact(buf: &mut Vec<u8>, value: u128) {
	match value {
		0..=0x3f => buf.push((value as u8) << 2),
		0x40..=0x3fff => {
			buf.extend_from_slice(&(((value as u16) << 2) | 0b01).to_le_bytes());
		}
		0x4000..=0x3fff_ffff => {
			buf.extend_from_slice(&(((value as u32) << 2) | 0b10).to_le_bytes());
		}
		_ => {
			let width = bigint_width(value);
			buf.push((((width - 4) as u8) << 2) | 0b11);
			buf.extend_from_slice(&value.to_le_bytes()[..width]);
		}
	}
}

/// Canonical compact encoding of `value`.
#[must_use]
pub fn encode_compact(value: u128) -> Vec<u8> {
	let mut out = Vec::with_capacity(compact_len(value));
	write_compact(&mut out, value);
	out
}

/// Number of bytes [`encode_compact`] produces for `value`.
#[must_use]
pub fn compact_len(value: u128) -> usize {
	match value {
		0..=0x3f => 1,
		0x40..=0x3fff => 2,
		0x4000..=0x3fff_ffff => 4,
		_ => 1 + bigint_width(value),
	}
}

/// Frame `payload` with its compact-encoded length.
#[must_use]
pub fn add_length(payload: &[u8]) -> Vec<u8> {
	let len = payload.len() as u128;
	let mut out = Vec::with_capacity(compact_len(len) + payload.len());
	write_compact(&mut out, len);
	out.extend_from_slice(payload);
	out
}

fn significant_bytes(value: u128) -> usize {
	((128 - value.leading_zeros()) as usize).div_ceil(8)
}

// Big-integer mode never uses fewer than four magnitude bytes.
fn bigint_width(value: u128) -> usize {
	significant_bytes(value).max(4)
}
