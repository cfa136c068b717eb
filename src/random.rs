/* src/random.rs */

use crate::error::Error;

#[cfg(feature = "ring")]
mod backend {
	use crate::error::Error;
	use ring::rand::{SecureRandom, SystemRandom};

	pub(super) fn fill(buf: &mut [u8]) -> Result<(), Error> {
		SystemRandom::new().fill(buf).map_err(|_| Error::Random)
	}
}

#[cfg(feature = "aws-lc-rs")]
mod backend {
	use crate::error::Error;
	use aws_lc_rs::rand::{SecureRandom, SystemRandom};

	pub(super) fn fill(buf: &mut [u8]) -> Result<(), Error> {
		SystemRandom::new().fill(buf).map_err(|_| Error::Random)
	}
}

/// Overwrite every byte of `buf` with output of the system CSPRNG.
///
/// # Errors
///
/// Returns [`Error::Random`] if the operating system generator fails.
pub fn random_fill(buf: &mut [u8]) -> Result<(), Error> {
	if buf.is_empty() {
		return Ok(());
	}

	#[cfg(feature = "tracing")]
	tracing::trace!(len = buf.len(), "filling buffer from system random");

	backend::fill(buf)
}

/// Allocate `len` bytes of CSPRNG output.
///
/// # Errors
///
/// Returns [`Error::Random`] if the operating system generator fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, Error> {
	let mut out = vec![0u8; len];
	random_fill(&mut out)?;
	Ok(out)
}
