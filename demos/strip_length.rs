/* demos/strip_length.rs */

#![allow(missing_docs)]

// Walks a buffer of length-framed records, the way SCALE-encoded vectors of
// byte strings are laid out, and prints each payload.

fn main() {
	let mut buf = Vec::new();
	for payload in [&b"alice"[..], &[0u8; 70][..], &[]] {
		buf.extend_from_slice(&compact_util::add_length(payload));
	}

	let mut cursor = &buf[..];
	while !cursor.is_empty() {
		match compact_util::strip_length(cursor) {
			Ok((total, payload)) => {
				println!(
					"record: prefix {} bytes, payload {} bytes: {}",
					total - payload.len(),
					payload.len(),
					hex(payload)
				);
				cursor = &cursor[total..];
			}
			Err(e) => {
				eprintln!("decode error: {e}");
				return;
			}
		}
	}

	// A bare compact value followed by unrelated bytes.
	match compact_util::decode_compact(&[0x03, 0x78, 0x56, 0x34, 0x12, 0xff]) {
		Ok((value, rest)) => println!("value {value:#x}, {} trailing byte(s)", rest.len()),
		Err(e) => eprintln!("decode error: {e}"),
	}
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{b:02x}")).collect()
}
