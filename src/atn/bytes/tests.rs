use crate::atn::bytes::{Cursor, Writer};
use crate::atn::AtnError;

#[test]
fn reads_big_endian_scalars() {
	let mut writer = Writer::new();
	writer.write_u32_be(0x0102_0304);
	writer.write_i32_be(-7);
	writer.write_i64_be(-1_234_567_890_123);
	writer.write_f64_be(6.25);
	let bytes = writer.into_bytes();

	assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u32_be().expect("u32 reads"), 0x0102_0304);
	assert_eq!(cursor.read_i32_be().expect("i32 reads"), -7);
	assert_eq!(cursor.read_i64_be().expect("i64 reads"), -1_234_567_890_123);
	assert_eq!(cursor.read_f64_be().expect("f64 reads"), 6.25);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn preserves_f64_bit_patterns() {
	let mut writer = Writer::new();
	writer.write_f64_be(-0.0);
	let bytes = writer.into_bytes();

	let mut cursor = Cursor::new(&bytes);
	let value = cursor.read_f64_be().expect("f64 reads");
	assert_eq!(value.to_bits(), (-0.0_f64).to_bits());
}

#[test]
fn short_read_reports_offset_and_need() {
	let mut cursor = Cursor::new(&[0, 0, 0]);
	cursor.read_exact(2).expect("within bounds");

	let err = cursor.read_u32_be().expect_err("past end should fail");
	assert!(matches!(err, AtnError::UnexpectedEof { at: 2, need: 4, rem: 1 }));
}

#[test]
fn unicode_string_keeps_nul_and_non_ascii_units() {
	let text = "Gr\u{fc}n\0\u{2603}";

	let mut writer = Writer::new();
	writer.write_unicode_string(text).expect("string writes");
	let bytes = writer.into_bytes();

	// Count prefix holds UTF-16 code units, not UTF-8 bytes.
	assert_eq!(&bytes[0..4], &[0, 0, 0, 6]);

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_unicode_string().expect("string reads"), text);
}

#[test]
fn unicode_string_counts_surrogate_pairs() {
	let text = "\u{1f5bc}";

	let mut writer = Writer::new();
	writer.write_unicode_string(text).expect("string writes");
	let bytes = writer.into_bytes();

	assert_eq!(&bytes[0..4], &[0, 0, 0, 2]);
	assert_eq!(bytes.len(), 8);

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_unicode_string().expect("string reads"), text);
}

#[test]
fn unpaired_surrogate_fails_as_invalid_string() {
	// One code unit, value 0xd800: a lone high surrogate.
	let bytes = [0, 0, 0, 1, 0xd8, 0x00];
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.read_unicode_string().expect_err("lone surrogate should fail");
	assert!(matches!(err, AtnError::InvalidString { at: 0 }));
}

#[test]
fn negative_count_is_rejected_before_reading_payload() {
	let bytes = [0xff, 0xff, 0xff, 0xff];
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.read_count().expect_err("negative count should fail");
	assert!(matches!(err, AtnError::CountOutOfRange { at: 0, count: -1 }));
}

#[test]
fn raw_bytes_pass_through_unprefixed() {
	let mut writer = Writer::new();
	writer.write_bytes(b"8BIM");
	writer.write_u8(0x2a);
	let bytes = writer.into_bytes();

	assert_eq!(bytes, b"8BIM\x2a");

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_exact(4).expect("raw read"), b"8BIM");
	assert_eq!(cursor.read_u8().expect("byte reads"), 0x2a);
}

#[test]
fn data_block_copies_bytes_out_of_the_input() {
	let payload = vec![0_u8, 1, 2, 254, 255];

	let mut writer = Writer::new();
	writer.write_data_block(&payload).expect("block writes");
	let bytes = writer.into_bytes();

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_data_block().expect("block reads"), payload);
}
