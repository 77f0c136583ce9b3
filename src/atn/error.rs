use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AtnError>;

/// Errors produced while reading, decoding, and encoding action data.
#[derive(Debug, Error)]
pub enum AtnError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Value type tag is not in the registry.
	#[error("unknown value type tag {tag:?} at offset {at}")]
	UnknownTypeTag {
		/// The unrecognized 4-byte tag.
		tag: [u8; 4],
		/// Cursor offset where the tag was read.
		at: usize,
	},
	/// Reference form tag is not in the registry.
	#[error("unknown reference form tag {tag:?} at offset {at}")]
	UnknownReferenceTag {
		/// The unrecognized 4-byte tag.
		tag: [u8; 4],
		/// Cursor offset where the tag was read.
		at: usize,
	},
	/// Lookup miss on a descriptor key.
	#[error("key not found: {key:?}")]
	KeyNotFound {
		/// Requested 4-byte key tag.
		key: [u8; 4],
	},
	/// Length-prefixed string payload was not valid UTF-16.
	#[error("invalid utf-16 string at offset {at}")]
	InvalidString {
		/// Offset of the string length prefix.
		at: usize,
	},
	/// Unsupported action file format revision.
	#[error("unsupported action file version {version} (expected 16)")]
	UnsupportedVersion {
		/// Parsed format version.
		version: i32,
	},
	/// Negative or impossibly large count field.
	#[error("count out of range at offset {at}: {count}")]
	CountOutOfRange {
		/// Offset of the count field.
		at: usize,
		/// Parsed count value.
		count: i64,
	},
	/// Container decode finished with unconsumed bytes.
	#[error("trailing bytes after last action set: {rem} bytes at offset {at}")]
	TrailingBytes {
		/// Offset where decoding finished.
		at: usize,
		/// Unconsumed byte count.
		rem: usize,
	},
	/// Encode-side length or count exceeded the 32-bit wire field.
	#[error("length {len} exceeds 32-bit wire field")]
	LengthOverflow {
		/// Offending length value.
		len: usize,
	},
	/// Host has no action set with the requested name.
	#[error("action set not found: {name}")]
	SetNotFound {
		/// Requested set name.
		name: String,
	},
}
