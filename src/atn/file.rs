use std::fs;
use std::path::Path;

use crate::atn::bytes::{Cursor, Writer};
use crate::atn::codec::{read_descriptor, write_descriptor};
use crate::atn::value::Descriptor;
use crate::atn::{AtnError, Result};

/// Top-level action file: format version plus owned action sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFile {
	/// Format revision; always [`ActionFile::VERSION`] for files this crate
	/// accepts.
	pub version: i32,
	/// Action sets in file order.
	pub sets: Vec<ActionSet>,
}

/// Named collection of actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSet {
	/// Set name shown in the host's actions panel.
	pub name: String,
	/// Actions in recorded order.
	pub actions: Vec<Action>,
}

/// Named ordered sequence of recorded command steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
	/// Action name.
	pub name: String,
	/// Steps in recorded order.
	pub steps: Vec<ActionStep>,
}

/// One recorded command: its descriptor plus panel metadata flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionStep {
	/// Command parameters.
	pub descriptor: Descriptor,
	/// Whether the step runs during playback.
	pub enabled: bool,
	/// Whether the step is expanded in the panel.
	pub expanded: bool,
}

impl ActionFile {
	/// Format revision of the descriptor-based action file layout.
	pub const VERSION: i32 = 16;

	/// Create an empty file at the current format revision.
	pub fn new() -> Self {
		Self {
			version: Self::VERSION,
			sets: Vec::new(),
		}
	}

	/// Decode a complete action file from `bytes`.
	///
	/// The whole buffer must be consumed; leftover bytes after the last set
	/// fail with [`AtnError::TrailingBytes`].
	pub fn decode(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);

		let version = cursor.read_i32_be()?;
		if version != Self::VERSION {
			return Err(AtnError::UnsupportedVersion { version });
		}

		let set_count = cursor.read_count()?;
		let mut sets = Vec::with_capacity(set_count.min(1024));
		for _ in 0..set_count {
			sets.push(read_set(&mut cursor)?);
		}

		if cursor.remaining() > 0 {
			return Err(AtnError::TrailingBytes {
				at: cursor.pos(),
				rem: cursor.remaining(),
			});
		}

		Ok(Self { version, sets })
	}

	/// Encode the file to a fresh byte buffer.
	///
	/// Encoding is all-or-nothing: on failure no bytes are produced.
	pub fn encode(&self) -> Result<Vec<u8>> {
		let mut writer = Writer::new();
		writer.write_i32_be(self.version);
		writer.write_count(self.sets.len())?;
		for set in &self.sets {
			write_set(&mut writer, set)?;
		}
		Ok(writer.into_bytes())
	}

	/// Read and decode an action file from storage.
	pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::decode(&raw)
	}

	/// Encode and write the file to storage.
	///
	/// The file is only touched after encoding succeeds in memory, so encode
	/// failures never leave partial output behind.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
		let bytes = self.encode()?;
		fs::write(path, bytes)?;
		Ok(())
	}

	/// Total number of actions across all sets.
	pub fn action_count(&self) -> usize {
		self.sets.iter().map(|set| set.actions.len()).sum()
	}

	/// Total number of steps across all sets and actions.
	pub fn step_count(&self) -> usize {
		self.sets
			.iter()
			.flat_map(|set| set.actions.iter())
			.map(|action| action.steps.len())
			.sum()
	}
}

impl Default for ActionFile {
	fn default() -> Self {
		Self::new()
	}
}

fn read_set(cursor: &mut Cursor<'_>) -> Result<ActionSet> {
	let name = cursor.read_unicode_string()?;
	let action_count = cursor.read_count()?;
	let mut actions = Vec::with_capacity(action_count.min(1024));
	for _ in 0..action_count {
		actions.push(read_action(cursor)?);
	}
	Ok(ActionSet { name, actions })
}

fn write_set(writer: &mut Writer, set: &ActionSet) -> Result<()> {
	writer.write_unicode_string(&set.name)?;
	writer.write_count(set.actions.len())?;
	for action in &set.actions {
		write_action(writer, action)?;
	}
	Ok(())
}

fn read_action(cursor: &mut Cursor<'_>) -> Result<Action> {
	let name = cursor.read_unicode_string()?;
	let step_count = cursor.read_count()?;
	let mut steps = Vec::with_capacity(step_count.min(1024));
	for _ in 0..step_count {
		let descriptor = read_descriptor(cursor)?;
		let enabled = cursor.read_u8()? != 0;
		let expanded = cursor.read_u8()? != 0;
		steps.push(ActionStep {
			descriptor,
			enabled,
			expanded,
		});
	}
	Ok(Action { name, steps })
}

fn write_action(writer: &mut Writer, action: &Action) -> Result<()> {
	writer.write_unicode_string(&action.name)?;
	writer.write_count(action.steps.len())?;
	for step in &action.steps {
		write_descriptor(writer, &step.descriptor)?;
		writer.write_u8(u8::from(step.enabled));
		writer.write_u8(u8::from(step.expanded));
	}
	Ok(())
}

/// Boundary to the running host application that executes descriptors and
/// stores live action sets. Implemented outside this crate.
pub trait HostBridge {
	/// Fetch the host's action set named `name`.
	///
	/// Fails with [`AtnError::SetNotFound`] when the host has no such set.
	fn load_action_set(&self, name: &str) -> Result<ActionSet>;

	/// Install `set` into the host, replacing any set with the same name.
	fn install_action_set(&self, set: &ActionSet) -> Result<()>;
}
