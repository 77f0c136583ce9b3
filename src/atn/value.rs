use std::fmt;

use crate::atn::tag::{Tag, render_tag};
use crate::atn::{AtnError, Result};

/// Runtime value stored under a descriptor key or list slot.
///
/// Each variant corresponds to exactly one value type tag; a value never
/// changes variant after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
	/// Chain of reference steps identifying a target.
	Reference(Reference),
	/// Nested descriptor.
	Descriptor(Descriptor),
	/// Heterogeneous ordered list.
	List(ActionList),
	/// IEEE-754 double.
	Double(f64),
	/// Double qualified by a unit tag (pixels, percent, ...).
	UnitDouble {
		/// Unit tag, for example `#Pxl`.
		unit: Tag,
		/// Numeric value in that unit.
		value: f64,
	},
	/// Unicode string; embedded NUL code units are legal.
	String(String),
	/// Enumerated value.
	Enumerated {
		/// Enumeration type tag.
		enum_type: Tag,
		/// Enumeration value tag.
		value: Tag,
	},
	/// 32-bit signed integer.
	Integer(i32),
	/// 64-bit signed integer.
	LargeInteger(i64),
	/// Boolean flag.
	Boolean(bool),
	/// Class-tagged nested descriptor.
	GlobalObject {
		/// Object class tag.
		class: Tag,
		/// Object payload.
		descriptor: Descriptor,
	},
	/// Bare class tag.
	Class(Tag),
	/// Bare class tag in the global namespace.
	GlobalClass(Tag),
	/// Serialized alias record, kept opaque.
	Alias(Vec<u8>),
	/// Serialized path bytes, kept opaque.
	Path(Vec<u8>),
	/// Opaque raw data payload.
	RawData(Vec<u8>),
	/// List-shaped payload that must re-encode under the `ObAr` tag.
	ObjectArray(ActionList),
}

/// Ordered mapping from 4-byte key tags to typed values.
///
/// Entry order is preserved exactly; re-encoding emits entries in the order
/// they were decoded or inserted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
	/// Class tag identifying the descriptor's semantic kind; may be null.
	pub class: Tag,
	entries: Vec<(Tag, TypedValue)>,
}

impl Descriptor {
	/// Create an empty descriptor with the given class tag.
	pub fn new(class: Tag) -> Self {
		Self { class, entries: Vec::new() }
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the descriptor has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Insert or replace the value under `key`.
	///
	/// Replacing keeps the key's original entry position, so later writes
	/// win on payload without disturbing encode order.
	pub fn put(&mut self, key: Tag, value: TypedValue) {
		if let Some(slot) = self.entries.iter_mut().find(|(item, _)| *item == key) {
			slot.1 = value;
		} else {
			self.entries.push((key, value));
		}
	}

	/// Look up the value stored under `key`.
	pub fn get(&self, key: Tag) -> Result<&TypedValue> {
		self.entries
			.iter()
			.find(|(item, _)| *item == key)
			.map(|(_, value)| value)
			.ok_or(AtnError::KeyNotFound { key })
	}

	/// Whether `key` is present.
	pub fn contains(&self, key: Tag) -> bool {
		self.entries.iter().any(|(item, _)| *item == key)
	}

	/// Iterate entries in stored order.
	pub fn entries(&self) -> impl Iterator<Item = (Tag, &TypedValue)> {
		self.entries.iter().map(|(key, value)| (*key, value))
	}
}

/// Construction helper for callers assembling a command descriptor.
pub fn build_descriptor(class: Tag, entries: impl IntoIterator<Item = (Tag, TypedValue)>) -> Descriptor {
	let mut desc = Descriptor::new(class);
	for (key, value) in entries {
		desc.put(key, value);
	}
	desc
}

/// Ordered heterogeneous sequence of typed values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionList {
	items: Vec<TypedValue>,
}

impl ActionList {
	/// Create an empty list.
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list is empty.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Append a value.
	pub fn push(&mut self, value: TypedValue) {
		self.items.push(value);
	}

	/// Element at `index`, if present.
	pub fn get(&self, index: usize) -> Option<&TypedValue> {
		self.items.get(index)
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> impl Iterator<Item = &TypedValue> {
		self.items.iter()
	}
}

impl FromIterator<TypedValue> for ActionList {
	fn from_iter<T: IntoIterator<Item = TypedValue>>(iter: T) -> Self {
		Self { items: iter.into_iter().collect() }
	}
}

/// Ordered chain of reference steps; zero steps is legal and means the
/// target descriptor itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
	steps: Vec<ReferenceStep>,
}

impl Reference {
	/// Create an empty reference.
	pub fn new() -> Self {
		Self { steps: Vec::new() }
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether the reference has no steps.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Append a step.
	pub fn push(&mut self, step: ReferenceStep) {
		self.steps.push(step);
	}

	/// Iterate steps in stored order.
	pub fn steps(&self) -> impl Iterator<Item = &ReferenceStep> {
		self.steps.iter()
	}
}

impl FromIterator<ReferenceStep> for Reference {
	fn from_iter<T: IntoIterator<Item = ReferenceStep>>(iter: T) -> Self {
		Self { steps: iter.into_iter().collect() }
	}
}

/// One step in a reference chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceStep {
	/// Property key on a class.
	Property {
		/// Target class tag.
		class: Tag,
		/// Property key tag.
		key: Tag,
	},
	/// Bare class reference.
	Class {
		/// Target class tag.
		class: Tag,
	},
	/// Enumerated value on a class.
	Enumerated {
		/// Target class tag.
		class: Tag,
		/// Enumeration type tag.
		enum_type: Tag,
		/// Enumeration value tag.
		value: Tag,
	},
	/// Signed index offset relative to the target.
	Offset {
		/// Target class tag.
		class: Tag,
		/// Signed offset.
		offset: i32,
	},
	/// Element by unique identifier.
	Identifier {
		/// Target class tag.
		class: Tag,
		/// Identifier value.
		id: u32,
	},
	/// Element by absolute index.
	Index {
		/// Target class tag.
		class: Tag,
		/// One-based element index.
		index: u32,
	},
	/// Element by name.
	Name {
		/// Target class tag.
		class: Tag,
		/// Element name.
		name: String,
	},
}

impl fmt::Display for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{{", render_tag(self.class))?;
		for (index, (key, value)) in self.entries().enumerate() {
			if index > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}: {}", render_tag(key), value)?;
		}
		write!(f, "}}")
	}
}

impl fmt::Display for ActionList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (index, item) in self.iter().enumerate() {
			if index > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{item}")?;
		}
		write!(f, "]")
	}
}

impl fmt::Display for Reference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ref(")?;
		for (index, step) in self.steps().enumerate() {
			if index > 0 {
				write!(f, " / ")?;
			}
			write!(f, "{step}")?;
		}
		write!(f, ")")
	}
}

impl fmt::Display for ReferenceStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Property { class, key } => write!(f, "prop {}.{}", render_tag(*class), render_tag(*key)),
			Self::Class { class } => write!(f, "class {}", render_tag(*class)),
			Self::Enumerated { class, enum_type, value } => {
				write!(f, "enum {}.{}={}", render_tag(*class), render_tag(*enum_type), render_tag(*value))
			}
			Self::Offset { class, offset } => write!(f, "offset {}{:+}", render_tag(*class), offset),
			Self::Identifier { class, id } => write!(f, "id {}#{}", render_tag(*class), id),
			Self::Index { class, index } => write!(f, "index {}[{}]", render_tag(*class), index),
			Self::Name { class, name } => write!(f, "name {}\"{}\"", render_tag(*class), name),
		}
	}
}

impl fmt::Display for TypedValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Reference(reference) => write!(f, "{reference}"),
			Self::Descriptor(descriptor) => write!(f, "{descriptor}"),
			Self::List(list) => write!(f, "{list}"),
			Self::Double(value) => write!(f, "{value}"),
			Self::UnitDouble { unit, value } => write!(f, "{value} {}", render_tag(*unit)),
			Self::String(text) => write!(f, "\"{text}\""),
			Self::Enumerated { enum_type, value } => {
				write!(f, "{}.{}", render_tag(*enum_type), render_tag(*value))
			}
			Self::Integer(value) => write!(f, "{value}"),
			Self::LargeInteger(value) => write!(f, "{value}L"),
			Self::Boolean(value) => write!(f, "{value}"),
			Self::GlobalObject { class, descriptor } => {
				write!(f, "global {} {}", render_tag(*class), descriptor)
			}
			Self::Class(class) => write!(f, "class {}", render_tag(*class)),
			Self::GlobalClass(class) => write!(f, "global class {}", render_tag(*class)),
			Self::Alias(bytes) => write!(f, "alias({} bytes)", bytes.len()),
			Self::Path(bytes) => write!(f, "path({} bytes)", bytes.len()),
			Self::RawData(bytes) => write!(f, "raw({} bytes)", bytes.len()),
			Self::ObjectArray(list) => write!(f, "objarray {list}"),
		}
	}
}

#[cfg(test)]
mod tests;
