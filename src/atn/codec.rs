use crate::atn::bytes::{Cursor, Writer};
use crate::atn::tag::{self, RefForm, ValueKind};
use crate::atn::value::{ActionList, Descriptor, Reference, ReferenceStep, TypedValue};
use crate::atn::{AtnError, Result};

/// Decode one descriptor starting at `offset`.
///
/// Returns the descriptor and the offset of the first byte after it.
pub fn decode_descriptor_at(bytes: &[u8], offset: usize) -> Result<(Descriptor, usize)> {
	let mut cursor = Cursor::at(bytes, offset);
	let descriptor = read_descriptor(&mut cursor)?;
	Ok((descriptor, cursor.pos()))
}

/// Encode one descriptor to a fresh byte buffer.
///
/// Byte-exact inverse of [`decode_descriptor_at`] for any descriptor that
/// decoding produced.
pub fn encode_descriptor(descriptor: &Descriptor) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	write_descriptor(&mut writer, descriptor)?;
	Ok(writer.into_bytes())
}

/// Decode a descriptor from the cursor's current position.
pub(crate) fn read_descriptor(cursor: &mut Cursor<'_>) -> Result<Descriptor> {
	let class = cursor.read_tag()?;
	let count = cursor.read_count()?;

	let mut descriptor = Descriptor::new(class);
	for _ in 0..count {
		let key = cursor.read_tag()?;
		let value = read_value(cursor)?;
		descriptor.put(key, value);
	}
	Ok(descriptor)
}

/// Encode a descriptor at the writer's current position.
pub(crate) fn write_descriptor(writer: &mut Writer, descriptor: &Descriptor) -> Result<()> {
	writer.write_tag(descriptor.class);
	writer.write_count(descriptor.len())?;
	for (key, value) in descriptor.entries() {
		writer.write_tag(key);
		write_value(writer, value)?;
	}
	Ok(())
}

fn read_value(cursor: &mut Cursor<'_>) -> Result<TypedValue> {
	let at = cursor.pos();
	let raw = cursor.read_tag()?;
	let kind = tag::value_kind(raw).ok_or(AtnError::UnknownTypeTag { tag: raw, at })?;

	Ok(match kind {
		ValueKind::Reference => TypedValue::Reference(read_reference(cursor)?),
		ValueKind::Descriptor => TypedValue::Descriptor(read_descriptor(cursor)?),
		ValueKind::List => TypedValue::List(read_list(cursor)?),
		ValueKind::Double => TypedValue::Double(cursor.read_f64_be()?),
		ValueKind::UnitDouble => {
			let unit = cursor.read_tag()?;
			let value = cursor.read_f64_be()?;
			TypedValue::UnitDouble { unit, value }
		}
		ValueKind::String => TypedValue::String(cursor.read_unicode_string()?),
		ValueKind::Enumerated => {
			let enum_type = cursor.read_tag()?;
			let value = cursor.read_tag()?;
			TypedValue::Enumerated { enum_type, value }
		}
		ValueKind::Integer => TypedValue::Integer(cursor.read_i32_be()?),
		ValueKind::LargeInteger => TypedValue::LargeInteger(cursor.read_i64_be()?),
		ValueKind::Boolean => TypedValue::Boolean(cursor.read_u8()? != 0),
		ValueKind::GlobalObject => {
			let class = cursor.read_tag()?;
			let descriptor = read_descriptor(cursor)?;
			TypedValue::GlobalObject { class, descriptor }
		}
		ValueKind::Class => TypedValue::Class(cursor.read_tag()?),
		ValueKind::GlobalClass => TypedValue::GlobalClass(cursor.read_tag()?),
		ValueKind::Alias => TypedValue::Alias(cursor.read_data_block()?),
		ValueKind::Path => TypedValue::Path(cursor.read_data_block()?),
		ValueKind::RawData => TypedValue::RawData(cursor.read_data_block()?),
		// ObAr carries a list-shaped payload but must re-encode as ObAr.
		ValueKind::ObjectArray => TypedValue::ObjectArray(read_list(cursor)?),
	})
}

fn write_value(writer: &mut Writer, value: &TypedValue) -> Result<()> {
	match value {
		TypedValue::Reference(reference) => {
			writer.write_tag(tag::value_tag(ValueKind::Reference));
			write_reference(writer, reference)
		}
		TypedValue::Descriptor(descriptor) => {
			writer.write_tag(tag::value_tag(ValueKind::Descriptor));
			write_descriptor(writer, descriptor)
		}
		TypedValue::List(list) => {
			writer.write_tag(tag::value_tag(ValueKind::List));
			write_list(writer, list)
		}
		TypedValue::Double(item) => {
			writer.write_tag(tag::value_tag(ValueKind::Double));
			writer.write_f64_be(*item);
			Ok(())
		}
		TypedValue::UnitDouble { unit, value } => {
			writer.write_tag(tag::value_tag(ValueKind::UnitDouble));
			writer.write_tag(*unit);
			writer.write_f64_be(*value);
			Ok(())
		}
		TypedValue::String(text) => {
			writer.write_tag(tag::value_tag(ValueKind::String));
			writer.write_unicode_string(text)
		}
		TypedValue::Enumerated { enum_type, value } => {
			writer.write_tag(tag::value_tag(ValueKind::Enumerated));
			writer.write_tag(*enum_type);
			writer.write_tag(*value);
			Ok(())
		}
		TypedValue::Integer(item) => {
			writer.write_tag(tag::value_tag(ValueKind::Integer));
			writer.write_i32_be(*item);
			Ok(())
		}
		TypedValue::LargeInteger(item) => {
			writer.write_tag(tag::value_tag(ValueKind::LargeInteger));
			writer.write_i64_be(*item);
			Ok(())
		}
		TypedValue::Boolean(item) => {
			writer.write_tag(tag::value_tag(ValueKind::Boolean));
			writer.write_u8(u8::from(*item));
			Ok(())
		}
		TypedValue::GlobalObject { class, descriptor } => {
			writer.write_tag(tag::value_tag(ValueKind::GlobalObject));
			writer.write_tag(*class);
			write_descriptor(writer, descriptor)
		}
		TypedValue::Class(class) => {
			writer.write_tag(tag::value_tag(ValueKind::Class));
			writer.write_tag(*class);
			Ok(())
		}
		TypedValue::GlobalClass(class) => {
			writer.write_tag(tag::value_tag(ValueKind::GlobalClass));
			writer.write_tag(*class);
			Ok(())
		}
		TypedValue::Alias(bytes) => {
			writer.write_tag(tag::value_tag(ValueKind::Alias));
			writer.write_data_block(bytes)
		}
		TypedValue::Path(bytes) => {
			writer.write_tag(tag::value_tag(ValueKind::Path));
			writer.write_data_block(bytes)
		}
		TypedValue::RawData(bytes) => {
			writer.write_tag(tag::value_tag(ValueKind::RawData));
			writer.write_data_block(bytes)
		}
		TypedValue::ObjectArray(list) => {
			writer.write_tag(tag::value_tag(ValueKind::ObjectArray));
			write_list(writer, list)
		}
	}
}

fn read_list(cursor: &mut Cursor<'_>) -> Result<ActionList> {
	let count = cursor.read_count()?;
	let mut list = ActionList::new();
	for _ in 0..count {
		list.push(read_value(cursor)?);
	}
	Ok(list)
}

fn write_list(writer: &mut Writer, list: &ActionList) -> Result<()> {
	writer.write_count(list.len())?;
	for item in list.iter() {
		write_value(writer, item)?;
	}
	Ok(())
}

fn read_reference(cursor: &mut Cursor<'_>) -> Result<Reference> {
	let count = cursor.read_count()?;
	let mut reference = Reference::new();
	for _ in 0..count {
		reference.push(read_reference_step(cursor)?);
	}
	Ok(reference)
}

fn write_reference(writer: &mut Writer, reference: &Reference) -> Result<()> {
	writer.write_count(reference.len())?;
	for step in reference.steps() {
		write_reference_step(writer, step)?;
	}
	Ok(())
}

fn read_reference_step(cursor: &mut Cursor<'_>) -> Result<ReferenceStep> {
	let at = cursor.pos();
	let raw = cursor.read_tag()?;
	let form = tag::reference_form(raw).ok_or(AtnError::UnknownReferenceTag { tag: raw, at })?;
	let class = cursor.read_tag()?;

	Ok(match form {
		RefForm::Property => ReferenceStep::Property {
			class,
			key: cursor.read_tag()?,
		},
		RefForm::Class => ReferenceStep::Class { class },
		RefForm::Enumerated => {
			let enum_type = cursor.read_tag()?;
			let value = cursor.read_tag()?;
			ReferenceStep::Enumerated { class, enum_type, value }
		}
		RefForm::Offset => ReferenceStep::Offset {
			class,
			offset: cursor.read_i32_be()?,
		},
		RefForm::Identifier => ReferenceStep::Identifier {
			class,
			id: cursor.read_u32_be()?,
		},
		RefForm::Index => ReferenceStep::Index {
			class,
			index: cursor.read_u32_be()?,
		},
		RefForm::Name => ReferenceStep::Name {
			class,
			name: cursor.read_unicode_string()?,
		},
	})
}

fn write_reference_step(writer: &mut Writer, step: &ReferenceStep) -> Result<()> {
	match step {
		ReferenceStep::Property { class, key } => {
			writer.write_tag(tag::reference_tag(RefForm::Property));
			writer.write_tag(*class);
			writer.write_tag(*key);
		}
		ReferenceStep::Class { class } => {
			writer.write_tag(tag::reference_tag(RefForm::Class));
			writer.write_tag(*class);
		}
		ReferenceStep::Enumerated { class, enum_type, value } => {
			writer.write_tag(tag::reference_tag(RefForm::Enumerated));
			writer.write_tag(*class);
			writer.write_tag(*enum_type);
			writer.write_tag(*value);
		}
		ReferenceStep::Offset { class, offset } => {
			writer.write_tag(tag::reference_tag(RefForm::Offset));
			writer.write_tag(*class);
			writer.write_i32_be(*offset);
		}
		ReferenceStep::Identifier { class, id } => {
			writer.write_tag(tag::reference_tag(RefForm::Identifier));
			writer.write_tag(*class);
			writer.write_u32_be(*id);
		}
		ReferenceStep::Index { class, index } => {
			writer.write_tag(tag::reference_tag(RefForm::Index));
			writer.write_tag(*class);
			writer.write_u32_be(*index);
		}
		ReferenceStep::Name { class, name } => {
			writer.write_tag(tag::reference_tag(RefForm::Name));
			writer.write_tag(*class);
			writer.write_unicode_string(name)?;
		}
	}
	Ok(())
}
