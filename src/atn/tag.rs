/// Four-byte type code used for keys, classes, units, and enums.
pub type Tag = [u8; 4];

/// The empty/null class tag.
pub const NULL_TAG: Tag = [0_u8; 4];

/// Semantic kind of a descriptor value, one per value type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// `obj ` — ordered chain of reference steps.
	Reference,
	/// `Objc` — nested descriptor.
	Descriptor,
	/// `VlLs` — heterogeneous ordered list.
	List,
	/// `doub` — IEEE-754 double.
	Double,
	/// `UntF` — double qualified by a unit tag.
	UnitDouble,
	/// `TEXT` — length-prefixed UTF-16 string.
	String,
	/// `enum` — enumeration type and value tags.
	Enumerated,
	/// `long` — 32-bit signed integer.
	Integer,
	/// `comp` — 64-bit signed integer.
	LargeInteger,
	/// `bool` — single-byte boolean.
	Boolean,
	/// `GlbO` — class-tagged nested descriptor.
	GlobalObject,
	/// `type` — bare class tag.
	Class,
	/// `GlbC` — bare class tag in the global namespace.
	GlobalClass,
	/// `alis` — serialized alias record bytes.
	Alias,
	/// `Pth ` — serialized path bytes (undocumented, emitted by the host).
	Path,
	/// `tdta` — opaque raw data bytes (undocumented, emitted by the host).
	RawData,
	/// `ObAr` — list-shaped payload kept distinct for re-encode (undocumented).
	ObjectArray,
}

/// Form of a single reference step, one per reference form tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefForm {
	/// `prop` — property key on a class.
	Property,
	/// `Clss` — bare class reference.
	Class,
	/// `Enmr` — enumerated value on a class.
	Enumerated,
	/// `rele` — signed index offset relative to the target.
	Offset,
	/// `Idnt` — unique identifier.
	Identifier,
	/// `indx` — absolute element index.
	Index,
	/// `name` — element by name.
	Name,
}

const VALUE_TAGS: [(Tag, ValueKind); 17] = [
	(*b"obj ", ValueKind::Reference),
	(*b"Objc", ValueKind::Descriptor),
	(*b"VlLs", ValueKind::List),
	(*b"doub", ValueKind::Double),
	(*b"UntF", ValueKind::UnitDouble),
	(*b"TEXT", ValueKind::String),
	(*b"enum", ValueKind::Enumerated),
	(*b"long", ValueKind::Integer),
	(*b"comp", ValueKind::LargeInteger),
	(*b"bool", ValueKind::Boolean),
	(*b"GlbO", ValueKind::GlobalObject),
	(*b"type", ValueKind::Class),
	(*b"GlbC", ValueKind::GlobalClass),
	(*b"alis", ValueKind::Alias),
	(*b"Pth ", ValueKind::Path),
	(*b"tdta", ValueKind::RawData),
	(*b"ObAr", ValueKind::ObjectArray),
];

const REFERENCE_TAGS: [(Tag, RefForm); 7] = [
	(*b"prop", RefForm::Property),
	(*b"Clss", RefForm::Class),
	(*b"Enmr", RefForm::Enumerated),
	(*b"rele", RefForm::Offset),
	(*b"Idnt", RefForm::Identifier),
	(*b"indx", RefForm::Index),
	(*b"name", RefForm::Name),
];

/// Look up the semantic kind for a value type tag.
pub fn value_kind(tag: Tag) -> Option<ValueKind> {
	VALUE_TAGS.iter().find(|(code, _)| *code == tag).map(|(_, kind)| *kind)
}

/// Look up the wire tag for a value kind.
pub fn value_tag(kind: ValueKind) -> Tag {
	// The table covers every kind, so the lookup cannot miss.
	VALUE_TAGS
		.iter()
		.find(|(_, item)| *item == kind)
		.map(|(code, _)| *code)
		.unwrap_or(NULL_TAG)
}

/// Look up the step form for a reference form tag.
pub fn reference_form(tag: Tag) -> Option<RefForm> {
	REFERENCE_TAGS.iter().find(|(code, _)| *code == tag).map(|(_, form)| *form)
}

/// Look up the wire tag for a reference step form.
pub fn reference_tag(form: RefForm) -> Tag {
	REFERENCE_TAGS
		.iter()
		.find(|(_, item)| *item == form)
		.map(|(code, _)| *code)
		.unwrap_or(NULL_TAG)
}

/// Render tag bytes as a printable label.
pub fn render_tag(tag: Tag) -> String {
	let mut out = String::new();
	for byte in tag {
		if byte == 0 {
			continue;
		}
		if byte.is_ascii_graphic() || byte == b' ' {
			out.push(char::from(byte));
		} else {
			out.push('.');
		}
	}
	if out.is_empty() { "....".to_owned() } else { out }
}

#[cfg(test)]
mod tests;
