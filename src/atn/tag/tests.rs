use crate::atn::tag::{RefForm, ValueKind, reference_form, reference_tag, render_tag, value_kind, value_tag};

const ALL_KINDS: [ValueKind; 17] = [
	ValueKind::Reference,
	ValueKind::Descriptor,
	ValueKind::List,
	ValueKind::Double,
	ValueKind::UnitDouble,
	ValueKind::String,
	ValueKind::Enumerated,
	ValueKind::Integer,
	ValueKind::LargeInteger,
	ValueKind::Boolean,
	ValueKind::GlobalObject,
	ValueKind::Class,
	ValueKind::GlobalClass,
	ValueKind::Alias,
	ValueKind::Path,
	ValueKind::RawData,
	ValueKind::ObjectArray,
];

const ALL_FORMS: [RefForm; 7] = [
	RefForm::Property,
	RefForm::Class,
	RefForm::Enumerated,
	RefForm::Offset,
	RefForm::Identifier,
	RefForm::Index,
	RefForm::Name,
];

#[test]
fn value_table_is_bijective() {
	for kind in ALL_KINDS {
		let tag = value_tag(kind);
		assert_eq!(value_kind(tag), Some(kind), "round trip for {kind:?}");
	}
}

#[test]
fn reference_table_is_bijective() {
	for form in ALL_FORMS {
		let tag = reference_tag(form);
		assert_eq!(reference_form(tag), Some(form), "round trip for {form:?}");
	}
}

#[test]
fn undocumented_tags_are_first_class() {
	assert_eq!(value_kind(*b"ObAr"), Some(ValueKind::ObjectArray));
	assert_eq!(value_kind(*b"tdta"), Some(ValueKind::RawData));
	assert_eq!(value_kind(*b"Pth "), Some(ValueKind::Path));
}

#[test]
fn namespaces_are_distinct() {
	// Reference form tags are not value tags and vice versa.
	assert_eq!(value_kind(*b"prop"), None);
	assert_eq!(reference_form(*b"doub"), None);
}

#[test]
fn unknown_tags_miss() {
	assert_eq!(value_kind(*b"zzzz"), None);
	assert_eq!(reference_form(*b"zzzz"), None);
}

#[test]
fn renders_printable_labels() {
	assert_eq!(render_tag(*b"Lyr "), "Lyr ");
	assert_eq!(render_tag([0, 0, 0, 0]), "....");
	assert_eq!(render_tag([b'a', 0x07, b'b', 0]), "a.b");
}
