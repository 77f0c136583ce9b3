use crate::atn::AtnError;
use crate::atn::value::{ActionList, Descriptor, Reference, ReferenceStep, TypedValue, build_descriptor};

#[test]
fn put_then_get_round_trips() {
	let mut desc = Descriptor::new(*b"Lyr ");
	desc.put(*b"Nm  ", TypedValue::String("Layer1".to_owned()));

	let value = desc.get(*b"Nm  ").expect("key present");
	assert_eq!(value, &TypedValue::String("Layer1".to_owned()));
	assert!(desc.contains(*b"Nm  "));
	assert_eq!(desc.len(), 1);
}

#[test]
fn missing_key_fails_with_key_not_found() {
	let desc = Descriptor::new(*b"Lyr ");
	let err = desc.get(*b"Nm  ").expect_err("empty descriptor has no keys");
	assert!(matches!(err, AtnError::KeyNotFound { key } if key == *b"Nm  "));
}

#[test]
fn put_replaces_in_place_keeping_entry_order() {
	let mut desc = Descriptor::new(*b"Lyr ");
	desc.put(*b"Nm  ", TypedValue::String("first".to_owned()));
	desc.put(*b"Md  ", TypedValue::Integer(1));
	desc.put(*b"Nm  ", TypedValue::String("second".to_owned()));

	assert_eq!(desc.len(), 2);
	let keys: Vec<_> = desc.entries().map(|(key, _)| key).collect();
	assert_eq!(keys, vec![*b"Nm  ", *b"Md  "]);
	assert_eq!(desc.get(*b"Nm  ").expect("key present"), &TypedValue::String("second".to_owned()));
}

#[test]
fn build_descriptor_applies_entries_in_order() {
	let desc = build_descriptor(
		*b"Lyr ",
		[
			(*b"Nm  ", TypedValue::String("Layer1".to_owned())),
			(*b"Opct", TypedValue::Double(50.0)),
		],
	);

	assert_eq!(desc.class, *b"Lyr ");
	assert_eq!(desc.len(), 2);
	let keys: Vec<_> = desc.entries().map(|(key, _)| key).collect();
	assert_eq!(keys, vec![*b"Nm  ", *b"Opct"]);
}

#[test]
fn display_form_is_deterministic() {
	let mut desc = Descriptor::new(*b"Lyr ");
	desc.put(*b"Nm  ", TypedValue::String("Layer1".to_owned()));
	desc.put(*b"Opct", TypedValue::Integer(50));

	assert_eq!(desc.to_string(), "Lyr {Nm  : \"Layer1\", Opct: 50}");
}

#[test]
fn display_covers_references_and_lists() {
	let reference: Reference = [
		ReferenceStep::Property {
			class: *b"Lyr ",
			key: *b"Opct",
		},
		ReferenceStep::Index { class: *b"Lyr ", index: 2 },
	]
	.into_iter()
	.collect();
	assert_eq!(reference.to_string(), "ref(prop Lyr .Opct / index Lyr [2])");

	let list: ActionList = [TypedValue::Integer(1), TypedValue::Boolean(true)].into_iter().collect();
	assert_eq!(list.to_string(), "[1, true]");
}

#[test]
fn empty_containers_report_empty() {
	assert!(Descriptor::new(*b"null").is_empty());
	assert!(ActionList::new().is_empty());
	assert!(Reference::new().is_empty());
}
