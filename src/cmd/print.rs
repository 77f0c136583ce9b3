use std::path::{Path, PathBuf};

use atndoc::atn::{ActionFile, ActionList, Descriptor, Reference, ReferenceStep, Result, TypedValue, render_tag};
use serde_json::{Value as Json, json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Restrict output to the set at this zero-based index.
	#[arg(long)]
	pub set: Option<usize>,
	/// Restrict output to the action at this zero-based index.
	#[arg(long)]
	pub action: Option<usize>,
	/// Emit a JSON document instead of text lines.
	#[arg(long)]
	pub json: bool,
}

/// Render the decoded action tree as text or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { path, set, action, json } = args;

	let file = ActionFile::read_from(&path)?;

	if json {
		let doc = file_to_json(&path, &file, set, action);
		println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
		return Ok(());
	}

	println!("version: {}", file.version);
	for (set_index, item) in file.sets.iter().enumerate() {
		if set.is_some_and(|wanted| wanted != set_index) {
			continue;
		}
		println!("set [{set_index}] \"{}\"", item.name);
		for (action_index, act) in item.actions.iter().enumerate() {
			if action.is_some_and(|wanted| wanted != action_index) {
				continue;
			}
			println!("  action [{action_index}] \"{}\"", act.name);
			for (step_index, step) in act.steps.iter().enumerate() {
				let flags = match (step.enabled, step.expanded) {
					(true, true) => "enabled, expanded",
					(true, false) => "enabled",
					(false, true) => "disabled, expanded",
					(false, false) => "disabled",
				};
				println!("    step [{step_index}] ({flags}) {}", step.descriptor);
			}
		}
	}

	Ok(())
}

fn file_to_json(path: &Path, file: &ActionFile, set: Option<usize>, action: Option<usize>) -> Json {
	let sets: Vec<Json> = file
		.sets
		.iter()
		.enumerate()
		.filter(|(index, _)| set.is_none_or(|wanted| wanted == *index))
		.map(|(_, item)| {
			let actions: Vec<Json> = item
				.actions
				.iter()
				.enumerate()
				.filter(|(index, _)| action.is_none_or(|wanted| wanted == *index))
				.map(|(_, act)| {
					let steps: Vec<Json> = act
						.steps
						.iter()
						.map(|step| {
							json!({
								"enabled": step.enabled,
								"expanded": step.expanded,
								"descriptor": descriptor_to_json(&step.descriptor),
							})
						})
						.collect();
					json!({ "name": act.name, "steps": steps })
				})
				.collect();
			json!({ "name": item.name, "actions": actions })
		})
		.collect();

	json!({
		"path": path.display().to_string(),
		"version": file.version,
		"sets": sets,
	})
}

fn descriptor_to_json(descriptor: &Descriptor) -> Json {
	let entries: Vec<Json> = descriptor
		.entries()
		.map(|(key, value)| {
			json!({
				"key": render_tag(key),
				"value": value_to_json(value),
			})
		})
		.collect();

	json!({
		"class": render_tag(descriptor.class),
		"entries": entries,
	})
}

fn list_to_json(list: &ActionList) -> Json {
	Json::Array(list.iter().map(value_to_json).collect())
}

fn reference_to_json(reference: &Reference) -> Json {
	let steps: Vec<Json> = reference
		.steps()
		.map(|step| match step {
			ReferenceStep::Property { class, key } => {
				json!({ "form": "property", "class": render_tag(*class), "key": render_tag(*key) })
			}
			ReferenceStep::Class { class } => json!({ "form": "class", "class": render_tag(*class) }),
			ReferenceStep::Enumerated { class, enum_type, value } => json!({
				"form": "enumerated",
				"class": render_tag(*class),
				"enum_type": render_tag(*enum_type),
				"value": render_tag(*value),
			}),
			ReferenceStep::Offset { class, offset } => {
				json!({ "form": "offset", "class": render_tag(*class), "offset": offset })
			}
			ReferenceStep::Identifier { class, id } => {
				json!({ "form": "identifier", "class": render_tag(*class), "id": id })
			}
			ReferenceStep::Index { class, index } => {
				json!({ "form": "index", "class": render_tag(*class), "index": index })
			}
			ReferenceStep::Name { class, name } => {
				json!({ "form": "name", "class": render_tag(*class), "name": name })
			}
		})
		.collect();
	Json::Array(steps)
}

fn value_to_json(value: &TypedValue) -> Json {
	match value {
		TypedValue::Reference(reference) => json!({ "type": "reference", "steps": reference_to_json(reference) }),
		TypedValue::Descriptor(descriptor) => json!({ "type": "descriptor", "descriptor": descriptor_to_json(descriptor) }),
		TypedValue::List(list) => json!({ "type": "list", "items": list_to_json(list) }),
		TypedValue::Double(item) => json!({ "type": "double", "value": item }),
		TypedValue::UnitDouble { unit, value } => {
			json!({ "type": "unit_double", "unit": render_tag(*unit), "value": value })
		}
		TypedValue::String(text) => json!({ "type": "string", "value": text }),
		TypedValue::Enumerated { enum_type, value } => {
			json!({ "type": "enumerated", "enum_type": render_tag(*enum_type), "value": render_tag(*value) })
		}
		TypedValue::Integer(item) => json!({ "type": "integer", "value": item }),
		TypedValue::LargeInteger(item) => json!({ "type": "large_integer", "value": item }),
		TypedValue::Boolean(item) => json!({ "type": "boolean", "value": item }),
		TypedValue::GlobalObject { class, descriptor } => json!({
			"type": "global_object",
			"class": render_tag(*class),
			"descriptor": descriptor_to_json(descriptor),
		}),
		TypedValue::Class(class) => json!({ "type": "class", "class": render_tag(*class) }),
		TypedValue::GlobalClass(class) => json!({ "type": "global_class", "class": render_tag(*class) }),
		TypedValue::Alias(bytes) => json!({ "type": "alias", "bytes": bytes.len() }),
		TypedValue::Path(bytes) => json!({ "type": "path", "bytes": bytes.len() }),
		TypedValue::RawData(bytes) => json!({ "type": "raw_data", "bytes": bytes.len() }),
		TypedValue::ObjectArray(list) => json!({ "type": "object_array", "items": list_to_json(list) }),
	}
}
