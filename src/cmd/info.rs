use std::collections::HashMap;
use std::path::PathBuf;

use atndoc::atn::{ActionFile, Result, Tag, render_tag};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print high-level file and step statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let file = ActionFile::read_from(&path)?;

	println!("path: {}", path.display());
	println!("version: {}", file.version);
	println!("set_count: {}", file.sets.len());
	println!("action_count: {}", file.action_count());
	println!("step_count: {}", file.step_count());

	for set in &file.sets {
		println!("set \"{}\": {} actions", set.name, set.actions.len());
		for action in &set.actions {
			println!("  action \"{}\": {} steps", action.name, action.steps.len());
		}
	}

	let mut classes: HashMap<Tag, u32> = HashMap::new();
	for set in &file.sets {
		for action in &set.actions {
			for step in &action.steps {
				*classes.entry(step.descriptor.class).or_insert(0) += 1;
			}
		}
	}

	let mut entries: Vec<_> = classes.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	println!("top_step_classes:");
	for (class, count) in entries.into_iter().take(12) {
		println!("  {}: {}", render_tag(class), count);
	}

	Ok(())
}
