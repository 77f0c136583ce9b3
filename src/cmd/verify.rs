use std::fs;
use std::path::PathBuf;

use atndoc::atn::{ActionFile, Result};
use serde::Serialize;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit a JSON report instead of text lines.
	#[arg(long)]
	pub json: bool,
}

/// Byte fidelity report for one decode/re-encode cycle.
#[derive(Serialize)]
struct Report {
	path: String,
	input_len: usize,
	encoded_len: usize,
	set_count: usize,
	step_count: usize,
	identical: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	first_divergence: Option<usize>,
}

/// Decode, re-encode, and compare byte-for-byte against the input.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let raw = fs::read(&path)?;
	let file = ActionFile::decode(&raw)?;
	let encoded = file.encode()?;

	let first_divergence = raw
		.iter()
		.zip(encoded.iter())
		.position(|(left, right)| left != right)
		.or_else(|| (raw.len() != encoded.len()).then(|| raw.len().min(encoded.len())));

	let report = Report {
		path: path.display().to_string(),
		input_len: raw.len(),
		encoded_len: encoded.len(),
		set_count: file.sets.len(),
		step_count: file.step_count(),
		identical: first_divergence.is_none(),
		first_divergence,
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
	} else {
		println!("path: {}", report.path);
		println!("input_len: {}", report.input_len);
		println!("encoded_len: {}", report.encoded_len);
		println!("set_count: {}", report.set_count);
		println!("step_count: {}", report.step_count);
		println!("identical: {}", report.identical);
		if let Some(offset) = report.first_divergence {
			println!("first_divergence: {offset}");
		}
	}

	if !report.identical {
		std::process::exit(1);
	}
	Ok(())
}
