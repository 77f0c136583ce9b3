#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::Command;

use atndoc::atn::{Action, ActionFile, ActionSet, ActionStep, Descriptor, TypedValue};
use serde_json::Value;

#[test]
fn print_json_output_is_valid_and_structured() {
	let path = write_fixture("atndoc_cli_print.atn");
	let json = run_json(vec!["print".to_owned(), path.display().to_string(), "--json".to_owned()]);
	std::fs::remove_file(&path).expect("cleanup succeeds");

	assert_eq!(json["version"], 16);
	let sets = json["sets"].as_array().expect("sets array present");
	assert_eq!(sets.len(), 1);
	assert_eq!(sets[0]["name"], "Test");

	let steps = sets[0]["actions"][0]["steps"].as_array().expect("steps array present");
	assert_eq!(steps.len(), 1);
	assert_eq!(steps[0]["enabled"], true);
	assert_eq!(steps[0]["descriptor"]["class"], "Lyr ");
	assert_eq!(steps[0]["descriptor"]["entries"][0]["key"], "Nm  ");
	assert_eq!(steps[0]["descriptor"]["entries"][0]["value"]["value"], "Layer1");
}

#[test]
fn verify_json_reports_identical_round_trip() {
	let path = write_fixture("atndoc_cli_verify.atn");
	let json = run_json(vec!["verify".to_owned(), path.display().to_string(), "--json".to_owned()]);
	std::fs::remove_file(&path).expect("cleanup succeeds");

	assert_eq!(json["identical"], true);
	assert_eq!(json["set_count"], 1);
	assert_eq!(json["step_count"], 1);
	assert_eq!(json["input_len"], json["encoded_len"]);
	assert!(json.get("first_divergence").is_none(), "no divergence expected");
}

#[test]
fn info_lists_sets_and_counts() {
	let path = write_fixture("atndoc_cli_info.atn");
	let output = Command::new(env!("CARGO_BIN_EXE_atndoc"))
		.args(["info", &path.display().to_string()])
		.output()
		.expect("binary runs");
	std::fs::remove_file(&path).expect("cleanup succeeds");

	assert!(output.status.success(), "info should succeed");
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.contains("version: 16"), "missing version line:\n{stdout}");
	assert!(stdout.contains("set_count: 1"), "missing set count:\n{stdout}");
	assert!(stdout.contains("set \"Test\": 1 actions"), "missing set line:\n{stdout}");
}

#[test]
fn truncated_file_fails_with_nonzero_exit() {
	let path = write_fixture("atndoc_cli_truncated.atn");
	let bytes = std::fs::read(&path).expect("fixture reads");
	std::fs::write(&path, &bytes[..bytes.len() - 3]).expect("truncated fixture writes");

	let output = Command::new(env!("CARGO_BIN_EXE_atndoc"))
		.args(["verify", &path.display().to_string()])
		.output()
		.expect("binary runs");
	std::fs::remove_file(&path).expect("cleanup succeeds");

	assert!(!output.status.success(), "truncated input should fail");
	let stderr = String::from_utf8(output.stderr).expect("stderr is utf-8");
	assert!(stderr.contains("unexpected eof"), "missing eof diagnostic:\n{stderr}");
}

fn write_fixture(name: &str) -> PathBuf {
	let mut descriptor = Descriptor::new(*b"Lyr ");
	descriptor.put(*b"Nm  ", TypedValue::String("Layer1".to_owned()));

	let file = ActionFile {
		version: ActionFile::VERSION,
		sets: vec![ActionSet {
			name: "Test".to_owned(),
			actions: vec![Action {
				name: "Step1".to_owned(),
				steps: vec![ActionStep {
					descriptor,
					enabled: true,
					expanded: false,
				}],
			}],
		}],
	};

	let path = std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
	file.write(&path).expect("fixture writes");
	path
}

fn run_json(args: Vec<String>) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_atndoc"))
		.args(args)
		.output()
		.expect("binary runs");
	assert!(
		output.status.success(),
		"command failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout is valid json")
}
