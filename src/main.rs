#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "atndoc", about = "Photoshop .atn action file inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print file-level statistics.
	Info(cmd::info::Args),
	/// Render the decoded action tree.
	Print(cmd::print::Args),
	/// Check decode/re-encode byte fidelity.
	Verify(cmd::verify::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> atndoc::atn::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Print(args) => cmd::print::run(args),
		Commands::Verify(args) => cmd::verify::run(args),
	}
}
