mod cli;
mod settings;
mod workflow;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tpick::logging;
use workflow::PickWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	logging::initialize(cli.log_file.as_deref(), cli.verbose)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary(&mut io::stderr().lock())?;
	}

	run_picker(cli.output, resolved)
}

/// Run the menu and print the outcome in the chosen format. Exits with 1
/// when nothing was selected.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	let workflow = PickWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	if outcome.accepted() {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}
