use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::{BoolishValueParser, Styles};
use clap::{ArgAction, ColorChoice, Parser, ValueEnum};
use tpick::app_dirs;

/// Version banner including the config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("tpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "tpick",
	version,
	long_version = long_version(),
	about = "Pick one item from a list in the terminal, with incremental fuzzy search",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `tpick` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		conflicts_with = "dirs",
		help = "Read items from FILE, one per line; '-' reads stdin (default: stdin when piped)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short = 'w',
		long = "words",
		help = "Split input on whitespace instead of lines (default: disabled)"
	)]
	pub(crate) words: bool,
	#[arg(
		short = 'd',
		long = "dirs",
		value_name = "ROOT",
		num_args = 0..=1,
		default_missing_value = ".",
		help = "List the directories below ROOT instead of reading input (default ROOT: .)"
	)]
	pub(crate) dirs: Option<PathBuf>,
	#[arg(
		short = 'H',
		long = "hidden",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Include hidden directories when walking (default: disabled)"
	)]
	pub(crate) hidden: Option<bool>,
	#[arg(
		short = 's',
		long = "follow-symlinks",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Follow symbolic links when walking (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the menu title (default: derived from the item source)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Rows moved by page up and page down (default: 10)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long,
		value_name = "COLOR",
		help = "Colour for the title and the selected row, e.g. cyan or #ff8800 (default: none)"
	)]
	pub(crate) accent: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		env = "TPICK_LOG_FILE",
		help = "Append diagnostic logs to PATH (default: logging disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Raise the log level; repeat for more detail (default: warn)"
	)]
	pub(crate) verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_valid() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_read_stdin_as_plain_lines() {
		let parsed = CliArgs::try_parse_from(["tpick"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.file.is_none());
		assert!(parsed.dirs.is_none());
		assert!(!parsed.words);
		assert_eq!(parsed.verbose, 0);
	}

	#[test]
	fn bare_dirs_flag_walks_the_current_directory() {
		let parsed = CliArgs::try_parse_from(["tpick", "-d", "--hidden"]).expect("parses");
		assert_eq!(parsed.dirs, Some(PathBuf::from(".")));
		assert_eq!(parsed.hidden, Some(true));
	}

	#[test]
	fn dirs_and_file_conflict() {
		assert!(CliArgs::try_parse_from(["tpick", "--dirs", "src", "items.txt"]).is_err());
	}

	#[test]
	fn repeated_flags_accumulate() {
		let parsed = CliArgs::try_parse_from([
			"tpick", "-vv", "-c", "a.toml", "-c", "b.toml", "-o", "json", "-",
		])
		.expect("parses");
		assert_eq!(parsed.verbose, 2);
		assert_eq!(parsed.config.len(), 2);
		assert_eq!(parsed.output, OutputFormat::Json);
		assert_eq!(parsed.file, Some(PathBuf::from("-")));
	}
}
