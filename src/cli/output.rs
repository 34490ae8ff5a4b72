use anyhow::Result;
use serde_json::json;
use tpick_core::Outcome;

/// Print the chosen item on its own line. Prints nothing on cancel.
pub(crate) fn print_plain(outcome: &Outcome) {
	if let Some(item) = &outcome.selection {
		println!("{item}");
	}
}

/// Format the outcome as a JSON document.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted(),
		"selection": outcome.selection,
		"query": outcome.query,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
