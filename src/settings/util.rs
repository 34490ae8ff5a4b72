use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Title for a directory listing: the root, with `$HOME` shortened to `~`.
pub(super) fn default_title_for(root: &Path) -> String {
	let home = env::var_os("HOME").map(PathBuf::from);
	shorten_home(root, home.as_deref())
}

fn shorten_home(path: &Path, home: Option<&Path>) -> String {
	if let Some(rel) = home.and_then(|home| path.strip_prefix(home).ok()) {
		if rel.components().next().is_none() {
			return "~".to_string();
		}
		return format!("~{MAIN_SEPARATOR}{}", rel.display());
	}
	path.display().to_string()
}
