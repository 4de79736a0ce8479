use crate::{EditOptions, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use simple_fs::SPath;

static RE_DRIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]:[\\/]").expect("valid drive regex"));
static RE_UNC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\\\[^\\]+\\[^\\]+").expect("valid unc regex"));

/// Resolves an edit `file_path` to an absolute, collapsed path.
///
/// - Drive (`C:\..`) and UNC (`\\server\share`) paths are kept as-is.
/// - A path starting with `/` or `\` is kept only if it is already under `root`,
///   otherwise it is treated as root-relative (`/app.py` means `<root>/app.py`).
/// - Everything else is joined to `root`, which must then exist.
pub fn resolve_path(root: Option<&SPath>, file_path: &str) -> Result<SPath> {
	let raw = file_path.trim();
	if raw.is_empty() {
		return Err(Error::invalid_input("Empty filePath"));
	}

	if RE_DRIVE.is_match(raw) || RE_UNC.is_match(raw) {
		return Ok(SPath::new(raw));
	}

	if raw.starts_with('/') || raw.starts_with('\\') {
		let candidate = SPath::new(raw).into_collapsed();
		match root {
			None => return Ok(candidate),
			Some(root) if is_within(&candidate, root) => return Ok(candidate),
			Some(_) => (),
		}
	}

	let root = root.ok_or_else(|| Error::not_found("Workspace root (needed to resolve a relative path)", raw))?;
	let clean = raw.trim_start_matches(['/', '\\']);

	Ok(root.join(clean).into_collapsed())
}

/// `resolve_path` plus the optional confinement check from `options`.
pub fn resolve_edit_path(root: Option<&SPath>, file_path: &str, options: &EditOptions) -> Result<SPath> {
	let path = resolve_path(root, file_path)?;
	if options.confine_to_root
		&& let Some(root) = root
	{
		check_in_root(&path, root)?;
	}
	Ok(path)
}

/// Fails with `OutsideWorkspace` when `target` is not under `root`.
pub fn check_in_root(target: &SPath, root: &SPath) -> Result<()> {
	if !is_within(target, root) {
		return Err(Error::outside_workspace(target.to_string(), root.to_string()));
	}
	Ok(())
}

// region:    --- Support

fn is_within(target: &SPath, root: &SPath) -> bool {
	let root = root.clone().into_collapsed();
	let target = target.clone().into_collapsed();
	let root_str = root.as_str().trim_end_matches('/');

	match target.as_str().strip_prefix(root_str) {
		Some(rest) => rest.is_empty() || rest.starts_with('/'),
		None => false,
	}
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_path_resolve_relative() -> Result<()> {
		// -- Setup & Fixtures
		let root = SPath::new("/work/proj");

		// -- Exec
		let path = resolve_path(Some(&root), " src/./lib.rs ")?;

		// -- Check
		assert_eq!(path.as_str(), "/work/proj/src/lib.rs");

		Ok(())
	}

	#[test]
	fn test_path_resolve_rooted_outside_is_relative() -> Result<()> {
		// -- Setup & Fixtures
		let root = SPath::new("/work/proj");

		// -- Exec
		let rooted_inside = resolve_path(Some(&root), "/work/proj/app.py")?;
		let rooted_outside = resolve_path(Some(&root), "/app.py")?;
		let backslash_rooted = resolve_path(Some(&root), "\\app.py")?;

		// -- Check
		assert_eq!(rooted_inside.as_str(), "/work/proj/app.py");
		assert_eq!(rooted_outside.as_str(), "/work/proj/app.py");
		assert_eq!(backslash_rooted.as_str(), "/work/proj/app.py");

		Ok(())
	}

	#[test]
	fn test_path_resolve_errors() -> Result<()> {
		// -- Exec & Check
		assert!(matches!(resolve_path(None, "  "), Err(Error::InvalidInput(_))));
		assert!(matches!(resolve_path(None, "src/a.rs"), Err(Error::NotFound { .. })));
		assert_eq!(resolve_path(None, r"C:\proj\a.rs")?.as_str(), r"C:\proj\a.rs");

		Ok(())
	}

	#[test]
	fn test_path_check_in_root() -> Result<()> {
		// -- Setup & Fixtures
		let root = SPath::new("/work/proj");

		// -- Exec & Check
		assert!(check_in_root(&SPath::new("/work/proj/a/b.rs"), &root).is_ok());
		assert!(check_in_root(&SPath::new("/work/proj-other/b.rs"), &root).is_err());
		assert!(check_in_root(&SPath::new("/work/proj/../x.rs"), &root).is_err());

		Ok(())
	}

	#[test]
	fn test_path_resolve_edit_path_confined() -> Result<()> {
		// -- Setup & Fixtures
		let root = SPath::new("/work/proj");
		let confined = EditOptions::default().with_confine_to_root(true);

		// -- Exec
		let escaped = resolve_edit_path(Some(&root), "../secrets.txt", &confined);
		let unconfined = resolve_edit_path(Some(&root), "../secrets.txt", &EditOptions::default())?;

		// -- Check
		assert!(matches!(escaped, Err(Error::OutsideWorkspace { .. })));
		assert_eq!(unconfined.as_str(), "/work/secrets.txt");

		Ok(())
	}
}

// endregion: --- Tests
