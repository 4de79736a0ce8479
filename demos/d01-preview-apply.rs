use editx::{EditSession, FsWorkspace, extract_edit_payload};
use simple_fs::{SPath, SaferRemoveOptions, ensure_dir, safer_remove_dir};

const RESPONSE: &str = r##"```json
{
  "explanation": "Greet the world and add a README",
  "edits": [
    {"op": "modify", "filePath": "src/main.rs", "oldText": "println!(\"hello\");", "newText": "    println!(\"hello, world\");"},
    {"op": "create", "filePath": "README.md", "newText": "# demo\n"}
  ]
}
```"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let base_dir = SPath::new("demos/.out/d01-preview-apply");

	// -- Setup & Clean
	if base_dir.exists() {
		safer_remove_dir(&base_dir, SaferRemoveOptions::default().with_must_contain_any(&["demos/"]))?;
	}
	ensure_dir(&base_dir)?;
	ensure_dir(base_dir.join("src"))?;
	std::fs::write(
		base_dir.join("src/main.rs").std_path(),
		"fn main() {\n    println!(\"hello\");\n}\n",
	)?;

	// -- Extract
	let Some(payload) = extract_edit_payload(RESPONSE)? else {
		println!("No edits found in response");
		return Ok(());
	};
	println!("{} edit(s): {}", payload.edits.len(), payload.explanation.unwrap_or_default());

	// -- Preview
	let mut ws = FsWorkspace::new(&base_dir)?;
	let mut session = EditSession::default();
	for stored in session.preview(&ws, payload.edits)? {
		match stored {
			Ok(stored) => {
				println!("\n== {}", stored.preview.label);
				print!("{}", stored.preview.unified_diff());
			}
			Err(err) => println!("\n== preview failed: {err}"),
		}
	}

	// -- Accept
	let report = session.accept(&mut ws)?;
	println!("\n{}", report.summary());

	Ok(())
}
