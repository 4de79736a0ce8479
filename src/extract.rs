use crate::{Edit, EditBatch, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static RE_FENCE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").expect("valid fence regex"));

/// Edits found in an AI response, plus what came with them.
#[derive(Debug, Clone, Default)]
pub struct EditPayload {
	pub edits: EditBatch,
	pub explanation: Option<String>,
	pub edit_mode: bool,
	/// Edits that failed validation, skipped from `edits`.
	pub rejected: Vec<RejectedEdit>,
}

#[derive(Debug, Clone)]
pub struct RejectedEdit {
	/// Position in the response `edits` array.
	pub index: usize,
	pub error_msg: String,
}

/// Extracts the first `{ "edits": [...] }` payload from an AI response.
///
/// Tried in order: the whole text as JSON, the first code fence, then the slice from
/// the first `{` to the last `}`. Returns `None` when no candidate is an object with an `edits` array.
pub fn extract_edit_payload(input: &str) -> Result<Option<EditPayload>> {
	let text = input.trim();
	if text.is_empty() {
		return Ok(None);
	}

	let fenced = RE_FENCE
		.captures(text)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str().trim());

	let braced = match (text.find('{'), text.rfind('}')) {
		(Some(first), Some(last)) if last > first => Some(&text[first..=last]),
		_ => None,
	};

	let payload = [Some(text), fenced, braced]
		.into_iter()
		.flatten()
		.find_map(parse_candidate)
		.map(payload_from_value);

	Ok(payload)
}

// region:    --- Support

fn parse_candidate(candidate: &str) -> Option<Value> {
	let value: Value = serde_json::from_str(candidate).ok()?;
	value.get("edits")?.as_array()?;
	Some(value)
}

fn payload_from_value(mut value: Value) -> EditPayload {
	let explanation = value
		.get("explanation")
		.and_then(Value::as_str)
		.map(str::to_string);
	let edit_mode = value.get("edit_mode").and_then(Value::as_bool).unwrap_or(false);

	let raw_edits = match value.get_mut("edits").map(Value::take) {
		Some(Value::Array(items)) => items,
		_ => Vec::new(),
	};

	let mut edits = Vec::new();
	let mut rejected = Vec::new();
	for (index, item) in raw_edits.into_iter().enumerate() {
		match Edit::from_json_value(item) {
			Ok(edit) => edits.push(edit),
			Err(err) => rejected.push(RejectedEdit {
				index,
				error_msg: err.to_string(),
			}),
		}
	}

	EditPayload {
		edits: EditBatch::new(edits),
		explanation,
		edit_mode,
		rejected,
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
