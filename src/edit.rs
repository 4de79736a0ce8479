use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
	Create,
	#[default]
	Modify,
	Delete,
}

impl EditOp {
	/// Lenient parse. Anything not recognized is a `Modify`.
	pub fn from_loose(s: &str) -> Self {
		match s.trim().to_ascii_lowercase().as_str() {
			"create" => Self::Create,
			"delete" => Self::Delete,
			_ => Self::Modify,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Create => "create",
			Self::Modify => "modify",
			Self::Delete => "delete",
		}
	}
}

/// A single proposed change to one file.
///
/// `start_line`/`end_line` are 0-indexed and inclusive, and may be stale.
/// A non-blank `old_text` is the preferred anchor for `Modify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEdit", rename_all = "camelCase")]
pub struct Edit {
	pub op: EditOp,
	pub file_path: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_line: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_line: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub old_text: Option<String>,
	pub new_text: String,
}

// region:    --- Constructors

impl Edit {
	pub fn create(file_path: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			op: EditOp::Create,
			file_path: file_path.into(),
			start_line: None,
			end_line: None,
			old_text: None,
			new_text: content.into(),
		}
	}

	pub fn delete(file_path: impl Into<String>) -> Self {
		Self {
			op: EditOp::Delete,
			file_path: file_path.into(),
			start_line: None,
			end_line: None,
			old_text: None,
			new_text: String::new(),
		}
	}

	/// Modify addressed by an inclusive line range.
	pub fn modify_lines(file_path: impl Into<String>, start_line: usize, end_line: usize, new_text: impl Into<String>) -> Self {
		Self {
			op: EditOp::Modify,
			file_path: file_path.into(),
			start_line: Some(start_line),
			end_line: Some(end_line),
			old_text: None,
			new_text: new_text.into(),
		}
	}

	/// Modify addressed by the text it replaces.
	pub fn modify_text(file_path: impl Into<String>, old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
		Self {
			op: EditOp::Modify,
			file_path: file_path.into(),
			start_line: None,
			end_line: None,
			old_text: Some(old_text.into()),
			new_text: new_text.into(),
		}
	}

	pub fn with_old_text(mut self, old_text: impl Into<String>) -> Self {
		self.old_text = Some(old_text.into());
		self
	}
}

// endregion: --- Constructors

// region:    --- Accessors

impl Edit {
	/// The `old_text` anchor, if present and not blank.
	pub fn anchor(&self) -> Option<&str> {
		self.old_text.as_deref().filter(|s| !s.trim().is_empty())
	}

	/// Declared `(start, end)`, with `start` defaulting to 0 and `end` to `start`.
	pub fn declared_lines(&self) -> (usize, usize) {
		let start = self.start_line.unwrap_or(0);
		let end = self.end_line.unwrap_or(start);
		(start, end)
	}

	/// Declared lines clamped to `[0, line_count - 1]` with `end >= start`.
	pub fn clamped_lines(&self, line_count: usize) -> (usize, usize) {
		let (start, end) = self.declared_lines();
		let last = line_count.saturating_sub(1);
		let start = start.min(last);
		let end = end.max(start).min(last);
		(start, end)
	}
}

// endregion: --- Accessors

// region:    --- EditBatch

/// An ordered, caller-supplied list of edits. May contain duplicates or overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditBatch {
	edits: Vec<Edit>,
}

impl EditBatch {
	pub fn new(edits: Vec<Edit>) -> Self {
		Self { edits }
	}

	/// Strict parse of a JSON array of edits. Any invalid element fails the whole batch.
	pub fn from_json(json: &str) -> Result<Self> {
		let edits: Vec<Edit> = serde_json::from_str(json)?;
		Ok(Self { edits })
	}

	pub fn is_empty(&self) -> bool {
		self.edits.is_empty()
	}

	pub fn len(&self) -> usize {
		self.edits.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
		self.edits.iter()
	}

	/// Edits of a given operation, in input order.
	pub fn of_op(&self, op: EditOp) -> impl Iterator<Item = &Edit> {
		self.edits.iter().filter(move |e| e.op == op)
	}
}

impl From<Vec<Edit>> for EditBatch {
	fn from(edits: Vec<Edit>) -> Self {
		Self { edits }
	}
}

impl IntoIterator for EditBatch {
	type Item = Edit;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.edits.into_iter()
	}
}

impl<'a> IntoIterator for &'a EditBatch {
	type Item = &'a Edit;
	type IntoIter = std::slice::Iter<'a, Edit>;

	fn into_iter(self) -> Self::IntoIter {
		self.edits.iter()
	}
}

// endregion: --- EditBatch

// region:    --- Boundary Parser

/// Loose shape of an edit as produced by an AI response. Only used through `Edit`'s `Deserialize`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEdit {
	#[serde(alias = "operation")]
	op: Option<Value>,
	file_path: Option<Value>,
	start_line: Option<Value>,
	end_line: Option<Value>,
	old_text: Option<Value>,
	new_text: Option<Value>,
}

impl TryFrom<RawEdit> for Edit {
	type Error = Error;

	fn try_from(raw: RawEdit) -> Result<Self> {
		let op = match raw.op {
			Some(Value::String(s)) => EditOp::from_loose(&s),
			_ => EditOp::Modify,
		};

		let file_path = match raw.file_path {
			Some(Value::String(s)) => s.trim().to_string(),
			_ => String::new(),
		};
		if file_path.is_empty() {
			return Err(Error::invalid_input("Empty filePath"));
		}

		let start_line = raw.start_line.as_ref().and_then(loose_line);
		let end_line = raw.end_line.as_ref().and_then(loose_line);

		let old_text = match raw.old_text {
			Some(Value::String(s)) => Some(s),
			_ => None,
		};
		let new_text = match raw.new_text {
			Some(Value::String(s)) => s,
			_ => String::new(),
		};

		let edit = Edit {
			op,
			file_path,
			start_line,
			end_line,
			old_text,
			new_text,
		};

		if edit.op == EditOp::Modify && edit.anchor().is_none() && edit.start_line.is_none() {
			return Err(Error::invalid_input(format!(
				"modify edit for '{}' has neither oldText nor startLine",
				edit.file_path
			)));
		}

		Ok(edit)
	}
}

impl Edit {
	/// Validating parse of one loose JSON edit object.
	pub fn from_json_value(value: Value) -> Result<Self> {
		let raw: RawEdit = serde_json::from_value(value)?;
		Edit::try_from(raw)
	}
}

/// Numbers or numeric strings. Negatives clamp to 0, fractions truncate, anything else is absent.
fn loose_line(value: &Value) -> Option<usize> {
	let num = match value {
		Value::Number(n) => n.as_f64()?,
		Value::String(s) => s.trim().parse::<f64>().ok()?,
		_ => return None,
	};
	if !num.is_finite() {
		return None;
	}
	Some(num.max(0.0).trunc() as usize)
}

// endregion: --- Boundary Parser

// region:    --- Tests


// endregion: --- Tests
