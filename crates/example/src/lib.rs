//! Example file-assistant tools described with toolspec.
//!
//! This crate depends only on the `toolspec` umbrella, so every
//! `#[tool_schema]` expansion below reaches the schema types through
//! `toolspec::toolspec_schema`.

use std::fs;
use std::io::Write as _;

use serde_json::Value;
use toolspec::prelude::*;

/// List files in a directory.
///
/// Args:
///     path: Directory path, relative to the working directory.
///     include_hidden: Whether to list entries starting with a dot.
///
/// Returns:
///     File names, sorted.
#[tool_schema]
pub fn list_files(path: String, #[default(false)] include_hidden: bool) -> Result<Vec<String>, String> {
    let entries = fs::read_dir(&path).map_err(|e| format!("cannot list {path}: {e}"))?;
    let mut names = Vec::new();
    for entry in entries {
        let name = entry
            .map_err(|e| format!("cannot list {path}: {e}"))?
            .file_name()
            .to_string_lossy()
            .into_owned();
        if include_hidden || !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Read the contents of a file.
///
/// Args:
///     path: File path, relative to the working directory.
///     max_bytes: Truncate the result to this many bytes.
#[tool_schema]
pub fn read_file(path: String, #[default] max_bytes: Option<usize>) -> Result<String, String> {
    let mut content = fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
    if let Some(limit) = max_bytes
        && content.len() > limit
    {
        let mut end = limit;
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        content.truncate(end);
    }
    Ok(content)
}

/// Write content to a file.
///
/// Args:
///     path: File path, relative to the working directory.
///     content: Text to write.
///     mode: How to treat an existing file (choices: ["overwrite", "append"])
///
/// Returns:
///     Number of bytes written.
#[tool_schema]
pub fn write_file(path: String, content: String, #[default] mode: Option<String>) -> Result<usize, String> {
    let append = mode.as_deref() == Some("append");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(&path)
        .map_err(|e| format!("cannot open {path}: {e}"))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("cannot write {path}: {e}"))?;
    Ok(content.len())
}

/// Returns the schema records for every tool in this crate.
///
/// # Errors
///
/// Fails if any tool's docstring or types cannot be described.
pub fn tool_schemas() -> Result<Vec<SchemaRecord>, SchemaError> {
    let tools: [&dyn Callable; 3] = [&ListFilesSchema, &ReadFileSchema, &WriteFileSchema];
    tools.iter().map(|tool| tool.json_schema()).collect()
}

/// Returns the `{"type": "function", ...}` definitions sent to a model.
///
/// # Errors
///
/// Fails if any tool's docstring or types cannot be described.
pub fn tool_definitions() -> Result<Vec<Value>, SchemaError> {
    Ok(tool_schemas()?
        .iter()
        .map(|record| {
            serde_json::json!({
                "type": "function",
                "function": record,
            })
        })
        .collect())
}
