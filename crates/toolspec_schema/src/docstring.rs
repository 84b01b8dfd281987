//! Docstring section parsing.
//!
//! Docstrings follow a fixed grammar: a free-form main description, then
//! optional `Args:`, `Returns:` and `Raises:` sections, each introduced by a
//! line holding only its keyword.
//!
//! ```text
//! Fetch the current weather.
//!
//! Args:
//!     city: Name of the city
//!     unit: Temperature unit (choices: ["celsius", "fahrenheit"])
//!
//! Returns:
//!     The temperature in the requested unit.
//! ```
//!
//! Each `Args:` line is `name: description`, split at the first colon. A
//! description may end with a `(choices: [...])` annotation holding a JSON
//! array of strings, which is lifted out into [`ParamDoc::choices`].

use crate::error::DocstringError;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

const ARGS: &str = "Args:";
const RETURNS: &str = "Returns:";
const RAISES: &str = "Raises:";

/// Width tabs expand to before indentation is measured.
const TAB_WIDTH: usize = 8;

static CHOICES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(choices:\s*([^)]+)\)\s*$").expect("choices pattern is a valid regex")
});

/// Documentation for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    /// Description with any choices annotation removed.
    pub description: String,
    /// Legal values from a trailing `(choices: [...])` annotation.
    pub choices: Option<Vec<String>>,
}

/// The sections extracted from a docstring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocstringSections {
    /// Text before the first section keyword.
    pub description: Option<String>,
    /// `Args:` entries keyed by parameter name, in order of appearance.
    pub parameters: IndexMap<String, ParamDoc>,
    /// Body of the `Returns:` section.
    pub returns: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Description,
    Args,
    Returns,
    Raises,
}

/// Parses a docstring into its sections.
///
/// Empty input yields empty sections; deciding whether a missing docstring
/// is acceptable is left to the caller.
pub fn parse(text: &str) -> Result<DocstringSections, DocstringError> {
    let mut args = Vec::new();
    let mut returns = Vec::new();
    let mut section = Section::Description;

    for line in text.lines() {
        section = match line.trim() {
            ARGS => Section::Args,
            RETURNS => Section::Returns,
            RAISES => Section::Raises,
            _ => {
                match section {
                    Section::Args => args.push(line),
                    Section::Returns => returns.push(line),
                    Section::Description | Section::Raises => {}
                }
                continue;
            }
        };
    }

    Ok(DocstringSections {
        description: main_description(text),
        parameters: parse_args(&args)?,
        returns: join_block(&returns),
    })
}

/// Text up to the first section keyword, wherever it occurs.
fn main_description(text: &str) -> Option<String> {
    let end = [ARGS, RETURNS, RAISES]
        .into_iter()
        .filter_map(|keyword| text.find(keyword))
        .min()
        .unwrap_or(text.len());
    non_empty(text[..end].trim())
}

fn parse_args(lines: &[&str]) -> Result<IndexMap<String, ParamDoc>, DocstringError> {
    let mut parameters = IndexMap::new();

    for line in lines.iter().copied().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        let Some((name, description)) = line.split_once(':') else {
            return Err(DocstringError::MissingSeparator {
                line: line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(DocstringError::EmptyParameterName {
                line: line.to_string(),
            });
        }

        let doc = extract_choices(name, description.trim())?;
        parameters.insert(name.to_string(), doc);
    }

    Ok(parameters)
}

/// Splits a trailing `(choices: [...])` annotation off a description.
fn extract_choices(parameter: &str, description: &str) -> Result<ParamDoc, DocstringError> {
    let Some((annotation_start, literal)) = CHOICES
        .captures(description)
        .and_then(|caps| Some((caps.get(0)?.start(), caps.get(1)?.as_str())))
    else {
        return Ok(ParamDoc {
            description: description.to_string(),
            choices: None,
        });
    };

    let choices: Vec<String> =
        serde_json::from_str(literal).map_err(|source| DocstringError::InvalidChoices {
            parameter: parameter.to_string(),
            source,
        })?;

    Ok(ParamDoc {
        description: description[..annotation_start].trim().to_string(),
        choices: Some(
            choices
                .into_iter()
                .map(|choice| choice.trim().to_string())
                .collect(),
        ),
    })
}

fn join_block(lines: &[&str]) -> Option<String> {
    let joined = lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");
    non_empty(joined.trim())
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Normalizes docstring indentation.
///
/// Tabs are expanded, the first line loses its leading whitespace, the
/// indentation shared by all later non-blank lines is removed, and leading
/// and trailing blank lines are dropped. This lets docstrings be written
/// indented inside source code (or collected from `///` comments, which
/// keep the space after the slashes) and still parse line by line.
#[must_use]
pub fn clean_docstring(text: &str) -> String {
    let expanded = text.replace('\t', &" ".repeat(TAB_WIDTH));
    let lines: Vec<&str> = expanded.lines().collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = lines
        .iter()
        .copied()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.trim_start()
            } else if line.trim().is_empty() {
                ""
            } else {
                line.get(margin..).unwrap_or_else(|| line.trim_start())
            }
        })
        .collect();

    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }
    let first = cleaned
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(cleaned.len());

    cleaned[first..].join("\n")
}
