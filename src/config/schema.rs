use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{Result, StencilError};

/// One named template attached to a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateCandidate {
    pub label: String,
    pub template_path: String,
}

/// A pattern and its candidates, in declared order.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub pattern: String,
    pub candidates: Vec<TemplateCandidate>,
}

/// Parsed templates configuration. Rule order follows the JSON object's key
/// order and candidate order follows each array — both are what the picker
/// ultimately shows, so they are preserved end to end.
#[derive(Debug, Clone, Default)]
pub struct TemplateConfig {
    pub rules: Vec<PatternRule>,
}

impl TemplateConfig {
    /// Parse the JSON configuration text.
    ///
    /// The top level must be an object mapping regex-pattern strings to
    /// arrays of `{label, template_path}` objects. A bare candidate object
    /// is accepted as a one-element array. Malformed entries are skipped
    /// with a warning rather than failing the whole configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| StencilError::ConfigParse { source: e })?;
        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(StencilError::ConfigShape {
                    reason: format!(
                        "top level must be a JSON object keyed by pattern, got {}",
                        json_kind(&other)
                    ),
                })
            }
        };

        let mut rules = Vec::with_capacity(object.len());
        for (pattern, entry) in object {
            let candidates: Vec<TemplateCandidate> = match entry {
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| parse_candidate(&pattern, item))
                    .collect(),
                item @ Value::Object(_) => parse_candidate(&pattern, item).into_iter().collect(),
                other => {
                    warn!(
                        pattern = %pattern,
                        "skipping entry: expected template candidates, got {}",
                        json_kind(&other)
                    );
                    Vec::new()
                }
            };
            rules.push(PatternRule {
                pattern,
                candidates,
            });
        }

        Ok(Self { rules })
    }
}

fn parse_candidate(pattern: &str, value: Value) -> Option<TemplateCandidate> {
    match serde_json::from_value::<TemplateCandidate>(value) {
        Ok(candidate) if candidate.label.is_empty() || candidate.template_path.is_empty() => {
            warn!(
                pattern = %pattern,
                "skipping candidate with empty label or template_path"
            );
            None
        }
        Ok(candidate) => Some(candidate),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "skipping malformed candidate");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
