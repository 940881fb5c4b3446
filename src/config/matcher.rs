use regex_lite::Regex;
use tracing::warn;

use crate::config::schema::{TemplateCandidate, TemplateConfig};
use crate::error::{Result, StencilError};

/// Compile one configured pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| StencilError::PatternInvalid {
        pattern: pattern.to_string(),
        source,
    })
}

/// Collect every candidate whose pattern matches the workspace-relative path.
///
/// Rules are evaluated in declaration order and each matching rule
/// contributes all of its candidates in order; the concatenation across
/// rules is exactly the order the picker shows. Patterns match anywhere in
/// the path (no implicit anchoring), and a pattern that fails to compile is
/// skipped without affecting the others.
pub fn matching_candidates<'a>(
    config: &'a TemplateConfig,
    relative_path: &str,
) -> Vec<&'a TemplateCandidate> {
    let mut matched = Vec::new();
    for rule in &config.rules {
        let regex = match compile_pattern(&rule.pattern) {
            Ok(regex) => regex,
            Err(e) => {
                warn!(error = %e, "skipping pattern");
                continue;
            }
        };
        if regex.is_match(relative_path) {
            matched.extend(rule.candidates.iter());
        }
    }
    matched
}
