pub mod matcher;
pub mod schema;

use std::path::Path;

use crate::error::{Result, StencilError};

pub use matcher::matching_candidates;
pub use schema::{PatternRule, TemplateCandidate, TemplateConfig};

/// Load and parse the templates configuration from disk.
///
/// This is called on every resolution — the file is never cached, so edits
/// take effect on the next file-creation event.
pub fn load_config(path: &Path) -> Result<TemplateConfig> {
    if !path.exists() {
        return Err(StencilError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| StencilError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    TemplateConfig::from_json(&content)
}
