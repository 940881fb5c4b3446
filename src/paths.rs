use std::path::{Path, PathBuf};

/// Resolve a possibly-relative path string against the workspace root.
///
/// A `~` prefix expands to the user's home directory. Absolute paths pass
/// through unchanged; everything else is joined onto the workspace root.
/// No existence check happens here — callers attempt the read and treat
/// failure as that candidate being unusable.
pub fn resolve_path(input: &str, workspace_root: &Path) -> PathBuf {
    let expanded = expand_home(input);
    if expanded.is_absolute() {
        expanded
    } else {
        workspace_root.join(expanded)
    }
}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(input)
}

/// The target's path relative to the workspace root, forward-slash separated
/// with no leading slash. `None` when the target is not under the root.
pub fn workspace_relative(target: &Path, workspace_root: &Path) -> Option<String> {
    let relative = target.strip_prefix(workspace_root).ok()?;
    let segments: Vec<&str> = relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    Some(segments.join("/"))
}
