//! Smart templates for newly created files.
//!
//! When the host editor reports a freshly created, still-empty file, this
//! crate matches the file's workspace-relative path against the patterns in
//! a user-maintained JSON configuration, loads every matching template file,
//! and renders each one against a per-file variable context (case-converted
//! name forms, path fragments, date, user metadata). The host shows the
//! resulting labels in its picker and inserts the chosen content; everything
//! UI- and editor-shaped stays on the host's side of the boundary.

pub mod case;
pub mod config;
pub mod error;
pub mod paths;
pub mod render;
pub mod session;

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{load_config, matching_candidates};
use crate::error::{Result, StencilError};
use crate::paths::{resolve_path, workspace_relative};
use crate::render::{build_context, read_template, render_template_content, variables_for};

pub use crate::render::RenderedTemplate;
pub use crate::session::{OfferGate, SessionLedger};

/// Inputs for one resolution pass over a newly created file.
pub struct ResolveOptions<'a> {
    /// Absolute path of the newly created file.
    pub target_file: &'a Path,
    /// Absolute path of the workspace root.
    pub workspace_root: &'a Path,
    /// Configured templates-file path: absolute, `~`-prefixed, or relative
    /// to the workspace root.
    pub config_path: &'a str,
    /// User-declared metadata (owner, oncall, author, ...), merged into the
    /// variables last so it overrides any derived key.
    pub user_data: Map<String, Value>,
}

/// Resolve every template candidate applicable to a newly created file,
/// with the full error taxonomy exposed.
///
/// Fails only on whole-resolution problems: missing/unreadable/malformed
/// configuration, or a target outside the workspace root. Per-candidate
/// problems (unreadable template file, render failure) drop that one
/// candidate with a warning and never affect its siblings.
pub fn try_resolve_templates(options: &ResolveOptions) -> Result<Vec<RenderedTemplate>> {
    // Re-read the configuration every time so edits apply immediately.
    let config_file = resolve_path(options.config_path, options.workspace_root);
    let config = load_config(&config_file)?;

    let relative_path = workspace_relative(options.target_file, options.workspace_root)
        .ok_or_else(|| StencilError::OutsideWorkspace {
            path: options.target_file.to_path_buf(),
        })?;

    let candidates = matching_candidates(&config, &relative_path);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    // One variable context per file, shared by every candidate render.
    let variables = variables_for(&relative_path, &options.user_data);
    let context = build_context(&variables);

    let mut rendered = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let template_file = resolve_path(&candidate.template_path, options.workspace_root);
        let raw = match read_template(&template_file) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(label = %candidate.label, error = %e, "dropping candidate");
                continue;
            }
        };
        match render_template_content(&raw, &candidate.label, &context) {
            Ok(content) => rendered.push(RenderedTemplate {
                label: candidate.label.clone(),
                content,
            }),
            Err(e) => warn!(label = %candidate.label, error = %e, "dropping candidate"),
        }
    }

    Ok(rendered)
}

/// Never-fatal variant of [`try_resolve_templates`].
///
/// An absent configuration file simply means the feature is not set up for
/// this workspace; any other failure is logged. Either way the host gets an
/// empty list, which it must treat as "do not show the picker".
pub fn resolve_templates(options: &ResolveOptions) -> Vec<RenderedTemplate> {
    match try_resolve_templates(options) {
        Ok(rendered) => rendered,
        Err(StencilError::ConfigNotFound { path }) => {
            debug!(path = %path.display(), "no templates configuration");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "template resolution failed");
            Vec::new()
        }
    }
}

/// Resolve templates at most once per file identity.
///
/// The gate is marked before resolution runs, so repeated open events for
/// the same file produce nothing even when the first pass had no candidates.
pub fn offer_templates(options: &ResolveOptions, gate: &mut dyn OfferGate) -> Vec<RenderedTemplate> {
    let id = options.target_file.to_string_lossy();
    if gate.has_been_offered(&id) {
        return Vec::new();
    }
    gate.mark_offered(&id);
    resolve_templates(options)
}
