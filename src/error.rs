use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StencilError {
    #[error("Template configuration not found at {path}")]
    #[diagnostic(help("Check the configured templates file path in your settings"))]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse template configuration")]
    #[diagnostic(help("The configuration must be a JSON object mapping regex patterns to template candidates"))]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid template configuration: {reason}")]
    ConfigShape { reason: String },

    #[error("Invalid pattern '{pattern}'")]
    #[diagnostic(help("Patterns are compiled as regular expressions against the workspace-relative file path"))]
    PatternInvalid {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Failed to read template file {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template '{label}'")]
    #[diagnostic(help("Check the {{{{variable}}}} placeholders in the template file"))]
    Render {
        label: String,
        #[source]
        source: tera::Error,
    },

    #[error("File {path} is not inside the workspace root")]
    OutsideWorkspace { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StencilError>;
