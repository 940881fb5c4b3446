pub mod context;
pub mod file;

pub use context::{build_context, build_variables, variables_for};
pub use file::{read_template, render_template_content};

/// A candidate after its template file has been loaded and rendered.
/// `content` is the final text to insert at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub label: String,
    pub content: String,
}
