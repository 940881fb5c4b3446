use std::path::Path;

use tera::{Context, Tera};

use crate::error::{Result, StencilError};

/// Read a template file's raw text.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| StencilError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one template's `{{ variable }}` placeholders against the context.
pub fn render_template_content(raw: &str, label: &str, context: &Context) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template("__template__", raw)
        .map_err(|source| StencilError::Render {
            label: label.to_string(),
            source,
        })?;

    tera.render("__template__", context)
        .map_err(|source| StencilError::Render {
            label: label.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(key: &str, value: &str) -> Context {
        let mut context = Context::new();
        context.insert(key, value);
        context
    }

    #[test]
    fn substitutes_placeholders() {
        let context = context_with("file_name_pascal_case", "Foo");
        let rendered =
            render_template_content("// {{file_name_pascal_case}}", "Test", &context).unwrap();
        assert_eq!(rendered, "// Foo");
    }

    #[test]
    fn plain_text_passes_through() {
        let context = Context::new();
        let rendered = render_template_content("no placeholders here", "Test", &context).unwrap();
        assert_eq!(rendered, "no placeholders here");
    }

    #[test]
    fn unclosed_placeholder_is_a_render_error() {
        let context = Context::new();
        let result = render_template_content("{{ broken", "Test", &context);
        assert!(matches!(result, Err(StencilError::Render { .. })));
    }

    #[test]
    fn missing_template_file_is_a_read_error() {
        let result = read_template(Path::new("/definitely/not/here.mustache"));
        assert!(matches!(result, Err(StencilError::TemplateRead { .. })));
    }
}
