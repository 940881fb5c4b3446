use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tera::Context;

use crate::case::CaseForms;

/// The file's base name: final path segment, truncated at the first dot.
/// `"src/my.component.ts"` has base name `"my"`.
fn base_name(relative_path: &str) -> &str {
    let file_name = relative_path.rsplit('/').next().unwrap_or("");
    file_name.split('.').next().unwrap_or("")
}

/// Directory component of the relative path; empty for root-level files.
fn directory_of(relative_path: &str) -> String {
    match relative_path.rfind('/') {
        Some(idx) => relative_path[..idx].to_string(),
        None => String::new(),
    }
}

/// The relative path with its last two segments dropped. Root-level files
/// and files one directory deep both come out empty.
fn parent_of(relative_path: &str) -> String {
    let segments: Vec<&str> = relative_path.split('/').collect();
    if segments.len() <= 2 {
        return String::new();
    }
    segments[..segments.len() - 2].join("/")
}

/// Build the full substitution mapping for one target file at a given date.
///
/// Derived keys come first; `user_data` is merged last so user-declared
/// values win on collision. The mapping is rebuilt per file-open event and
/// never cached (both `date` and the target change every time).
pub fn build_variables(
    relative_path: &str,
    date: NaiveDate,
    user_data: &Map<String, Value>,
) -> BTreeMap<String, Value> {
    let mut vars = BTreeMap::new();

    vars.insert("file_path".into(), Value::String(relative_path.to_string()));
    vars.insert("file_directory".into(), Value::String(directory_of(relative_path)));
    vars.insert("parent_directory".into(), Value::String(parent_of(relative_path)));
    vars.insert("date".into(), Value::String(date.format("%Y-%m-%d").to_string()));

    let forms = CaseForms::from_name(base_name(relative_path));
    vars.insert("file_name_camel_case".into(), Value::String(forms.camel));
    vars.insert("file_name_pascal_case".into(), Value::String(forms.pascal));
    vars.insert("file_name_snake_case".into(), Value::String(forms.snake));
    vars.insert("file_name_kebab_case".into(), Value::String(forms.kebab));
    vars.insert("file_name_constant_case".into(), Value::String(forms.constant));
    vars.insert("file_name_dot_case".into(), Value::String(forms.dot));
    vars.insert("file_name_path_case".into(), Value::String(forms.path));
    vars.insert("file_name_lower_case".into(), Value::String(forms.lower));
    vars.insert("file_name_sentence_case".into(), Value::String(forms.sentence));
    vars.insert("file_name_title_case".into(), Value::String(forms.title));

    for (key, value) in user_data {
        vars.insert(key.clone(), value.clone());
    }

    vars
}

/// `build_variables` with today's local date.
pub fn variables_for(
    relative_path: &str,
    user_data: &Map<String, Value>,
) -> BTreeMap<String, Value> {
    build_variables(relative_path, chrono::Local::now().date_naive(), user_data)
}

/// Build a Tera context from the variable mapping.
pub fn build_context(variables: &BTreeMap<String, Value>) -> Context {
    let mut context = Context::new();
    for (key, value) in variables {
        context.insert(key, value);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn path_fragments_for_nested_file() {
        let vars = build_variables("a/b/c.ts", date(), &Map::new());
        assert_eq!(vars["file_path"], "a/b/c.ts");
        assert_eq!(vars["file_directory"], "a/b");
        assert_eq!(vars["parent_directory"], "a");
    }

    #[test]
    fn path_fragments_for_shallow_files() {
        let vars = build_variables("c.ts", date(), &Map::new());
        assert_eq!(vars["file_directory"], "");
        assert_eq!(vars["parent_directory"], "");

        let vars = build_variables("a/c.ts", date(), &Map::new());
        assert_eq!(vars["file_directory"], "a");
        assert_eq!(vars["parent_directory"], "");
    }

    #[test]
    fn date_is_iso_formatted() {
        let vars = build_variables("c.ts", date(), &Map::new());
        assert_eq!(vars["date"], "2026-03-14");
    }

    #[test]
    fn case_forms_come_from_base_name() {
        let vars = build_variables("src/my-cool_Thing.spec.ts", date(), &Map::new());
        assert_eq!(vars["file_name_camel_case"], "myCoolThing");
        assert_eq!(vars["file_name_pascal_case"], "MyCoolThing");
        assert_eq!(vars["file_name_snake_case"], "my_cool_thing");
        assert_eq!(vars["file_name_kebab_case"], "my-cool-thing");
        assert_eq!(vars["file_name_constant_case"], "MY_COOL_THING");
        assert_eq!(vars["file_name_dot_case"], "my.cool.thing");
        assert_eq!(vars["file_name_path_case"], "my/cool/thing");
        assert_eq!(vars["file_name_lower_case"], "my cool thing");
        assert_eq!(vars["file_name_sentence_case"], "My cool thing");
        assert_eq!(vars["file_name_title_case"], "My Cool Thing");
    }

    #[test]
    fn dotted_file_name_truncates_at_first_dot() {
        let vars = build_variables("src/my.component.ts", date(), &Map::new());
        assert_eq!(vars["file_name_pascal_case"], "My");
    }

    #[test]
    fn user_data_overrides_derived_keys() {
        let mut user = Map::new();
        user.insert("owner".into(), Value::String("platform-team".into()));
        user.insert("date".into(), Value::String("frozen".into()));
        let vars = build_variables("c.ts", date(), &user);
        assert_eq!(vars["owner"], "platform-team");
        assert_eq!(vars["date"], "frozen");
    }

    #[test]
    fn empty_base_name_yields_empty_forms() {
        let vars = build_variables("", date(), &Map::new());
        assert_eq!(vars["file_name_camel_case"], "");
        assert_eq!(vars["file_name_title_case"], "");
    }
}
