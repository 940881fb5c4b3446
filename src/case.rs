use std::sync::OnceLock;

use regex_lite::Regex;

/// Shape of a name that is already camelCase and can pass through unchanged.
fn camel_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[a-z]+([A-Z][a-z]*)*$").expect("literal regex"))
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | ' ')
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Insert `sep` before every ASCII uppercase letter of a camelCase string,
/// lower-casing that letter, then strip a leading separator.
fn separated(camel: &str, sep: char) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for ch in camel.chars() {
        if ch.is_ascii_uppercase() {
            out.push(sep);
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    if out.starts_with(sep) {
        out.remove(0);
    }
    out
}

/// Normalize a file base name to camelCase.
///
/// Names already in camelCase are returned unchanged. Anything else is
/// lower-cased, then each run of `-`, `_`, or space followed by a character
/// is collapsed into an upper-cased version of that character. A trailing
/// separator run has no character to promote and is kept as-is.
pub fn to_camel_case(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if camel_shape().is_match(name) {
        return name.to_string();
    }

    let lowered = name.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if is_separator(chars[i]) {
            let start = i;
            while i < chars.len() && is_separator(chars[i]) {
                i += 1;
            }
            if i < chars.len() {
                out.extend(chars[i].to_uppercase());
                i += 1;
            } else {
                out.extend(&chars[start..]);
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// camelCase with the first character upper-cased.
pub fn to_pascal_case(name: &str) -> String {
    upper_first(&to_camel_case(name))
}

pub fn to_snake_case(name: &str) -> String {
    separated(&to_camel_case(name), '_')
}

pub fn to_kebab_case(name: &str) -> String {
    separated(&to_camel_case(name), '-')
}

pub fn to_constant_case(name: &str) -> String {
    separated(&to_camel_case(name), '_').to_uppercase()
}

pub fn to_dot_case(name: &str) -> String {
    separated(&to_camel_case(name), '.')
}

pub fn to_path_case(name: &str) -> String {
    separated(&to_camel_case(name), '/')
}

/// Space-separated, all lower-case.
pub fn to_lower_case(name: &str) -> String {
    separated(&to_camel_case(name), ' ')
        .to_lowercase()
        .trim()
        .to_string()
}

fn spaced_words(name: &str) -> String {
    separated(&to_camel_case(name), ' ')
        .replace(['_', '-'], " ")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Space-separated with only the first character upper-cased.
pub fn to_sentence_case(name: &str) -> String {
    upper_first(&spaced_words(name))
}

/// Space-separated with every word's first character upper-cased.
pub fn to_title_case(name: &str) -> String {
    spaced_words(name)
        .split(' ')
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// All ten case forms of one file base name, derived in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseForms {
    pub camel: String,
    pub pascal: String,
    pub snake: String,
    pub kebab: String,
    pub constant: String,
    pub dot: String,
    pub path: String,
    pub lower: String,
    pub sentence: String,
    pub title: String,
}

impl CaseForms {
    pub fn from_name(name: &str) -> Self {
        Self {
            camel: to_camel_case(name),
            pascal: to_pascal_case(name),
            snake: to_snake_case(name),
            kebab: to_kebab_case(name),
            constant: to_constant_case(name),
            dot: to_dot_case(name),
            path: to_path_case(name),
            lower: to_lower_case(name),
            sentence: to_sentence_case(name),
            title: to_title_case(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_identity_on_camel_input() {
        assert_eq!(to_camel_case("myCoolThing"), "myCoolThing");
        assert_eq!(to_camel_case("already"), "already");
        assert_eq!(to_camel_case("aB"), "aB");
    }

    #[test]
    fn camel_case_collapses_separators() {
        assert_eq!(to_camel_case("my-cool_Thing"), "myCoolThing");
        assert_eq!(to_camel_case("my  report file"), "myReportFile");
        assert_eq!(to_camel_case("SCREAMING_NAME"), "screamingName");
        assert_eq!(to_camel_case("Mixed-Case name"), "mixedCaseName");
    }

    #[test]
    fn camel_case_keeps_trailing_separator_run() {
        assert_eq!(to_camel_case("foo--"), "foo--");
        assert_eq!(to_camel_case("foo_"), "foo_");
    }

    #[test]
    fn empty_name_yields_empty_forms() {
        let forms = CaseForms::from_name("");
        assert_eq!(forms.camel, "");
        assert_eq!(forms.pascal, "");
        assert_eq!(forms.snake, "");
        assert_eq!(forms.title, "");
    }

    #[test]
    fn pascal_is_upper_first_of_camel() {
        for name in ["my-cool_Thing", "report", "someFile", "a_b_c"] {
            assert_eq!(to_pascal_case(name), upper_first(&to_camel_case(name)));
        }
        assert_eq!(to_pascal_case("my-cool_Thing"), "MyCoolThing");
    }

    #[test]
    fn separator_forms_from_mixed_name() {
        assert_eq!(to_snake_case("my-cool_Thing"), "my_cool_thing");
        assert_eq!(to_kebab_case("my-cool_Thing"), "my-cool-thing");
        assert_eq!(to_constant_case("my-cool_Thing"), "MY_COOL_THING");
        assert_eq!(to_dot_case("my-cool_Thing"), "my.cool.thing");
        assert_eq!(to_path_case("my-cool_Thing"), "my/cool/thing");
    }

    #[test]
    fn no_leading_or_doubled_separator() {
        for name in ["myCoolThing", "thing", "aBcDe"] {
            let snake = to_snake_case(name);
            assert!(!snake.starts_with('_'), "leading _ in {snake}");
            assert!(!snake.contains("__"), "doubled _ in {snake}");
            let kebab = to_kebab_case(name);
            assert!(!kebab.starts_with('-'));
            assert!(!kebab.contains("--"));
        }
    }

    #[test]
    fn word_forms() {
        assert_eq!(to_lower_case("myCoolThing"), "my cool thing");
        assert_eq!(to_sentence_case("myCoolThing"), "My cool thing");
        assert_eq!(to_title_case("myCoolThing"), "My Cool Thing");
        assert_eq!(to_title_case("my-report_file"), "My Report File");
    }

    #[test]
    fn all_lower_no_separator_passes_through() {
        assert_eq!(to_camel_case("report"), "report");
        assert_eq!(to_snake_case("report"), "report");
        assert_eq!(to_title_case("report"), "Report");
    }
}
