use crate::core::transform::Transform;
use crate::core::types::Category;
use indexmap::IndexSet;
use serde_json::Value;

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("Strip surrounding quotes", "strip-quotes", Category::Strings, strip_quotes)
            .describe("Strips leading and trailing runs of single or double quotation marks"),
        Transform::new("To Upper Case", "upper", Category::Strings, to_upper)
            .describe("upper(text)")
            .input_label("Text"),
        Transform::new("To Lower Case", "lower", Category::Strings, to_lower)
            .describe("lower(text)")
            .input_label("Text"),
        Transform::new("Literal to String", "literal-to-string", Category::Strings, literal_to_string)
            .describe("Interprets escape sequences in a string literal body (the inverse of String to Literal)")
            .input_label("Escaped string"),
        Transform::new("String to Literal", "string-to-literal", Category::Strings, string_to_literal)
            .describe("Quotes and escapes the text as a JSON string literal")
            .input_label("Text"),
        Transform::new("Remove Duplicates", "dupe-remover", Category::Strings, remove_duplicate_lines)
            .describe("Removes repeated lines, keeping the first occurrence and the original order"),
        Transform::new("String Counter", "string-counter", Category::Strings, string_counter)
            .describe("Lists every character with its negative and positive index")
            .input_label("Text"),
        Transform::new(
            "Strip Leading and Trailing Spaces",
            "strip-leading-spaces",
            Category::Strings,
            strip_lines,
        )
        .describe("Trims whitespace from both ends of every line"),
        Transform::new("Strip", "strip", Category::Strings, strip)
            .describe("Trims whitespace from both ends of the text"),
        Transform::new("Collapse Spaces", "collapse-spaces", Category::Strings, collapse_spaces)
            .describe("Collapses every run of spaces and tabs into a single space"),
    ]
}

fn strip_quotes(text: &str) -> String {
    text.trim_matches(|ch: char| ch == '\'' || ch == '"').to_string()
}

fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

fn literal_to_string(text: &str) -> String {
    let document = format!("[\"{}\"]", text.replace('"', "\\\""));
    match serde_json::from_str::<Vec<Value>>(&document) {
        Ok(items) => match items.first() {
            Some(Value::String(decoded)) => decoded.clone(),
            _ => "Invalid string literal".to_string(),
        },
        Err(_) => "Invalid string literal".to_string(),
    }
}

fn string_to_literal(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

fn remove_duplicate_lines(text: &str) -> String {
    let unique: IndexSet<&str> = text.split('\n').collect();
    unique.into_iter().collect::<Vec<_>>().join("\n")
}

fn string_counter(text: &str) -> String {
    let total = text.chars().count();
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            format!(
                "-{} | {}: {}",
                total - index,
                index,
                Value::String(ch.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

fn strip(text: &str) -> String {
    text.trim().to_string()
}

fn collapse_spaces(text: &str) -> String {
    static_regex!(r"[ \t]+").replace_all(text, " ").into_owned()
}
