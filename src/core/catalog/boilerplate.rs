use super::values::{infer_scalar, number_value, parse_number_prefix};
use crate::core::transform::Transform;
use crate::core::types::Category;
use serde_json::Value;

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("Text to List", "text-to-list", Category::Boilerplate, text_to_list)
            .describe("print(text.split('\\n')) as a JSON array of strings")
            .input_label("Text"),
        Transform::new("Numbers to List", "num-to-list", Category::Boilerplate, numbers_to_list)
            .describe("JSON array of the leading number on each line; 0 for lines without one")
            .input_label("Text"),
        Transform::new("List to JSON", "list-to-json", Category::Boilerplate, list_to_json)
            .describe(
                "JSON array with one element per line. Blank lines become null, true/false \
                 become booleans, numbers become numbers, everything else stays a string.",
            )
            .input_label("One value per line"),
        Transform::new("JSON to List", "json-to-list", Category::Boilerplate, json_to_list)
            .describe("One line per element of a JSON array; strings are written without quotes")
            .input_label("JSON array"),
        Transform::new("List to YAML", "list-to-yaml", Category::Boilerplate, list_to_yaml)
            .describe("YAML sequence with one item per line, using the same type inference as List to JSON")
            .input_label("One value per line"),
        Transform::new("YAML to List", "yaml-to-list", Category::Boilerplate, yaml_to_list)
            .describe("One line per item of a YAML sequence")
            .input_label("YAML sequence"),
        Transform::new("JSON to YAML", "json-to-yaml", Category::Boilerplate, json_to_yaml)
            .describe("Re-serializes a JSON document as YAML")
            .input_label("JSON"),
        Transform::new("YAML to JSON", "yaml-to-json", Category::Boilerplate, yaml_to_json)
            .describe("Re-serializes a YAML document as pretty-printed JSON")
            .input_label("YAML"),
    ]
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split('\n')
}

fn text_to_list(text: &str) -> String {
    let items: Vec<&str> = lines(text).collect();
    serde_json::to_string(&items).unwrap_or_else(|err| format!("Invalid input: {}", err))
}

fn numbers_to_list(text: &str) -> String {
    let numbers: Vec<Value> = lines(text)
        .map(|line| number_value(parse_number_prefix(line).unwrap_or(0.0)))
        .collect();
    Value::Array(numbers).to_string()
}

fn inferred_items(text: &str) -> Vec<Value> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    lines(text).map(infer_scalar).collect()
}

fn list_to_json(text: &str) -> String {
    Value::Array(inferred_items(text)).to_string()
}

fn list_to_yaml(text: &str) -> String {
    serde_yaml::to_string(&inferred_items(text))
        .unwrap_or_else(|err| format!("Invalid input: {}", err))
}

fn json_to_list(text: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(text) else {
        return "Invalid JSON".to_string();
    };
    let Value::Array(items) = parsed else {
        return "Invalid input: expected a JSON array".to_string();
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn yaml_to_list(text: &str) -> String {
    let Ok(parsed) = serde_yaml::from_str::<serde_yaml::Value>(text) else {
        return "Invalid YAML".to_string();
    };
    let serde_yaml::Value::Sequence(items) = parsed else {
        return "Invalid input: expected a YAML sequence".to_string();
    };
    let mut rendered = Vec::with_capacity(items.len());
    for item in &items {
        let line = match item {
            serde_yaml::Value::String(text) => text.clone(),
            serde_yaml::Value::Null => String::new(),
            other => match serde_yaml::to_string(other) {
                Ok(yaml) => yaml.trim_end().to_string(),
                Err(err) => return format!("Invalid input: {}", err),
            },
        };
        rendered.push(line);
    }
    rendered.join("\n")
}

fn json_to_yaml(text: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(text) else {
        return "Invalid JSON".to_string();
    };
    serde_yaml::to_string(&parsed).unwrap_or_else(|err| format!("Invalid input: {}", err))
}

fn yaml_to_json(text: &str) -> String {
    let Ok(parsed) = serde_yaml::from_str::<Value>(text) else {
        return "Invalid YAML".to_string();
    };
    serde_json::to_string_pretty(&parsed).unwrap_or_else(|err| format!("Invalid input: {}", err))
}
