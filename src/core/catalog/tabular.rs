use super::values::{
    csv_rows, display_cell, infer_scalar, number_value, parse_number, parse_number_prefix,
};
use crate::core::transform::Transform;
use crate::core::types::Category;
use serde_json::{Map, Value};

const KEY_VALUE_RULES: &str = "First column are the keys, second column are the values. Keys \
     are always strings. Values become numbers when possible, TRUE or FALSE (any case) become \
     booleans and blank values become null. Keys and values are trimmed first.";

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("TSV to CSV", "tsv-to-csv", Category::Tabular, tsv_to_csv)
            .describe("Converts tab separated values into CSV. Assumes no cell contains a comma.")
            .input_label("TSV"),
        Transform::new("CSV to TSV", "csv-to-tsv", Category::Tabular, csv_to_tsv)
            .describe("Converts CSV into tab separated values. Assumes no cell contains a comma.")
            .input_label("CSV"),
        Transform::new("TSV to JSON Blank Null", "tsv-to-json", Category::Tabular, tsv_to_json)
            .describe(format!("Converts a two column TSV into a JSON object. {}", KEY_VALUE_RULES))
            .input_label("TSV"),
        Transform::new("CSV to JSON Blank Null", "csv-to-json", Category::Tabular, csv_to_json)
            .describe(format!("Converts a two column CSV into a JSON object. {}", KEY_VALUE_RULES))
            .input_label("CSV"),
        Transform::new(
            "CSV to JSON Strings only",
            "csv-to-json-strings",
            Category::Tabular,
            csv_to_json_strings,
        )
        .describe(
            "Converts a two column CSV into a JSON object. First column are the keys, second \
             column are the values. Everything stays a string.",
        )
        .input_label("CSV"),
        Transform::new("Space to Tabs", "space-to-tabs", Category::Tabular, space_to_tabs)
            .describe("Any run of four or more spaces becomes one tab"),
        Transform::new(
            "Extract Number From CSV",
            "extract-number-from-csv",
            Category::Tabular,
            extract_number_from_csv,
        )
        .describe(
            "Replaces every cell with the first number it contains, so a cell holding \
             \"val = 333\" becomes 333. Cells without a number become empty.",
        )
        .input_label("CSV"),
        Transform::new(
            "Remove TEMP and blank columns from CSV",
            "select-from-csv",
            Category::Tabular,
            select_from_csv,
        )
        .describe("Removes every column whose header is blank or starts with TEMP (case sensitive)")
        .input_label("CSV with header"),
        Transform::new("To Markdown Table", "md-tbl", Category::Tabular, to_markdown_table)
            .describe("Converts a CSV to a Markdown table; the first row is the header")
            .input_label("CSV"),
        Transform::new("To LaTeX Table", "tex-tbl", Category::Tabular, to_latex_table)
            .describe("Converts a CSV to a LaTeX tabular; the first row is the header")
            .input_label("CSV"),
        Transform::new("CSV to JSON Rows", "csv-to-json-real", Category::Tabular, csv_to_json_rows)
            .describe(
                "Converts a CSV with a header into a JSON array with one object per row. The \
                 first data row decides whether each column holds numbers or strings.",
            )
            .input_label("CSV with header"),
        Transform::new("JSON 2D list to CSV", "json-2d-csv", Category::Tabular, json_2d_to_csv)
            .describe("Converts a 2D JSON array to a CSV, padding short rows with empty cells")
            .input_label("JSON 2D array"),
    ]
}

fn tsv_to_csv(text: &str) -> String {
    text.replace('\t', ",")
}

fn csv_to_tsv(text: &str) -> String {
    text.replace(',', "\t")
}

/// Two column key/value rows into one JSON object. Blank lines are skipped.
/// Typed mode infers scalar types and maps a missing value to null; string
/// mode keeps text and skips rows without a value.
fn key_value_json(text: &str, typed: bool) -> String {
    let mut object = Map::new();
    for row in csv_rows(text.trim()) {
        let mut cells = row.into_iter();
        let Some(key) = cells.next() else { continue };
        let value = cells.next();
        if key.is_empty() && value.is_none() {
            continue;
        }
        match (typed, value) {
            (true, value) => {
                object.insert(key, infer_scalar(value.as_deref().unwrap_or("")));
            }
            (false, Some(value)) => {
                object.insert(key, Value::String(value));
            }
            (false, None) => {}
        }
    }
    Value::Object(object).to_string()
}

fn csv_to_json(text: &str) -> String {
    key_value_json(text, true)
}

fn tsv_to_json(text: &str) -> String {
    key_value_json(&tsv_to_csv(text), true)
}

fn csv_to_json_strings(text: &str) -> String {
    key_value_json(text, false)
}

fn space_to_tabs(text: &str) -> String {
    static_regex!(r" {4,}").replace_all(text, "\t").into_owned()
}

fn extract_number_from_csv(text: &str) -> String {
    let number = static_regex!(r"-?\d+(\.\d+)?");
    text.split('\n')
        .map(|line| {
            line.split(',')
                .map(|cell| number.find(cell).map_or("", |found| found.as_str()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn select_from_csv(text: &str) -> String {
    if text.trim().is_empty() {
        return "Invalid input".to_string();
    }
    let rows = csv_rows(text);
    let dropped: Vec<bool> = rows[0]
        .iter()
        .map(|header| header.is_empty() || header.starts_with("TEMP"))
        .collect();
    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(index, _)| !dropped.get(*index).copied().unwrap_or(false))
                .map(|(_, cell)| cell.as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV rows padded with empty cells to the width of the widest row.
fn padded_rows(text: &str) -> (Vec<Vec<String>>, usize) {
    let mut rows = csv_rows(text);
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    (rows, width)
}

fn to_markdown_table(text: &str) -> String {
    let (rows, width) = padded_rows(text);
    let mut table = String::new();
    for (index, row) in rows.iter().enumerate() {
        table.push_str(&format!("| {} |\n", row.join(" | ")));
        if index == 0 {
            table.push_str(&format!("| {}\n", "--- |".repeat(width)));
        }
    }
    table
}

fn to_latex_table(text: &str) -> String {
    let (rows, width) = padded_rows(text);
    let mut table = format!("\\begin{{tabular}}{{{}}}\n", "c ".repeat(width));
    for (index, row) in rows.iter().enumerate() {
        table.push_str(&row.join(" & "));
        table.push_str(" \\\\\n");
        if index == 0 {
            table.push_str("\\hline\n");
        }
    }
    table.push_str("\\end{tabular}");
    table
}

#[derive(Clone, Copy, PartialEq)]
enum ColumnKind {
    Number,
    Text,
}

fn csv_to_json_rows(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return "Invalid input: expected a header line followed by at least one row".to_string();
    }
    let headers: Vec<&str> = lines[0].split(',').collect();
    let kinds: Vec<ColumnKind> = lines[1]
        .split(',')
        .map(|cell| {
            if cell.trim().is_empty() || parse_number(cell).is_some() {
                ColumnKind::Number
            } else {
                ColumnKind::Text
            }
        })
        .collect();

    let rows: Vec<Value> = lines[1..]
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            let mut object = Map::new();
            for (column, header) in headers.iter().enumerate() {
                let cell = cells.get(column).copied();
                let kind = kinds.get(column).copied().unwrap_or(ColumnKind::Number);
                let value = match (kind, cell) {
                    (ColumnKind::Number, cell) => {
                        number_value(cell.and_then(parse_number_prefix).unwrap_or(0.0))
                    }
                    (ColumnKind::Text, Some(cell)) => Value::String(cell.to_string()),
                    (ColumnKind::Text, None) => continue,
                };
                object.insert(header.to_string(), value);
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(rows).to_string()
}

fn json_2d_to_csv(text: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(text) else {
        return "Invalid JSON".to_string();
    };
    let Value::Array(rows) = parsed else {
        return "Not a 2D array".to_string();
    };
    let mut grid = Vec::with_capacity(rows.len());
    for row in &rows {
        let Value::Array(cells) = row else {
            return "Not a 2D array".to_string();
        };
        grid.push(cells.iter().map(display_cell).collect::<Vec<_>>());
    }
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    grid.into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row.join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
