use serde_json::{Number, Value};

/// Largest integer a JavaScript number represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse a whole (trimmed) string as a decimal number.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !static_regex!(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse the longest numeric prefix, ignoring leading whitespace and any
/// trailing garbage (`"12px"` is 12).
pub(crate) fn parse_number_prefix(text: &str) -> Option<f64> {
    let captures = static_regex!(r"^\s*([+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").captures(text)?;
    captures
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// JSON number with integral values printed without a fractional part.
pub(crate) fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Guess the JSON type of a cell: blank is null, `true`/`false` in any case
/// are booleans, decimal literals are numbers, anything else stays a
/// (trimmed) string.
pub fn infer_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    match parse_number(trimmed) {
        Some(number) => number_value(number),
        None => Value::String(trimmed.to_string()),
    }
}

/// Render a JSON value the way it reads inside a delimited row.
pub(crate) fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(display_cell).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Split CSV text into trimmed cells. Quoting is not supported.
pub(crate) fn csv_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}
