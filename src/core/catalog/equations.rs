use crate::core::transform::Transform;
use crate::core::types::Category;

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("Math to Code", "to-math", Category::WordEquations, to_math)
            .describe(
                "Converts a UnicodeMath expression copied from MS Word into code: implicit \
                 multiplication becomes *, primes become _p and _q.",
            )
            .input_label("Equation"),
        Transform::new("Matrix to code", "matrix-to-code", Category::WordEquations, matrix_to_code)
            .describe(
                "Converts an MS Word matrix such as [■(1&2@3&4)] into a nested list. The \
                 brackets around the matrix may not be round and nested matrices are not supported.",
            )
            .input_label("Equation"),
        Transform::new("Unicode Copy", "unicode-copy", Category::WordEquations, unicode_copy)
            .describe(
                "Rewrites a UnicodeMath equation into plain text a search engine calculator \
                 understands. Supports elementary arithmetic, complex numbers and choose.",
            )
            .input_label("UnicodeMath code"),
        Transform::new("Transpose Matrix", "transpose-matrix", Category::WordEquations, transpose_matrix)
            .describe(
                "Transposes an MS Word matrix. The result is always wrapped in square brackets. \
                 The brackets around the input matrix may not be round.",
            )
            .input_label("Equation"),
        Transform::new("Align", "align", Category::WordEquations, align)
            .describe(
                "Wraps stacked MS Word equations (one per line, entered with SHIFT+ENTER) in a \
                 LaTeX aligned environment. Starting each line with an operator gives the \
                 best results.",
            )
            .input_label("MS Word Stacked Math"),
        Transform::new("Plus Minus", "plus-minus", Category::WordEquations, plus_minus)
            .describe(
                "Splits an expression containing ± into a complex number: the - branch is the \
                 real part and the + branch the imaginary part.",
            )
            .input_label("Equation with ±"),
    ]
}

fn to_math(text: &str) -> String {
    let replaced = text
        .trim()
        .replace('⋅', "*")
        .replace(' ', "*")
        .replace("^''", "_q")
        .replace("^'", "_p");
    let mut output = String::with_capacity(replaced.len() * 2);
    let mut previous: Option<char> = None;
    for ch in replaced.chars() {
        if ch.is_ascii_alphabetic() && previous.is_some_and(|p| p.is_ascii_alphanumeric()) {
            output.push('*');
        }
        output.push(ch);
        previous = Some(ch);
    }
    output
}

/// Cells of the first `( ... )` group, rows split on `@`, columns on `&`.
fn matrix_cells(text: &str) -> Result<Vec<Vec<&str>>, String> {
    let first = text.find('(');
    let last = text.rfind(')');
    let (Some(open), Some(close)) = (first, last) else {
        return Err(format!(
            "Invalid input: {}, {} | {}",
            char_offset(text, first),
            char_offset(text, last),
            text
        ));
    };
    let inner = if close > open { &text[open + 1..close] } else { "" };
    Ok(inner
        .split('@')
        .map(|row| row.split('&').collect())
        .collect())
}

fn char_offset(text: &str, byte_index: Option<usize>) -> i64 {
    match byte_index {
        Some(index) => text[..index].chars().count() as i64,
        None => -1,
    }
}

fn transpose_matrix(text: &str) -> String {
    let rows = match matrix_cells(text) {
        Ok(rows) => rows,
        Err(diagnostic) => return diagnostic,
    };
    let columns = rows.first().map_or(0, Vec::len);
    let transposed: Vec<String> = (0..columns)
        .map(|column| {
            rows.iter()
                .map(|row| row.get(column).copied().unwrap_or(""))
                .collect::<Vec<_>>()
                .join("&")
        })
        .collect();
    format!("[■({})]", transposed.join("@"))
}

fn matrix_to_code(text: &str) -> String {
    let rows = match matrix_cells(text) {
        Ok(rows) => rows,
        Err(diagnostic) => return diagnostic,
    };
    let converted: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(to_math).collect())
        .collect();
    match serde_json::to_string(&converted) {
        Ok(json) => json.replace('"', ""),
        Err(err) => format!("Invalid input: {}", err),
    }
}

fn unicode_copy(text: &str) -> String {
    let flattened = text
        .replace('⋅', "*")
        .replace(' ', "")
        .replace('¦', " choose ")
        .replace("log_", "log")
        .replace('〖', "(")
        .replace('〗', ")")
        .replace('█', "")
        .replace('@', "");
    static_regex!(r"\)(\d+)")
        .replace_all(&flattened, ")*${1}")
        .into_owned()
}

fn align(text: &str) -> String {
    let lines: Vec<String> = text
        .replace('\n', "\\bigm")
        .split("\\bigm")
        .map(|line| format!("& {} \\\\", fix_word_notation(line)))
        .collect();
    format!("$$\\begin{{aligned}}\n{}\n\\end{{aligned}}$$\n", lines.join("\n"))
}

fn fix_word_notation(line: &str) -> String {
    line.replace("\\{", "\\lbrace")
        .replace("\\}", "\\rbrace")
        .replace("\\emsp", "\\quad")
}

fn plus_minus(text: &str) -> String {
    let imaginary = text.replace('±', "+").replace('∓', "-");
    let real = text.replace('±', "-").replace('∓', "+");
    format!("({}) + i*({})", real, imaginary)
}
