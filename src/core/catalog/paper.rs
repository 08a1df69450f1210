use crate::core::transform::Transform;
use crate::core::types::Category;

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("Fake List to List", "fake-list-to-list", Category::Paper, fake_list_to_list)
            .describe(
                "Turns text such as \"-Point 1 -Point 2- Point 3\" that uses dashes as bullets \
                 without newlines into a real list",
            )
            .input_label("Text"),
        Transform::new(
            "PDF Newline Remover",
            "pdf-newline-remover",
            Category::Paper,
            remove_pdf_newlines,
        )
        .describe("Removes every newline that is not preceded by a period")
        .input_label("Text from PDF"),
        Transform::new("Soft Wrapper", "soft-wrapper", Category::Paper, soft_wrap)
            .describe(
                "Replaces lone newlines with spaces so paragraphs unwrap. Blank lines and \
                 fenced Markdown code blocks are left alone.",
            )
            .input_label("Text from MD"),
    ]
}

fn fake_list_to_list(text: &str) -> String {
    text.replace('-', "\n\n - ")
}

fn remove_pdf_newlines(text: &str) -> String {
    text.split(".\n")
        .map(|sentence| sentence.replace('\n', " "))
        .collect::<Vec<_>>()
        .join(".\n")
}

/// Replace every newline with no newline on either side by a space.
fn unwrap_lone_newlines(prose: &str, out: &mut String) {
    let chars: Vec<char> = prose.chars().collect();
    for (index, ch) in chars.iter().enumerate() {
        let lone = *ch == '\n'
            && (index == 0 || chars[index - 1] != '\n')
            && chars.get(index + 1) != Some(&'\n');
        out.push(if lone { ' ' } else { *ch });
    }
}

fn soft_wrap(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for fence in static_regex!(r"(?s)```.*?```").find_iter(text) {
        unwrap_lone_newlines(&text[cursor..fence.start()], &mut out);
        out.push_str(fence.as_str());
        cursor = fence.end();
    }
    unwrap_lone_newlines(&text[cursor..], &mut out);
    out
}
