use crate::core::transform::Transform;
use crate::core::types::Category;

const TAB_WIDTH: usize = 4;

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new(
            "Pandoc Markdown to HTML",
            "pandoc-markdown",
            Category::Markup,
            pandoc_divs_to_html,
        )
        .describe("Converts Pandoc fenced divs (::: class ... :::) into HTML div elements")
        .input_label("Pandoc Markdown"),
        Transform::new("Indent to Tree", "indent-to-tree", Category::Markup, indent_to_tree)
            .describe(
                "Draws a dash-marked indented outline as a tree (├──, └──, │). Every non-blank \
                 line must start with '-' after its indentation; a tab counts as four spaces.",
            )
            .input_label("Indented list"),
    ]
}

fn pandoc_divs_to_html(text: &str) -> String {
    static_regex!(r"::: (.*?)[\n ]+(.*?)[\n ]+:::")
        .replace_all(text, "<div class=\"${1}\">\n${2}\n</div>")
        .into_owned()
}

struct OutlineNode<'a> {
    depth: usize,
    label: &'a str,
}

fn indentation_width(line: &str) -> usize {
    line.chars()
        .take_while(|ch| *ch == ' ' || *ch == '\t')
        .map(|ch| if ch == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn parse_outline(text: &str) -> Result<Vec<OutlineNode<'_>>, String> {
    let mut nodes = Vec::new();
    let mut open_widths: Vec<usize> = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some(label) = line.trim_start().strip_prefix('-') else {
            return Err(format!(
                "Invalid input: line {} does not start with '-': {}",
                index + 1,
                line
            ));
        };
        let width = indentation_width(line);
        while open_widths.last().is_some_and(|open| *open >= width) {
            open_widths.pop();
        }
        nodes.push(OutlineNode {
            depth: open_widths.len(),
            label: label.trim(),
        });
        open_widths.push(width);
    }
    Ok(nodes)
}

/// Whether no later sibling follows `nodes[index]` before its parent closes.
fn is_last_sibling(nodes: &[OutlineNode<'_>], index: usize) -> bool {
    let depth = nodes[index].depth;
    nodes[index + 1..]
        .iter()
        .take_while(|node| node.depth >= depth)
        .all(|node| node.depth != depth)
}

fn indent_to_tree(text: &str) -> String {
    let nodes = match parse_outline(text) {
        Ok(nodes) => nodes,
        Err(diagnostic) => return diagnostic,
    };
    // last-sibling flag of each ancestor on the current path
    let mut ancestors: Vec<bool> = Vec::new();
    let mut lines = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        ancestors.truncate(node.depth);
        let mut line: String = ancestors
            .iter()
            .map(|last| if *last { "    " } else { "│   " })
            .collect();
        let last = is_last_sibling(&nodes, index);
        line.push_str(if last { "└── " } else { "├── " });
        line.push_str(node.label);
        lines.push(line);
        ancestors.push(last);
    }
    lines.join("\n")
}
