//! Built-in amendment definitions.
//!
//! Every function in this module tree is a leaf: it takes the whole input
//! text, returns the whole output text, and turns malformed input into a
//! diagnostic string instead of failing.

/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("static pattern compiles"))
    }};
}

mod boilerplate;
mod encoding;
mod equations;
mod extension;
mod markup;
mod paper;
mod paths;
mod strings;
mod tabular;
mod values;

use crate::core::transform::Transform;

pub use encoding::{escape_html, escape_uri, unescape_html, unescape_uri};
pub use values::infer_scalar;

/// All built-in transforms in catalog order.
pub fn definitions() -> Vec<Transform> {
    let mut transforms = Vec::new();
    transforms.extend(boilerplate::definitions());
    transforms.extend(paths::definitions());
    transforms.extend(strings::definitions());
    transforms.extend(equations::definitions());
    transforms.extend(tabular::definitions());
    transforms.extend(encoding::definitions());
    transforms.extend(markup::definitions());
    transforms.extend(paper::definitions());
    transforms.extend(extension::definitions());
    transforms
}
