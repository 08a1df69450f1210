use crate::core::transform::Transform;
use crate::core::types::Category;

/// Extensions a pipeline can force on its saved output.
const FORCED_EXTENSIONS: [&str; 5] = ["csv", "json", "md", "html", "tex"];

pub(super) fn definitions() -> Vec<Transform> {
    FORCED_EXTENSIONS
        .iter()
        .map(|ext| {
            Transform::new(
                format!(".{}", ext),
                format!("{}-ext", ext),
                Category::ForceExtension,
                keep,
            )
            .describe(format!("Changes the download format to .{}", ext))
        })
        .collect()
}

fn keep(text: &str) -> String {
    text.to_string()
}
