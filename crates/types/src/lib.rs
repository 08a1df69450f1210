//! Shared value types for the amender catalog.
//!
//! These are the types a front end needs to render the catalog without
//! depending on the transform implementations themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping tag attached to every transform.
///
/// The declaration order is the display order used when grouping.
/// [`Category::ForceExtension`] carries an extra convention: a transform
/// tagged with it is an identity function whose key encodes the output file
/// extension (the part before the first `-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// CSV, TSV and JSON table conversions.
    Tabular,
    /// File path convention conversions.
    Paths,
    /// General string utilities.
    Strings,
    /// Escaping and unescaping (URL, HTML).
    Encoding,
    /// Markdown, Pandoc and other document markup.
    Markup,
    /// Equations copied out of MS Word.
    WordEquations,
    /// Text pasted from PDFs and other non-plain documents.
    Paper,
    /// Code boilerplate: lists, literals, YAML/JSON scaffolding.
    Boilerplate,
    /// Declares the desired output extension; never changes the text.
    ForceExtension,
}

impl Category {
    /// Every category in declared order.
    pub const ALL: [Category; 9] = [
        Category::Tabular,
        Category::Paths,
        Category::Strings,
        Category::Encoding,
        Category::Markup,
        Category::WordEquations,
        Category::Paper,
        Category::Boilerplate,
        Category::ForceExtension,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Tabular => "Tabular",
            Category::Paths => "Paths",
            Category::Strings => "Strings",
            Category::Encoding => "Encoding",
            Category::Markup => "Markup",
            Category::WordEquations => "Word Equations",
            Category::Paper => "Paper",
            Category::Boilerplate => "Boilerplate",
            Category::ForceExtension => "Force Extension",
        }
    }

    /// Stable identifier used on the command line and in serialized output.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Tabular => "tabular",
            Category::Paths => "paths",
            Category::Strings => "strings",
            Category::Encoding => "encoding",
            Category::Markup => "markup",
            Category::WordEquations => "word-equations",
            Category::Paper => "paper",
            Category::Boilerplate => "boilerplate",
            Category::ForceExtension => "force-extension",
        }
    }

    pub fn is_force_extension(self) -> bool {
        matches!(self, Category::ForceExtension)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| {
                category.slug().eq_ignore_ascii_case(wanted)
                    || category.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let supported: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                format!(
                    "invalid category '{}'; supported values are {}",
                    value,
                    supported.join(", ")
                )
            })
    }
}

/// Display-facing description of a transform (everything except the function).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformSummary {
    pub name: String,
    pub key: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_label: Option<String>,
    pub category: Category,
}
