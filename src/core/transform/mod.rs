use crate::core::types::{Category, TransformSummary};
use std::fmt;

/// Signature every amendment implements.
///
/// Implementations must be total: malformed input is reported by returning a
/// diagnostic string, never by panicking.
pub type ApplyFn = fn(&str) -> String;

/// A named, pure text amendment.
#[derive(Clone)]
pub struct Transform {
    name: String,
    key: String,
    description: String,
    input_label: Option<String>,
    category: Category,
    apply: ApplyFn,
}

impl Transform {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        category: Category,
        apply: ApplyFn,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            description: String::new(),
            input_label: None,
            category,
            apply,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn input_label(mut self, label: impl Into<String>) -> Self {
        self.input_label = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_hint(&self) -> Option<&str> {
        self.input_label.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Run the amendment on `input`.
    pub fn apply(&self, input: &str) -> String {
        (self.apply)(input)
    }

    /// Extension token encoded in the key of a force-extension transform.
    ///
    /// Returns `None` for every other category; the key is never inspected
    /// unless the category says it carries an extension.
    pub fn forced_extension(&self) -> Option<&str> {
        if !self.category.is_force_extension() {
            return None;
        }
        self.key.split(EXTENSION_DELIMITER).next()
    }

    pub fn summary(&self) -> TransformSummary {
        TransformSummary {
            name: self.name.clone(),
            key: self.key.clone(),
            description: self.description.clone(),
            input_label: self.input_label.clone(),
            category: self.category,
        }
    }
}

/// Separates the extension token from the rest of a force-extension key.
pub const EXTENSION_DELIMITER: char = '-';

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
