use crate::core::transform::Transform;
use std::sync::Arc;

/// Extension used when no force-extension step is present.
pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("index {index} is out of range for a pipeline of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

/// Ordered sequence of transforms applied left to right.
///
/// Steps are shared with the registry they came from. The pipeline does no
/// locking; callers that mutate it from several places must serialize access.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<Transform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<Arc<Transform>>) -> Self {
        Self { steps }
    }

    /// Add a step at the end. The same transform may appear any number of times.
    pub fn append(&mut self, transform: Arc<Transform>) {
        tracing::trace!(key = transform.key(), position = self.steps.len(), "append step");
        self.steps.push(transform);
    }

    /// Remove the step at `index`, shifting later steps down by one.
    ///
    /// Negative indices are accepted so callers can forward raw user input;
    /// they are always out of range.
    pub fn remove_at(&mut self, index: isize) -> Result<Arc<Transform>, PipelineError> {
        let len = self.steps.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|position| *position < len)
            .ok_or(PipelineError::IndexOutOfRange { index, len })?;
        let removed = self.steps.remove(position);
        tracing::trace!(key = removed.key(), position, "removed step");
        Ok(removed)
    }

    /// Fold every step over `input`. An empty pipeline returns `input` unchanged.
    pub fn run(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (position, step) in self.steps.iter().enumerate() {
            tracing::debug!(position, key = step.key(), "applying step");
            output = step.apply(&output);
        }
        output
    }

    /// Output extension requested by the pipeline; the last force-extension
    /// step wins and [`DEFAULT_EXTENSION`] is used when there is none.
    pub fn resolve_extension(&self) -> &str {
        self.steps
            .iter()
            .filter_map(|step| step.forced_extension())
            .last()
            .unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Transform>> {
        self.steps.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.key()).collect()
    }
}
