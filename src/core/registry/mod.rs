use crate::core::catalog;
use crate::core::pipeline::Pipeline;
use crate::core::transform::Transform;
use crate::core::types::{Category, TransformSummary};
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no transform registered under key '{0}'")]
    NotFound(String),
    #[error("duplicate transform key '{0}'")]
    DuplicateKey(String),
}

/// Builder used to collect transform definitions before freezing them.
#[derive(Default)]
pub struct RegistryBuilder {
    transforms: Vec<Transform>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, transform: Transform) -> &mut Self {
        self.transforms.push(transform);
        self
    }

    pub fn register_all<I>(&mut self, transforms: I) -> &mut Self
    where
        I: IntoIterator<Item = Transform>,
    {
        self.transforms.extend(transforms);
        self
    }

    /// Freeze the definitions, rejecting the first repeated key.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut entries = IndexMap::with_capacity(self.transforms.len());
        for transform in self.transforms {
            let key = transform.key().to_string();
            if entries.contains_key(&key) {
                return Err(RegistryError::DuplicateKey(key));
            }
            entries.insert(key, Arc::new(transform));
        }
        tracing::debug!(count = entries.len(), "registry built");
        Ok(Registry { entries })
    }
}

/// Immutable, ordered catalog of transforms keyed by their unique key.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<String, Arc<Transform>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding every built-in amendment.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        builder.register_all(catalog::definitions());
        builder.build()
    }

    /// All transforms in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &Arc<Transform>> {
        self.entries.values()
    }

    pub fn summaries(&self) -> Vec<TransformSummary> {
        self.all().map(|transform| transform.summary()).collect()
    }

    /// One bucket per category in declared order, empty buckets included.
    pub fn by_category(&self) -> IndexMap<Category, Vec<Arc<Transform>>> {
        let mut groups: IndexMap<Category, Vec<Arc<Transform>>> = Category::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        for transform in self.all() {
            if let Some(bucket) = groups.get_mut(&transform.category()) {
                bucket.push(Arc::clone(transform));
            }
        }
        groups
    }

    pub fn get(&self, key: &str) -> Option<&Arc<Transform>> {
        self.entries.get(key)
    }

    pub fn require(&self, key: &str) -> Result<Arc<Transform>, RegistryError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    /// Resolve `keys` in order into a new pipeline.
    pub fn pipeline<I, S>(&self, keys: I) -> Result<Pipeline, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pipeline = Pipeline::new();
        for key in keys {
            pipeline.append(self.require(key.as_ref())?);
        }
        Ok(pipeline)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
