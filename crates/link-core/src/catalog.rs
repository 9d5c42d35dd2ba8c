use crate::value::{ModelInstance, RawInstance};

/// Instance list retrieval failed. Always recoverable: the caller
/// substitutes an empty or fallback list and the widget stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    message: String,
    cause: Option<String>,
}

impl CatalogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A data source mapping a model-type name to its selectable instances.
///
/// Implementations may answer from a static list or a network call; the
/// widget always queries them off the UI thread, so they must be `Send`.
pub trait InstanceCatalog: Send + Sync {
    /// The model-type keys this catalog can be queried by, in display order.
    fn model_types(&self) -> Vec<String>;

    fn instances(&self, model_type: &str) -> Result<Vec<ModelInstance>, CatalogError>;
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<ModelInstance>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instances(
        mut self,
        instances: impl IntoIterator<Item = ModelInstance>,
    ) -> Self {
        self.entries.extend(instances);
        self
    }

    /// Adds raw API entries under the given model type, resolving missing
    /// location fields along the way.
    pub fn with_raw(
        mut self,
        model_type: &str,
        entries: impl IntoIterator<Item = RawInstance>,
    ) -> Self {
        self.entries
            .extend(entries.into_iter().map(|raw| raw.into_instance(model_type)));
        self
    }
}

impl InstanceCatalog for StaticCatalog {
    fn model_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !types.iter().any(|t| t == &entry.model_type) {
                types.push(entry.model_type.clone());
            }
        }
        types
    }

    fn instances(&self, model_type: &str) -> Result<Vec<ModelInstance>, CatalogError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.model_type == model_type)
            .cloned()
            .collect())
    }
}
