use std::sync::Arc;

use crate::catalog::CatalogError;
use crate::edit::LinkPatch;
use crate::trace::{LinkTracer, TraceEvent};
use crate::value::ModelInstance;

/// A catalog lookup tagged with the selection it was issued for. A response
/// is applied only while its tag is still current, so the last request
/// always wins and a stale in-flight fetch can never overwrite state for a
/// different model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub model_type: String,
    generation: u64,
}

/// The two-step "choose model type, then choose instance" flow behind the
/// selector modal. All catalog state lives here, scoped to one open/close
/// cycle of the modal.
#[derive(Default)]
pub struct SelectorState {
    open: bool,
    selected_model_type: Option<String>,
    instances: Vec<ModelInstance>,
    loading: bool,
    generation: u64,
    tracer: Option<Arc<dyn LinkTracer>>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracer(mut self, tracer: Arc<dyn LinkTracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_model_type(&self) -> Option<&str> {
        self.selected_model_type.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.trace(TraceEvent::SelectorOpened);
    }

    /// Closes the modal and discards the model-type selection and instance
    /// list, so no partial state leaks into the next open. Bumping the
    /// generation also invalidates any fetch still in flight.
    pub fn close(&mut self) {
        self.open = false;
        self.selected_model_type = None;
        self.instances.clear();
        self.loading = false;
        self.generation = self.generation.wrapping_add(1);
        self.trace(TraceEvent::SelectorClosed);
    }

    /// Selects a model type and starts a new lookup cycle. The caller
    /// resolves the returned request (synchronously from a static list, or
    /// asynchronously from a fetch) via [`SelectorState::resolve_fetch`].
    pub fn choose_model_type(&mut self, model_type: impl Into<String>) -> FetchRequest {
        let model_type = model_type.into();
        self.selected_model_type = Some(model_type.clone());
        self.instances.clear();
        self.loading = true;
        self.generation = self.generation.wrapping_add(1);
        FetchRequest {
            model_type,
            generation: self.generation,
        }
    }

    /// Applies a lookup result. Responses whose request is no longer
    /// current are discarded; a failed lookup substitutes an empty list.
    /// Returns whether the state changed.
    pub fn resolve_fetch(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<ModelInstance>, CatalogError>,
    ) -> bool {
        let current = request.generation == self.generation
            && self.selected_model_type.as_deref() == Some(request.model_type.as_str());
        if !current {
            self.trace(TraceEvent::StaleFetchDiscarded {
                model_type: &request.model_type,
            });
            return false;
        }

        self.loading = false;
        match result {
            Ok(instances) => self.instances = instances,
            Err(error) => {
                self.trace(TraceEvent::CatalogFetchFailed {
                    model_type: &request.model_type,
                    error: &error,
                });
                self.instances = Vec::new();
            }
        }
        true
    }

    /// Exactly the loaded entries whose type matches the current selection.
    /// An instance of a different type is never shown, even if the catalog
    /// returned a mixed list.
    pub fn visible_instances(&self) -> Vec<&ModelInstance> {
        let Some(selected) = self.selected_model_type.as_deref() else {
            return Vec::new();
        };
        self.instances
            .iter()
            .filter(|instance| instance.model_type == selected)
            .collect()
    }

    /// Confirms an instance from the filtered list, mapping it to the
    /// partial edit `{href, model, referenceId}` and closing the modal.
    /// Ignored while a fetch is pending or for an unknown id.
    pub fn choose_instance(&mut self, id: &str) -> Option<LinkPatch> {
        if self.loading {
            return None;
        }

        let instance = self
            .visible_instances()
            .into_iter()
            .find(|instance| instance.id == id)?
            .clone();

        self.close();
        Some(
            LinkPatch::new()
                .href(instance.href)
                .model(instance.model_type)
                .reference_id(instance.id),
        )
    }

    fn trace(&self, event: TraceEvent<'_>) {
        if let Some(tracer) = &self.tracer {
            tracer.trace(event);
        }
    }
}
