use std::rc::Rc;
use std::sync::Arc;

use gpui::{App, AppContext, Context, Entity, Window};
use gpui_component::input::{InputEvent, InputState};
use gpui_link_core::{
    InstanceCatalog, LinkEditState, LinkPatch, LinkTracer, LinkType, LinkValue, LogTracer,
    SelectorState, StaticCatalog, TraceEvent,
};

/// State of one ComplexLink widget instance.
///
/// Owns the local edit mirror of the host value and the cascading selector.
/// Local edits flow to the host through the `on_change` callback; host
/// pushes flow back in through [`ComplexLinkState::sync_value`], which never
/// re-emits.
pub struct ComplexLinkState {
    default_type: LinkType,
    edit: LinkEditState,
    selector: SelectorState,
    catalog: Arc<dyn InstanceCatalog>,
    tracer: Option<Arc<dyn LinkTracer>>,
    href_input: Entity<InputState>,
    on_change: Option<Rc<dyn Fn(&LinkValue, &mut App)>>,
}

impl ComplexLinkState {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let href_input = cx.new(|cx| InputState::new(window, cx).placeholder("Enter URL…"));

        cx.subscribe(&href_input, |this: &mut Self, input, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change { .. }) {
                let href = input.read(cx).value().to_string();
                // Programmatic syncs write the same text back; only a real
                // edit may propose a change, so sync can never loop.
                if href != this.edit.href() {
                    this.propose(LinkPatch::new().href(href), cx);
                }
            }
        })
        .detach();

        let tracer: Arc<dyn LinkTracer> = Arc::new(LogTracer);
        Self {
            default_type: LinkType::Model,
            edit: LinkEditState::from_value(None, LinkType::Model),
            selector: SelectorState::new().with_tracer(tracer.clone()),
            catalog: Arc::new(StaticCatalog::new()),
            tracer: Some(tracer),
            href_input,
            on_change: None,
        }
    }

    /// The link type used when the host has not supplied a value yet.
    pub fn default_type(mut self, default_type: LinkType) -> Self {
        self.default_type = default_type;
        self.edit = LinkEditState::from_value(None, default_type);
        self
    }

    /// Seeds the local state from the value the host already stores, before
    /// the first render. Later host pushes go through
    /// [`ComplexLinkState::sync_value`] instead.
    pub fn default_value(
        mut self,
        value: &LinkValue,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        self.edit = LinkEditState::from_value(Some(value), self.default_type);
        let href = self.edit.href().to_string();
        self.href_input
            .update(cx, |state, cx| state.set_value(href, window, cx));
        self
    }

    pub fn catalog(mut self, catalog: Arc<dyn InstanceCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the default `log`-backed sink.
    pub fn tracer(mut self, tracer: Arc<dyn LinkTracer>) -> Self {
        self.tracer = Some(tracer.clone());
        self.selector = SelectorState::new().with_tracer(tracer);
        self
    }

    /// Called with the full candidate value on every accepted edit.
    pub fn on_change(mut self, on_change: impl Fn(&LinkValue, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn edit(&self) -> &LinkEditState {
        &self.edit
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn href_input(&self) -> &Entity<InputState> {
        &self.href_input
    }

    pub fn link_type(&self) -> LinkType {
        self.edit.link_type()
    }

    /// The full value the local fields currently describe.
    pub fn current_value(&self) -> LinkValue {
        self.edit.current_value()
    }

    pub fn model_types(&self) -> Vec<String> {
        self.catalog.model_types()
    }

    /// Host-push entry point: re-derives local state from the supplied
    /// value (one-way overwrite) without firing `on_change`.
    pub fn sync_value(
        &mut self,
        value: Option<&LinkValue>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // A pushed value supersedes whatever the selector was in the middle
        // of; a pick landing after the push must not emit against it.
        if self.selector.is_open() {
            self.selector.close();
        }
        self.edit.sync(value, self.default_type);
        self.trace(TraceEvent::Synchronized { value });
        self.sync_href_input(window, cx);
        cx.notify();
    }

    pub fn set_link_type(
        &mut self,
        link_type: LinkType,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.edit.link_type() == link_type {
            return;
        }
        self.propose(LinkPatch::new().link_type(link_type), cx);
        self.sync_href_input(window, cx);
    }

    pub fn open_selector(&mut self, cx: &mut Context<Self>) {
        self.selector.open();
        cx.notify();
    }

    pub fn close_selector(&mut self, cx: &mut Context<Self>) {
        self.selector.close();
        cx.notify();
    }

    /// Starts a catalog lookup for the chosen model type on the background
    /// executor. The request is generation-tagged, so a response arriving
    /// after the selection moved on is discarded.
    pub fn choose_model_type(
        &mut self,
        model_type: impl Into<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let request = self.selector.choose_model_type(model_type);
        cx.notify();

        let catalog = self.catalog.clone();
        let this = cx.entity();
        cx.spawn_in(window, async move |_, window| {
            let fetch_type = request.model_type.clone();
            let result = window
                .background_executor()
                .spawn(async move { catalog.instances(&fetch_type) })
                .await;

            window
                .update(|_, cx| {
                    this.update(cx, |this, cx| {
                        if this.selector.resolve_fetch(&request, result) {
                            cx.notify();
                        }
                    });
                })
                .ok();

            Some(())
        })
        .detach();
    }

    /// Confirms an instance from the selector and proposes the resulting
    /// `{href, model, referenceId}` edit.
    pub fn choose_instance(&mut self, id: &str, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(patch) = self.selector.choose_instance(id) {
            self.propose(patch, cx);
            self.sync_href_input(window, cx);
        }
        cx.notify();
    }

    fn propose(&mut self, patch: LinkPatch, cx: &mut Context<Self>) {
        match self.edit.propose(patch) {
            Ok(value) => {
                self.trace(TraceEvent::ChangeEmitted { value: &value });
                if let Some(on_change) = self.on_change.clone() {
                    on_change(&value, cx);
                }
            }
            Err(error) => {
                self.trace(TraceEvent::ValidationFailed { error: &error });
            }
        }
        cx.notify();
    }

    fn sync_href_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let href = self.edit.href().to_string();
        if self.href_input.read(cx).value().to_string() != href {
            self.href_input
                .update(cx, |state, cx| state.set_value(href, window, cx));
        }
    }

    fn trace(&self, event: TraceEvent<'_>) {
        if let Some(tracer) = &self.tracer {
            tracer.trace(event);
        }
    }
}
