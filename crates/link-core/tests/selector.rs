use std::sync::{Arc, Mutex};

use gpui_link_core::{
    CatalogError, LinkEditState, LinkTracer, LinkType, LinkValue, ModelInstance, SelectorState,
    TraceEvent,
};

#[derive(Default)]
struct RecordingTracer {
    events: Mutex<Vec<String>>,
}

impl LinkTracer for RecordingTracer {
    fn trace(&self, event: TraceEvent<'_>) {
        let label = match event {
            TraceEvent::CatalogFetchFailed { model_type, .. } => {
                format!("catalog-failed:{model_type}")
            }
            TraceEvent::StaleFetchDiscarded { model_type } => {
                format!("stale-discarded:{model_type}")
            }
            _ => return,
        };
        self.events.lock().unwrap().push(label);
    }
}

fn blog_instance() -> ModelInstance {
    ModelInstance::new("blog_1", "Getting Started Guide", "/blog/getting-started", "blog")
}

fn page_instance() -> ModelInstance {
    ModelInstance::new("page_1", "Home", "/home", "page")
}

#[test]
fn cascade_emits_model_value() {
    let mut selector = SelectorState::new();
    selector.open();

    let request = selector.choose_model_type("blog");
    assert!(selector.is_loading());
    assert!(selector.resolve_fetch(&request, Ok(vec![blog_instance()])));
    assert!(!selector.is_loading());

    let patch = selector.choose_instance("blog_1").unwrap();
    assert!(!selector.is_open());

    let mut edit = LinkEditState::from_value(
        Some(&LinkValue {
            link_type: LinkType::Model,
            href: String::new(),
            model: None,
            reference_id: None,
        }),
        LinkType::Model,
    );
    let emitted = edit.propose(patch).unwrap();
    assert_eq!(
        emitted,
        LinkValue::model("/blog/getting-started", "blog", "blog_1")
    );
}

#[test]
fn stale_fetch_is_discarded() {
    let mut selector = SelectorState::new();
    selector.open();

    let page_request = selector.choose_model_type("page");
    let blog_request = selector.choose_model_type("blog");

    // The late "page" response must not populate the list for "blog".
    assert!(!selector.resolve_fetch(&page_request, Ok(vec![page_instance()])));
    assert!(selector.visible_instances().is_empty());
    assert!(selector.is_loading());

    assert!(selector.resolve_fetch(&blog_request, Ok(vec![blog_instance()])));
    let visible = selector.visible_instances();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "blog_1");
}

#[test]
fn fetch_resolving_after_close_is_discarded() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("page");
    selector.close();

    assert!(!selector.resolve_fetch(&request, Ok(vec![page_instance()])));
    assert!(selector.visible_instances().is_empty());
}

#[test]
fn close_discards_partial_state() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("page");
    selector.resolve_fetch(&request, Ok(vec![page_instance()]));

    selector.close();
    selector.open();

    assert_eq!(selector.selected_model_type(), None);
    assert!(selector.visible_instances().is_empty());
    assert!(!selector.is_loading());
}

#[test]
fn instances_of_other_types_are_never_shown() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("blog");

    // A mixed response is filtered down to the selected type.
    selector.resolve_fetch(&request, Ok(vec![page_instance(), blog_instance()]));

    let visible = selector.visible_instances();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].model_type, "blog");
}

#[test]
fn failed_fetch_leaves_an_empty_list() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("blog");

    assert!(selector.resolve_fetch(&request, Err(CatalogError::new("boom"))));
    assert!(!selector.is_loading());
    assert!(selector.visible_instances().is_empty());
}

#[test]
fn choose_instance_is_ignored_while_loading() {
    let mut selector = SelectorState::new();
    selector.open();
    let _request = selector.choose_model_type("blog");

    assert!(selector.choose_instance("blog_1").is_none());
    assert!(selector.is_open());
}

#[test]
fn unknown_instance_id_is_ignored() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("blog");
    selector.resolve_fetch(&request, Ok(vec![blog_instance()]));

    assert!(selector.choose_instance("blog_404").is_none());
    assert!(selector.is_open());
}

#[test]
fn instance_pick_after_close_emits_nothing() {
    let mut selector = SelectorState::new();
    selector.open();
    let request = selector.choose_model_type("blog");
    selector.resolve_fetch(&request, Ok(vec![blog_instance()]));

    // A host push closes the selector; a pick landing afterwards must not
    // produce an edit against the superseded selection.
    selector.close();
    assert!(selector.choose_instance("blog_1").is_none());
}

#[test]
fn fetch_failure_is_traced_as_recoverable() {
    let tracer = Arc::new(RecordingTracer::default());
    let mut selector = SelectorState::new().with_tracer(tracer.clone());
    selector.open();
    let request = selector.choose_model_type("page");

    assert!(selector.resolve_fetch(
        &request,
        Err(CatalogError::with_cause("instance lookup failed", "connection refused")),
    ));
    assert!(selector.visible_instances().is_empty());
    assert_eq!(
        tracer.events.lock().unwrap().as_slice(),
        ["catalog-failed:page"]
    );
}

#[test]
fn discarded_stale_fetch_is_traced() {
    let tracer = Arc::new(RecordingTracer::default());
    let mut selector = SelectorState::new().with_tracer(tracer.clone());
    selector.open();

    let page_request = selector.choose_model_type("page");
    let _blog_request = selector.choose_model_type("blog");
    assert!(!selector.resolve_fetch(&page_request, Ok(vec![page_instance()])));

    assert_eq!(
        tracer.events.lock().unwrap().as_slice(),
        ["stale-discarded:page"]
    );
}
