use gpui_link_core::{LinkEditState, LinkPatch, LinkType, LinkValue};

#[test]
fn derives_local_state_from_host_value() {
    let value = LinkValue::model("/blog/getting-started", "blog", "blog_1");
    let state = LinkEditState::from_value(Some(&value), LinkType::Url);

    assert_eq!(state.link_type(), LinkType::Model);
    assert_eq!(state.href(), "/blog/getting-started");
    assert_eq!(state.model(), Some("blog"));
    assert_eq!(state.reference_id(), Some("blog_1"));
    assert!(state.error().is_none());
}

#[test]
fn absent_value_falls_back_to_defaults() {
    let state = LinkEditState::from_value(None, LinkType::Model);

    assert_eq!(state.link_type(), LinkType::Model);
    assert_eq!(state.href(), "");
    assert_eq!(state.model(), None);
    assert_eq!(state.reference_id(), None);
}

#[test]
fn seeded_value_survives_subsequent_edits() {
    let initial = LinkValue::url("https://example.com/docs");
    let mut state = LinkEditState::from_value(Some(&initial), LinkType::Model);
    assert_eq!(state.current_value(), initial);

    let emitted = state
        .propose(LinkPatch::new().href("https://example.com/docs/2"))
        .unwrap();
    assert_eq!(emitted.link_type, LinkType::Url);
    assert_eq!(emitted.href, "https://example.com/docs/2");
}

#[test]
fn host_push_overwrites_local_fields() {
    let first = LinkValue::url("https://example.com");
    let mut state = LinkEditState::from_value(Some(&first), LinkType::Url);
    state.propose(LinkPatch::new().href("https://el")).unwrap();

    let pushed = LinkValue::model("/page/home", "page", "page_1");
    state.sync(Some(&pushed), LinkType::Url);

    assert_eq!(state.current_value(), pushed);
}

#[test]
fn host_push_clears_stale_validation_error() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    assert!(state.propose(LinkPatch::new().href("not a url")).is_err());
    assert!(state.error().is_some());

    state.sync(Some(&LinkValue::url("https://example.com")), LinkType::Url);
    assert!(state.error().is_none());
}

#[test]
fn no_edit_round_trip_is_identity() {
    let value = LinkValue::url("https://example.com/docs?page=2");
    let state = LinkEditState::from_value(Some(&value), LinkType::Model);

    assert_eq!(state.current_value(), value);
}
