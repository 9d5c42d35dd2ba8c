use gpui_link_core::{LinkEditState, LinkPatch, LinkType, LinkValue, validate};

#[test]
fn valid_url_yields_full_candidate() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    let emitted = state
        .propose(LinkPatch::new().href("https://example.com"))
        .unwrap();

    assert_eq!(emitted, LinkValue::url("https://example.com"));
    assert!(state.error().is_none());
}

#[test]
fn malformed_url_fails_and_emits_nothing() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    let err = state
        .propose(LinkPatch::new().href("not a url"))
        .unwrap_err();

    assert!(err.message().contains("not a url"));
    assert_eq!(state.error(), Some(&err));
}

#[test]
fn relative_path_is_not_an_absolute_url() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    let err = state.propose(LinkPatch::new().href("/docs")).unwrap_err();
    assert!(err.message().contains("absolute"));
}

#[test]
fn empty_href_passes_validation() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    assert!(state.propose(LinkPatch::new().href("")).is_ok());
}

#[test]
fn failed_validation_preserves_typed_input() {
    let mut state = LinkEditState::from_value(
        Some(&LinkValue::url("https://example.com")),
        LinkType::Url,
    );
    assert!(state.propose(LinkPatch::new().href("https://")).is_err());

    // The user's half-typed text must survive so they can correct it.
    assert_eq!(state.href(), "https://");
}

#[test]
fn propose_is_idempotent() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    let patch = LinkPatch::new().href("https://example.com/a");

    let first = state.propose(patch.clone()).unwrap();
    let second = state.propose(patch).unwrap();
    assert_eq!(first, second);
}

#[test]
fn switching_to_model_keeps_previous_href() {
    let mut state = LinkEditState::from_value(
        Some(&LinkValue::url("https://example.com")),
        LinkType::Url,
    );

    let emitted = state
        .propose(LinkPatch::new().link_type(LinkType::Model))
        .unwrap();

    // The href is not discarded until an instance is explicitly chosen.
    assert_eq!(state.href(), "https://example.com");
    assert_eq!(emitted.link_type, LinkType::Model);
    assert_eq!(emitted.href, "https://example.com");
}

#[test]
fn model_hrefs_skip_url_validation() {
    assert!(validate(&LinkValue::model("/blog/hello", "blog", "blog_1")).is_ok());
}

#[test]
fn parse_failures_carry_a_cause() {
    let mut state = LinkEditState::from_value(None, LinkType::Url);
    let err = state
        .propose(LinkPatch::new().href("http://exa mple.com"))
        .unwrap_err();
    assert!(err.cause().is_some());
}
