use gpui_link_core::{InstanceCatalog, ModelInstance, RawInstance, StaticCatalog};

#[test]
fn static_catalog_filters_by_type() {
    let catalog = StaticCatalog::new().with_instances([
        ModelInstance::new("page_1", "Home", "/home", "page"),
        ModelInstance::new("blog_1", "Getting Started Guide", "/blog/getting-started", "blog"),
        ModelInstance::new("page_2", "About", "/about", "page"),
    ]);

    let pages = catalog.instances("page").unwrap();
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|i| i.model_type == "page"));

    assert_eq!(catalog.model_types(), vec!["page", "blog"]);
}

#[test]
fn unknown_type_yields_empty_list_not_error() {
    let catalog = StaticCatalog::new()
        .with_instances([ModelInstance::new("page_1", "Home", "/home", "page")]);
    assert!(catalog.instances("video").unwrap().is_empty());
}

#[test]
fn raw_entries_resolve_missing_hrefs() {
    let catalog = StaticCatalog::new().with_raw(
        "blog",
        [
            RawInstance {
                id: "blog_1".into(),
                name: "Getting Started Guide".into(),
                data: None,
            },
            serde_json::from_str(r#"{"id":"blog_2","name":"News","data":{"url":"/blog/news"}}"#)
                .unwrap(),
        ],
    );

    let blogs = catalog.instances("blog").unwrap();
    assert_eq!(blogs[0].href, "/blog/getting-started-guide");
    assert_eq!(blogs[1].href, "/blog/news");
}
