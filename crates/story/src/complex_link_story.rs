use std::sync::Arc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{ActiveTheme as _, Sizable as _, h_flex, v_flex};
use gpui_complex_link::{COMPLEX_LINK_EDITOR, ComplexLinkState, EditorRegistry, complex_link};
use gpui_link_core::{LinkType, LinkValue, RawInstance, RawInstanceData, StaticCatalog};

pub struct ComplexLinkExample {
    link: Entity<ComplexLinkState>,
    value: Option<LinkValue>,
}

impl ComplexLinkExample {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        let default_type = registered_default_type(cx);

        cx.new(|cx| {
            let weak = cx.weak_entity();
            let initial = LinkValue::url("https://example.com/docs");

            let link = cx.new(|cx| {
                ComplexLinkState::new(window, cx)
                    .default_type(default_type)
                    .catalog(Arc::new(demo_catalog()))
                    .default_value(&initial, window, cx)
                    .on_change(move |value, cx| {
                        let value = value.clone();
                        weak.update(cx, |this: &mut Self, cx| {
                            this.value = Some(value);
                            cx.notify();
                        })
                        .ok();
                    })
            });

            Self {
                link,
                value: Some(initial),
            }
        })
    }

    fn push_value(&self, value: Option<LinkValue>, window: &mut Window, cx: &mut Context<Self>) {
        self.link
            .update(cx, |this, cx| this.sync_value(value.as_ref(), window, cx));
    }
}

impl Render for ComplexLinkExample {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let registration = EditorRegistry::lookup(cx, COMPLEX_LINK_EDITOR);
        let dump = self
            .value
            .as_ref()
            .map(|value| value.to_json_pretty())
            .unwrap_or_else(|| "<no value>".to_string());

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_3()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("ComplexLink"),
                    )
                    .child(div().text_sm().text_color(theme.muted_foreground).child(
                        "A link field that is either a raw URL or a reference to a \
                         content-model instance picked from a cascading selector.",
                    ))
                    .when_some(registration, |this, registration| {
                        let inputs = registration
                            .inputs
                            .iter()
                            .map(|input| match &input.default_value {
                                Some(default) => {
                                    format!("{}: {} = {}", input.name, input.kind, default)
                                }
                                None => format!("{}: {}", input.name, input.kind),
                            })
                            .collect::<Vec<_>>()
                            .join(", ");
                        this.child(
                            div()
                                .text_sm()
                                .text_color(theme.muted_foreground)
                                .child(format!(
                                    "Registered as \"{}\" with inputs [{}]",
                                    registration.name, inputs
                                )),
                        )
                    }),
            )
            .child(
                h_flex()
                    .flex_1()
                    .min_h(px(0.))
                    .items_start()
                    .gap_x_3()
                    .child(
                        v_flex()
                            .w(px(460.))
                            .min_w(px(0.))
                            .gap_y_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Editor"),
                            )
                            .child(
                                div()
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .p(px(12.))
                                    .child(complex_link(&self.link)),
                            )
                            .child(
                                h_flex()
                                    .gap_x_2()
                                    .child(
                                        Button::new("push-external")
                                            .label("Push external value")
                                            .small()
                                            .on_click(cx.listener(|this, _, window, cx| {
                                                let pushed = LinkValue::model(
                                                    "/page/landing",
                                                    "page",
                                                    "page_2",
                                                );
                                                this.push_value(Some(pushed), window, cx);
                                            })),
                                    )
                                    .child(
                                        Button::new("push-empty")
                                            .label("Clear value")
                                            .small()
                                            .ghost()
                                            .on_click(cx.listener(|this, _, window, cx| {
                                                this.push_value(None, window, cx);
                                            })),
                                    ),
                            ),
                    )
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w(px(0.))
                            .gap_y_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Emitted value"),
                            )
                            .child(
                                div()
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .p(px(12.))
                                    .child(render_dump(dump)),
                            ),
                    ),
            )
    }
}

/// The widget's registered `defaultType` input, read back the way a host
/// shell would before instantiating the editor.
fn registered_default_type(cx: &App) -> LinkType {
    EditorRegistry::lookup(cx, COMPLEX_LINK_EDITOR)
        .and_then(|registration| {
            registration
                .inputs
                .into_iter()
                .find(|input| input.name == "defaultType")
        })
        .and_then(|input| input.default_value)
        .and_then(|value| LinkType::parse(&value))
        .unwrap_or(LinkType::Model)
}

fn render_dump(text: String) -> impl IntoElement {
    let lines = text
        .lines()
        .map(|line| div().text_sm().child(line.to_string()));
    v_flex().gap_y_0p5().children(lines)
}

fn demo_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_raw(
            "page",
            vec![
                RawInstance {
                    id: "page_1".into(),
                    name: "Home".into(),
                    data: Some(RawInstanceData {
                        url: Some("/".into()),
                    }),
                },
                RawInstance {
                    id: "page_2".into(),
                    name: "Landing".into(),
                    data: Some(RawInstanceData {
                        url: Some("/page/landing".into()),
                    }),
                },
                RawInstance {
                    id: "page_3".into(),
                    name: "Pricing".into(),
                    data: None,
                },
            ],
        )
        .with_raw(
            "blog",
            vec![
                RawInstance {
                    id: "blog_1".into(),
                    name: "Getting Started Guide".into(),
                    data: Some(RawInstanceData {
                        url: Some("/blog/getting-started".into()),
                    }),
                },
                RawInstance {
                    id: "blog_2".into(),
                    name: "Release Notes".into(),
                    data: Some(RawInstanceData {
                        url: Some("/blog/release-notes".into()),
                    }),
                },
            ],
        )
}
