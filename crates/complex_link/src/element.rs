use gpui::prelude::FluentBuilder as _;
use gpui::{
    AnyElement, App, Entity, InteractiveElement as _, IntoElement, MouseButton,
    ParentElement as _, RenderOnce, StatefulInteractiveElement as _, StyleRefinement, Styled,
    Window, div, px, relative,
};
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, Sizable as _, StyledExt as _, h_flex, v_flex};
use gpui_link_core::{LinkType, ModelInstance};

use crate::state::ComplexLinkState;

/// Create a [`ComplexLink`] form for the given state.
pub fn complex_link(state: &Entity<ComplexLinkState>) -> ComplexLink {
    ComplexLink {
        state: state.clone(),
        style: StyleRefinement::default(),
    }
}

/// The ComplexLink form: a type selector, a conditional URL field or model
/// row, an inline error region, and the cascading selector modal.
#[derive(IntoElement)]
pub struct ComplexLink {
    state: Entity<ComplexLinkState>,
    style: StyleRefinement,
}

impl Styled for ComplexLink {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for ComplexLink {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let state = self.state.clone();

        let link_type = self.state.read(cx).link_type();
        let href = self.state.read(cx).edit().href().to_string();
        let error = self.state.read(cx).edit().error().cloned();
        let href_input = self.state.read(cx).href_input().clone();

        let url_active = link_type == LinkType::Url;
        let model_active = link_type == LinkType::Model;

        let type_row = h_flex()
            .items_center()
            .justify_between()
            .gap(px(12.))
            .child(div().text_sm().child("Link type"))
            .child(
                h_flex()
                    .items_center()
                    .gap(px(6.))
                    .child(
                        Button::new("complex-link-type-url")
                            .label("URL")
                            .small()
                            .when(url_active, |this| this.primary())
                            .when(!url_active, |this| this.ghost())
                            .on_click({
                                let state = state.clone();
                                move |_, window, cx| {
                                    state.update(cx, |this, cx| {
                                        this.set_link_type(LinkType::Url, window, cx);
                                    });
                                }
                            }),
                    )
                    .child(
                        Button::new("complex-link-type-model")
                            .label("Model")
                            .small()
                            .when(model_active, |this| this.primary())
                            .when(!model_active, |this| this.ghost())
                            .on_click({
                                let state = state.clone();
                                move |_, window, cx| {
                                    state.update(cx, |this, cx| {
                                        this.set_link_type(LinkType::Model, window, cx);
                                    });
                                }
                            }),
                    ),
            );

        let url_row = url_active.then(|| {
            h_flex()
                .items_center()
                .gap(px(12.))
                .child(div().text_sm().w(px(90.)).flex_none().child("URL"))
                .child(Input::new(&href_input).w_full().small())
        });

        let model_row = model_active.then(|| {
            h_flex()
                .items_center()
                .gap(px(12.))
                .child(div().text_sm().w(px(90.)).flex_none().child("Model"))
                .child(
                    div()
                        .flex_1()
                        .min_w(px(0.))
                        .h(px(28.))
                        .px(px(8.))
                        .flex()
                        .items_center()
                        .rounded(theme.radius)
                        .border_1()
                        .border_color(theme.border)
                        .text_sm()
                        .when(href.is_empty(), |this| {
                            this.text_color(theme.muted_foreground)
                                .child("No model selected…")
                        })
                        .when(!href.is_empty(), |this| {
                            this.child(div().truncate().child(href.clone()))
                        }),
                )
                .child(
                    Button::new("complex-link-open-selector")
                        .label("Select model…")
                        .small()
                        .on_click({
                            let state = state.clone();
                            move |_, _window, cx| {
                                state.update(cx, |this, cx| this.open_selector(cx));
                            }
                        }),
                )
        });

        let error_row = error.map(|error| {
            v_flex()
                .gap(px(2.))
                .px(px(10.))
                .py(px(8.))
                .rounded(theme.radius)
                .border_1()
                .border_color(theme.red.alpha(0.5))
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.red)
                        .child(error.message().to_string()),
                )
                .when_some(error.cause().map(|c| c.to_string()), |this, cause| {
                    this.child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child(cause),
                    )
                })
        });

        let modal = render_selector_modal(&self.state, cx);

        v_flex()
            .relative()
            .gap(px(10.))
            .refine_style(&self.style)
            .child(type_row)
            .when_some(url_row, |this, row| this.child(row))
            .when_some(model_row, |this, row| this.child(row))
            .when_some(error_row, |this, row| this.child(row))
            .when_some(modal, |this, modal| this.child(modal))
    }
}

fn render_selector_modal(state: &Entity<ComplexLinkState>, cx: &mut App) -> Option<AnyElement> {
    if !state.read(cx).selector().is_open() {
        return None;
    }

    let theme = cx.theme();
    let model_types = state.read(cx).model_types();
    let selected_type = state
        .read(cx)
        .selector()
        .selected_model_type()
        .map(|t| t.to_string());
    let loading = state.read(cx).selector().is_loading();
    let instances: Vec<ModelInstance> = state
        .read(cx)
        .selector()
        .visible_instances()
        .into_iter()
        .cloned()
        .collect();
    let current_reference = state
        .read(cx)
        .edit()
        .reference_id()
        .map(|id| id.to_string());

    let type_buttons = h_flex().items_center().gap(px(6.)).children(
        model_types
            .into_iter()
            .enumerate()
            .map(|(ix, model_type)| {
                let active = selected_type.as_deref() == Some(model_type.as_str());
                let state = state.clone();
                Button::new(("complex-link-model-type", ix))
                    .label(model_type.clone())
                    .small()
                    .when(active, |this| this.primary())
                    .when(!active, |this| this.ghost())
                    .on_click(move |_, window, cx| {
                        state.update(cx, |this, cx| {
                            this.choose_model_type(model_type.clone(), window, cx);
                        });
                    })
            }),
    );

    let list: Vec<AnyElement> = if selected_type.is_none() {
        vec![placeholder_row("Choose a model type…", theme.muted_foreground)]
    } else if loading {
        vec![placeholder_row("Loading instances…", theme.muted_foreground)]
    } else if instances.is_empty() {
        vec![placeholder_row(
            "No instances for this type",
            theme.muted_foreground,
        )]
    } else {
        instances
            .into_iter()
            .enumerate()
            .map(|(ix, instance)| {
                let is_current = current_reference.as_deref() == Some(instance.id.as_str());
                let state = state.clone();
                let id = instance.id.clone();
                div()
                    .id(("complex-link-instance", ix))
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_between()
                    .gap(px(8.))
                    .h(px(28.))
                    .px(px(10.))
                    .rounded(px(6.))
                    .text_sm()
                    .when(is_current, |this| {
                        this.bg(theme.accent).text_color(theme.accent_foreground)
                    })
                    .when(!is_current, |this| {
                        this.text_color(theme.popover_foreground)
                            .cursor_pointer()
                            .hover(|this| {
                                this.bg(theme.accent.alpha(0.4))
                                    .text_color(theme.accent_foreground)
                            })
                    })
                    .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                        window.prevent_default();
                        state.update(cx, |this, cx| {
                            this.choose_instance(&id, window, cx);
                        });
                    })
                    .child(div().truncate().child(instance.name.clone()))
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child(instance.href.clone()),
                    )
                    .into_any_element()
            })
            .collect()
    };

    let container = v_flex()
        .id("complex-link-selector")
        .w(px(440.))
        .max_w(relative(0.92))
        .bg(theme.popover)
        .border_1()
        .border_color(theme.border)
        .rounded(theme.radius)
        .shadow_lg()
        .gap(px(10.))
        .p(px(12.))
        .on_mouse_down(MouseButton::Left, |_, window, cx| {
            window.prevent_default();
            cx.stop_propagation();
        })
        .child(
            h_flex()
                .items_center()
                .justify_between()
                .gap(px(12.))
                .child(div().child("Select model"))
                .child(
                    Button::new("complex-link-selector-close")
                        .label("Close")
                        .ghost()
                        .small()
                        .on_click({
                            let state = state.clone();
                            move |_, _window, cx| {
                                state.update(cx, |this, cx| this.close_selector(cx));
                            }
                        }),
                ),
        )
        .child(
            h_flex()
                .items_center()
                .gap(px(12.))
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.muted_foreground)
                        .child("Model type"),
                )
                .child(type_buttons),
        )
        .child(
            v_flex()
                .id("complex-link-selector-list")
                .gap(px(2.))
                .min_h(px(0.))
                .max_h(px(260.))
                .overflow_y_scroll()
                .border_1()
                .border_color(theme.border.alpha(0.5))
                .rounded(theme.radius)
                .p(px(6.))
                .children(list),
        );

    Some(
        div()
            .id("complex-link-selector-backdrop")
            .absolute()
            .top(px(0.))
            .bottom(px(0.))
            .left(px(0.))
            .right(px(0.))
            .bg(theme.background.alpha(0.75))
            .flex()
            .flex_row()
            .justify_center()
            .pt(px(24.))
            .on_mouse_down(MouseButton::Left, {
                let state = state.clone();
                move |_, window, cx| {
                    window.prevent_default();
                    state.update(cx, |this, cx| this.close_selector(cx));
                }
            })
            .child(container)
            .into_any_element(),
    )
}

fn placeholder_row(text: &'static str, color: gpui::Hsla) -> AnyElement {
    div()
        .px(px(12.))
        .py(px(10.))
        .text_sm()
        .text_color(color)
        .child(text)
        .into_any_element()
}
