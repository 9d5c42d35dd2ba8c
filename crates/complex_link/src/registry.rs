use std::collections::HashMap;

use gpui::{App, Global, SharedString};

/// Editor name the ComplexLink widget registers itself under.
pub const COMPLEX_LINK_EDITOR: &str = "ComplexLink";

/// A configuration input an editor accepts from its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInput {
    pub name: SharedString,
    pub kind: SharedString,
    pub default_value: Option<SharedString>,
}

impl EditorInput {
    pub fn new(name: impl Into<SharedString>, kind: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            default_value: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// An editor made available to hosts, by name, with its declared inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRegistration {
    pub name: SharedString,
    pub inputs: Vec<EditorInput>,
}

/// App-global table of registered editors.
#[derive(Default)]
pub struct EditorRegistry {
    editors: HashMap<SharedString, EditorRegistration>,
}

impl Global for EditorRegistry {}

impl EditorRegistry {
    pub fn register(cx: &mut App, registration: EditorRegistration) {
        cx.default_global::<Self>()
            .editors
            .insert(registration.name.clone(), registration);
    }

    pub fn lookup(cx: &App, name: &str) -> Option<EditorRegistration> {
        cx.try_global::<Self>()
            .and_then(|registry| registry.editors.get(name).cloned())
    }
}

/// The registration the ComplexLink widget announces to its host: the
/// editor name and its single `defaultType` input, defaulting to `model`.
pub fn complex_link_registration() -> EditorRegistration {
    EditorRegistration {
        name: COMPLEX_LINK_EDITOR.into(),
        inputs: vec![EditorInput::new("defaultType", "string").default_value("model")],
    }
}

pub(crate) fn init(cx: &mut App) {
    EditorRegistry::register(cx, complex_link_registration());
}
