use serde::{Deserialize, Serialize};

/// Which kind of link the widget edits: a raw URL, or a reference to a
/// content-model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Url,
    Model,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Url => "url",
            LinkType::Model => "model",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "url" => Some(LinkType::Url),
            "model" => Some(LinkType::Model),
            _ => None,
        }
    }
}

/// The structured value this widget edits and proposes back to the host.
///
/// Field names follow the host wire shape (`type`, `href`, `model`,
/// `referenceId`). The host owns the stored value; the widget never mutates
/// it in place and only proposes full replacements through its change
/// callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(
        default,
        rename = "referenceId",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_id: Option<String>,
}

impl LinkValue {
    pub fn url(href: impl Into<String>) -> Self {
        Self {
            link_type: LinkType::Url,
            href: href.into(),
            model: None,
            reference_id: None,
        }
    }

    pub fn model(
        href: impl Into<String>,
        model: impl Into<String>,
        reference_id: impl Into<String>,
    ) -> Self {
        Self {
            link_type: LinkType::Model,
            href: href.into(),
            model: Some(model.into()),
            reference_id: Some(reference_id.into()),
        }
    }

    /// Pretty JSON in the host wire shape, for debug/state-dump surfaces.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// One selectable entry of the instance catalog. Immutable once fetched;
/// `id` is unique within its model type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInstance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub href: String,
    #[serde(rename = "type")]
    pub model_type: String,
}

impl ModelInstance {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        href: impl Into<String>,
        model_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            href: href.into(),
            model_type: model_type.into(),
        }
    }
}

/// A raw catalog entry as returned by a content API. The location may live
/// in a nested `data.url` field and any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstance {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RawInstanceData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInstanceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RawInstance {
    /// Resolves a raw entry into a [`ModelInstance`] for the given model
    /// type. A missing or empty `data.url` is replaced with a deterministic
    /// placeholder derived from the type and name.
    pub fn into_instance(self, model_type: &str) -> ModelInstance {
        let href = self
            .data
            .and_then(|data| data.url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| placeholder_href(model_type, &self.name));

        ModelInstance {
            id: self.id,
            name: self.name,
            href,
            model_type: model_type.to_string(),
        }
    }
}

fn placeholder_href(model_type: &str, name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("untitled");
    }
    format!("/{model_type}/{slug}")
}
