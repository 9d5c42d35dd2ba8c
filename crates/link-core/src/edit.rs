use std::str::FromStr as _;

use http::Uri;

use crate::value::{LinkType, LinkValue};

/// A local edit failed a business rule. Carries a human-readable message
/// and, where available, the text of the originating error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
    cause: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A partial edit to merge over the current local state. Unset fields are
/// left unchanged; emission always produces a complete [`LinkValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    link_type: Option<LinkType>,
    href: Option<String>,
    model: Option<String>,
    reference_id: Option<String>,
}

impl LinkPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }
}

/// The widget-owned mirror of the host value plus the last validation
/// error. Local edits flow host-ward through [`LinkEditState::propose`];
/// host pushes flow back through [`LinkEditState::sync`], never the other
/// way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEditState {
    link_type: LinkType,
    href: String,
    model: Option<String>,
    reference_id: Option<String>,
    error: Option<ValidationError>,
}

impl LinkEditState {
    /// Derives local state from the host value. An absent value falls back
    /// entirely to defaults.
    pub fn from_value(value: Option<&LinkValue>, default_type: LinkType) -> Self {
        Self {
            link_type: value.map(|v| v.link_type).unwrap_or(default_type),
            href: value.map(|v| v.href.clone()).unwrap_or_default(),
            model: value.and_then(|v| v.model.clone()),
            reference_id: value.and_then(|v| v.reference_id.clone()),
            error: None,
        }
    }

    /// Re-derives local state after the host pushed a new value. This is a
    /// one-way overwrite; it clears any stale validation error and emits
    /// nothing, so a host push can never feed back into the host.
    pub fn sync(&mut self, value: Option<&LinkValue>, default_type: LinkType) {
        *self = Self::from_value(value, default_type);
    }

    pub fn link_type(&self) -> LinkType {
        self.link_type
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The full value the local fields currently describe.
    pub fn current_value(&self) -> LinkValue {
        LinkValue {
            link_type: self.link_type,
            href: self.href.clone(),
            model: self.model.clone(),
            reference_id: self.reference_id.clone(),
        }
    }

    /// Merges `patch` over the full local state and validates the candidate.
    ///
    /// On success the candidate is returned for the caller to hand to the
    /// host and any recorded error is cleared. On failure the error is
    /// recorded for display and nothing is returned; the patched field
    /// values are retained so the user's input survives the failure.
    ///
    /// Synchronous and idempotent: proposing the same patch twice over
    /// unchanged state yields the same outcome.
    pub fn propose(&mut self, patch: LinkPatch) -> Result<LinkValue, ValidationError> {
        if let Some(link_type) = patch.link_type {
            self.link_type = link_type;
        }
        if let Some(href) = patch.href {
            self.href = href;
        }
        if let Some(model) = patch.model {
            self.model = Some(model);
        }
        if let Some(reference_id) = patch.reference_id {
            self.reference_id = Some(reference_id);
        }

        let candidate = self.current_value();
        match validate(&candidate) {
            Ok(()) => {
                self.error = None;
                Ok(candidate)
            }
            Err(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }
}

/// Validates a candidate value. When the type is `url` and `href` is
/// non-empty, it must parse as an absolute URL with a scheme and host.
/// An empty `href` is allowed so a half-typed form never blocks the user.
pub fn validate(value: &LinkValue) -> Result<(), ValidationError> {
    if value.link_type != LinkType::Url || value.href.is_empty() {
        return Ok(());
    }

    let uri = Uri::from_str(&value.href).map_err(|err| {
        ValidationError::with_cause(
            format!("\"{}\" is not a valid URL", value.href),
            err.to_string(),
        )
    })?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(ValidationError::new(format!(
            "\"{}\" is not an absolute URL (missing scheme or host)",
            value.href
        )));
    }

    Ok(())
}
