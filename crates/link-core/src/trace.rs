use crate::catalog::CatalogError;
use crate::edit::ValidationError;
use crate::value::LinkValue;

/// A single injected observability sink, invoked at the widget's defined
/// extension points. Implementations must be cheap; tracing is always
/// best-effort and never affects widget behavior.
pub trait LinkTracer: Send + Sync {
    fn trace(&self, event: TraceEvent<'_>);
}

#[derive(Debug)]
pub enum TraceEvent<'a> {
    /// Local state was re-derived from a host-supplied value.
    Synchronized { value: Option<&'a LinkValue> },
    /// A full candidate value passed validation and was handed to the host.
    ChangeEmitted { value: &'a LinkValue },
    /// A proposed edit failed validation; the host was not notified.
    ValidationFailed { error: &'a ValidationError },
    /// An instance lookup failed; an empty list was substituted.
    CatalogFetchFailed {
        model_type: &'a str,
        error: &'a CatalogError,
    },
    /// A fetch resolved after its selection changed and was discarded.
    StaleFetchDiscarded { model_type: &'a str },
    SelectorOpened,
    SelectorClosed,
}

/// Default sink forwarding to the `log` facade. Recoverable failures go to
/// `warn`, everything else to `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl LinkTracer for LogTracer {
    fn trace(&self, event: TraceEvent<'_>) {
        match event {
            TraceEvent::Synchronized { value } => {
                log::debug!("synchronized local state from host value: {value:?}");
            }
            TraceEvent::ChangeEmitted { value } => {
                log::debug!("emitted change: {value:?}");
            }
            TraceEvent::ValidationFailed { error } => {
                log::warn!("validation failed: {error}");
            }
            TraceEvent::CatalogFetchFailed { model_type, error } => {
                log::warn!("catalog fetch for {model_type:?} failed: {error}");
            }
            TraceEvent::StaleFetchDiscarded { model_type } => {
                log::debug!("discarded stale catalog response for {model_type:?}");
            }
            TraceEvent::SelectorOpened => log::debug!("selector opened"),
            TraceEvent::SelectorClosed => log::debug!("selector closed"),
        }
    }
}
