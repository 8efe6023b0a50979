//! Capabilities supplied by the hosting request handler.
//!
//! The URL model never reads process-global request state. Whatever serves
//! the request hands in a `RequestContext` (referrer and incoming query) and,
//! for redirects, a `ResponseSink`.

use std::fmt;

/// Read access to the request currently being handled.
pub trait RequestContext: fmt::Debug {
    /// The referring URL, if the client sent one.
    fn referrer(&self) -> Option<String>;

    /// Query parameters of the incoming request, in arrival order.
    fn query_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Emits an HTTP redirect and ends the current request.
pub trait ResponseSink {
    /// Communicates `status` and `location` to the client. Implementations
    /// must not return: processing of the request stops here.
    fn redirect(&mut self, status: u16, location: &str) -> !;
}

/// A request described by plain values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRequest {
    pub referrer: Option<String>,
    pub query: Vec<(String, String)>,
}

impl StaticRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

impl RequestContext for StaticRequest {
    fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }

    fn query_params(&self) -> Vec<(String, String)> {
        self.query.clone()
    }
}
