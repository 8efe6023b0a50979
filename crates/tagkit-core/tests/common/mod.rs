//! Shared test doubles.

use std::panic;

use tagkit_core::ResponseSink;

/// Records the redirect, then unwinds to stand in for ending the request.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub issued: Option<(u16, String)>,
}

/// Payload used to unwind out of `RecordingSink::redirect`.
#[derive(Debug)]
pub struct RequestEnded;

impl ResponseSink for RecordingSink {
    fn redirect(&mut self, status: u16, location: &str) -> ! {
        self.issued = Some((status, location.to_string()));
        panic::resume_unwind(Box::new(RequestEnded))
    }
}
