//! `tagkit redirect <url>` – print CGI-style redirect headers and exit.

use anyhow::{Context, Result};
use std::io::Write;
use tagkit_core::config::TagkitConfig;
use tagkit_core::{ResponseSink, Url};

/// Writes `Status:` and `Location:` headers, then ends the process.
pub struct HeaderSink<W: Write> {
    out: W,
}

impl<W: Write> HeaderSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Header block for a redirect.
    pub fn headers(status: u16, location: &str) -> String {
        format!("Status: {status}\r\nLocation: {location}\r\n\r\n")
    }
}

impl<W: Write> ResponseSink for HeaderSink<W> {
    fn redirect(&mut self, status: u16, location: &str) -> ! {
        let written = self
            .out
            .write_all(Self::headers(status, location).as_bytes())
            .and_then(|_| self.out.flush());
        match written {
            Ok(()) => std::process::exit(0),
            Err(err) => {
                tracing::error!("failed to write redirect headers: {err}");
                std::process::exit(1)
            }
        }
    }
}

pub fn run_redirect(cfg: &TagkitConfig, raw: &str, status: Option<u16>) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("cannot parse {raw:?}"))?;
    let status = status.unwrap_or(cfg.redirect_status);
    let mut sink = HeaderSink::new(std::io::stdout().lock());
    url.redirect(status, &mut sink)
}
