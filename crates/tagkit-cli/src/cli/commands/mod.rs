//! CLI command handlers. Each `run_*` prints what its `render_*` builds.

mod anchor;
mod escape;
mod image;
mod redirect;
mod tag;
mod url;

pub use anchor::{run_anchor, AnchorArgs};
pub use escape::run_escape;
pub use image::{run_image, ImageArgs};
pub use redirect::run_redirect;
pub use tag::{run_tag, TagArgs};
pub use url::{run_url, UrlArgs};

use anyhow::{bail, Result};

/// Splits a `KEY=VALUE` argument at the first `=`.
pub fn split_key_value(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, _)) if key.is_empty() => bail!("empty key in {arg:?}"),
        Some(pair) => Ok(pair),
        None => bail!("expected KEY=VALUE, got {arg:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_split() {
        assert_eq!(split_key_value("a=b=c").unwrap(), ("a", "b=c"));
        assert_eq!(split_key_value("a=").unwrap(), ("a", ""));
        assert!(split_key_value("novalue").is_err());
        assert!(split_key_value("=x").is_err());
    }
}
