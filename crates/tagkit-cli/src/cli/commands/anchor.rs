//! `tagkit anchor <href> <text>` – render a link.

use anyhow::{Context, Result};
use tagkit_core::Anchor;

use super::split_key_value;

#[derive(Debug, Clone, Default)]
pub struct AnchorArgs {
    pub href: String,
    pub text: String,
    pub params: Vec<String>,
    pub target: Option<String>,
    pub title: Option<String>,
}

pub fn render_anchor(args: &AnchorArgs) -> Result<String> {
    let mut anchor = Anchor::new(&args.href, &args.text)
        .with_context(|| format!("cannot parse {:?}", args.href))?;
    for pair in &args.params {
        let (key, value) = split_key_value(pair)?;
        anchor.param(key, value);
    }
    if let Some(target) = &args.target {
        anchor.set_target(target);
    }
    if let Some(title) = &args.title {
        anchor.set_title(title);
    }
    Ok(anchor.output())
}

pub fn run_anchor(args: &AnchorArgs) -> Result<()> {
    println!("{}", render_anchor(args)?);
    Ok(())
}
