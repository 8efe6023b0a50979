//! `tagkit tag <name>` – render an arbitrary tag.

use anyhow::Result;
use tagkit_core::config::TagkitConfig;
use tagkit_core::text;
use tagkit_core::{Closure, Tag};

use super::split_key_value;

#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    pub name: String,
    pub closure: String,
    pub attrs: Vec<String>,
    pub classes: Vec<String>,
    pub styles: Vec<String>,
    pub content: Option<String>,
    pub raw: bool,
}

pub fn render_tag(cfg: &TagkitConfig, args: &TagArgs) -> Result<String> {
    let mut tag = Tag::with_name_limit(
        &args.name,
        Closure::from_name(&args.closure),
        cfg.max_tag_name_len,
    );
    for pair in &args.attrs {
        let (key, value) = split_key_value(pair)?;
        tag.add_attribute(key, value);
    }
    for names in &args.classes {
        tag.add_class(names);
    }
    for style in &args.styles {
        tag.attributes_mut().add_style(style);
    }
    if let Some(content) = &args.content {
        if args.raw {
            tag.set_raw_content(content);
        } else {
            tag.set_raw_content(&text::escape_with(content, cfg.double_encode));
        }
    }
    Ok(tag.output())
}

pub fn run_tag(cfg: &TagkitConfig, args: &TagArgs) -> Result<()> {
    println!("{}", render_tag(cfg, args)?);
    Ok(())
}
