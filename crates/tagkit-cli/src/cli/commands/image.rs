//! `tagkit image <src>` – render an image tag.

use anyhow::{Context, Result};
use tagkit_core::Image;

#[derive(Debug, Clone, Default)]
pub struct ImageArgs {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub align: Option<String>,
    pub valign: Option<String>,
}

pub fn render_image(args: &ImageArgs) -> Result<String> {
    let mut image =
        Image::new(&args.src).with_context(|| format!("cannot parse {:?}", args.src))?;
    if let Some(alt) = &args.alt {
        image.set_alt(alt);
    }
    if let Some(title) = &args.title {
        image.set_title(title);
    }
    if let Some(align) = &args.align {
        image.set_align(align);
    }
    if let Some(valign) = &args.valign {
        image.set_vertical_align(valign);
    }
    Ok(image.output())
}

pub fn run_image(args: &ImageArgs) -> Result<()> {
    println!("{}", render_image(args)?);
    Ok(())
}
