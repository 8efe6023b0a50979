//! `<img>` tags.

use crate::tag::{Closure, Tag};
use crate::text;
use crate::url_model::{Url, UrlError};

/// Accepted values for the `align` attribute.
pub const HORIZONTAL_ALIGN: [&str; 5] = ["top", "bottom", "middle", "left", "right"];

/// Accepted keywords for the `vertical-align` style.
pub const VERTICAL_ALIGN: [&str; 9] = [
    "baseline",
    "sub",
    "super",
    "top",
    "text-top",
    "middle",
    "bottom",
    "text-bottom",
    "length",
];

/// A self-closing image whose `src` comes from an owned `Url`.
#[derive(Debug, Clone)]
pub struct Image {
    tag: Tag,
    source: Url,
}

impl Image {
    pub fn new(src: &str) -> Result<Self, UrlError> {
        let mut image = Self {
            tag: Tag::new("img", Closure::SelfClosing),
            source: Url::new(),
        };
        image.set_image(src)?;
        Ok(image)
    }

    /// Writes `src` from the source URL (when set), then renders.
    pub fn output(&mut self) -> String {
        if !self.source.is_empty() {
            let src = self.source.assemble();
            self.tag.add_attribute("src", src);
        }
        self.tag.output()
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }

    pub fn image_url(&self) -> &Url {
        &self.source
    }

    pub fn image_url_mut(&mut self) -> &mut Url {
        &mut self.source
    }

    pub fn set_image(&mut self, src: &str) -> Result<&mut Self, UrlError> {
        self.source.set_url(src)?;
        Ok(self)
    }

    pub fn add_attribute(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.tag.add_attribute(key, value);
        self
    }

    pub fn add_style(&mut self, property: &str, value: impl ToString) -> &mut Self {
        self.tag.add_style(property, value);
        self
    }

    pub fn set_alt(&mut self, text: &str) -> &mut Self {
        self.add_attribute("alt", text::escape(text))
    }

    pub fn set_title(&mut self, text: &str) -> &mut Self {
        self.add_attribute("title", text::escape(text))
    }

    pub fn set_border(&mut self, size: i64) -> &mut Self {
        self.add_attribute("border", size)
    }

    pub fn set_size(&mut self, height: i64, width: i64) -> &mut Self {
        self.add_attribute("height", height)
            .add_attribute("width", width)
    }

    /// Unsupported values remove the `align` attribute.
    pub fn set_align(&mut self, alignment: &str) -> &mut Self {
        let align = alignment.to_lowercase();
        if HORIZONTAL_ALIGN.contains(&align.as_str()) {
            self.add_attribute("align", align);
        } else {
            self.tag.attributes_mut().delete("align");
        }
        self
    }

    /// Keywords from `VERTICAL_ALIGN` or percentages are kept; anything else
    /// removes only the `vertical-align` style.
    pub fn set_vertical_align(&mut self, alignment: &str) -> &mut Self {
        let align = alignment.to_lowercase();
        if align.contains('%') || VERTICAL_ALIGN.contains(&align.as_str()) {
            self.add_style("vertical-align", align);
        } else {
            self.tag.attributes_mut().delete_style("vertical-align");
        }
        self
    }
}
