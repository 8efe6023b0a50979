//! `<a>` links.

use crate::elements::Image;
use crate::tag::{Closure, Tag};
use crate::text;
use crate::url_model::{Url, UrlError};

/// Case-insensitive href that builds a print-this-page link instead.
pub const PRINT_SENTINEL: &str = "print";

/// A link whose `href` is derived from an owned `Url` each time it is output.
///
/// `href` is (re)written into the attribute store at output time, so it
/// keeps the position of its first insertion.
#[derive(Debug, Clone)]
pub struct Anchor {
    tag: Tag,
    url: Url,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            tag: Tag::new("a", Closure::Content),
            url: Url::new(),
        }
    }
}

impl Anchor {
    /// Link to `href` showing `text` (escaped).
    pub fn new(href: &str, text: &str) -> Result<Self, UrlError> {
        let mut anchor = Anchor::default();
        anchor.tag.set_content(text);
        if href.eq_ignore_ascii_case(PRINT_SENTINEL) {
            anchor.print_page()?;
        } else {
            anchor.set_url(href)?;
        }
        Ok(anchor)
    }

    /// Writes the current URL into `href` (removing it for an empty URL),
    /// then renders.
    pub fn output(&mut self) -> String {
        if self.url.is_empty() {
            self.tag.attributes_mut().delete("href");
        } else {
            let href = self.url.assemble();
            self.tag.add_attribute("href", href);
        }
        self.tag.output()
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    pub fn set_content(&mut self, text: &str) -> &mut Self {
        self.tag.set_content(text);
        self
    }

    pub fn set_raw_content(&mut self, text: &str) -> &mut Self {
        self.tag.set_raw_content(text);
        self
    }

    pub fn add_attribute(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.tag.add_attribute(key, value);
        self
    }

    /// Adds a query parameter to the link.
    pub fn param(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.url.add_param(key, value);
        self
    }

    pub fn set_url(&mut self, href: &str) -> Result<&mut Self, UrlError> {
        self.url.set_url(href)?;
        Ok(self)
    }

    /// Replaces the link's URL.
    pub fn set_url_obj(&mut self, url: Url) -> &mut Self {
        self.url = url;
        self
    }

    /// `javascript:` link.
    pub fn set_js(&mut self, call: &str) -> Result<&mut Self, UrlError> {
        self.url.set_url(&format!("javascript:{call}"))?;
        Ok(self)
    }

    /// `mailto:` link. The address becomes the content when there is none yet.
    pub fn set_email(&mut self, email: &str) -> Result<&mut Self, UrlError> {
        self.url.set_url(&format!("mailto:{email}"))?;
        if self.tag.content().is_empty() {
            self.tag.set_raw_content(email);
        }
        self.tag
            .add_attribute("title", format!("Send an Email to {email}"));
        Ok(self)
    }

    /// Uses a copy of `image` as the link content. The copy gets this link's
    /// title (or its text content) and a zero border.
    pub fn set_image(&mut self, image: &Image) -> &mut Self {
        let mut img = image.clone();
        if self.tag.attributes().exists("title") {
            img.add_attribute("title", self.tag.attribute("title"));
        } else if !self.tag.content().is_empty() {
            img.add_attribute("title", self.tag.content());
        }
        img.add_attribute("border", 0);
        let rendered = img.output();
        self.tag.set_raw_content(&rendered);
        self
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.tag.add_attribute("title", text::escape(title));
        self
    }

    /// Link that prints the current page.
    pub fn print_page(&mut self) -> Result<&mut Self, UrlError> {
        self.set_js("window.print()")?;
        self.tag
            .add_attribute("title", "Print the contents of this page");
        if self.tag.content().is_empty() {
            self.tag.set_content("Print Page");
        }
        Ok(self)
    }

    /// Sets the `#fragment` of the link.
    pub fn set_anchor(&mut self, name: &str) -> &mut Self {
        self.url.set_anchor(name);
        self
    }

    pub fn set_new_window(&mut self) -> &mut Self {
        self.set_target("_blank")
    }

    pub fn set_same_frame(&mut self) -> &mut Self {
        self.set_target("_self")
    }

    pub fn set_top_window(&mut self) -> &mut Self {
        self.set_target("_top")
    }

    pub fn set_parent_frame(&mut self) -> &mut Self {
        self.set_target("_parent")
    }

    pub fn set_target(&mut self, target: &str) -> &mut Self {
        self.tag.add_attribute("target", target);
        self
    }
}
