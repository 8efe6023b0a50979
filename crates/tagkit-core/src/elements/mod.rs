//! Ready-made tags built on `Tag`, `Attributes` and `Url`.

mod anchor;
mod image;

pub use anchor::{Anchor, PRINT_SENTINEL};
pub use image::{Image, HORIZONTAL_ALIGN, VERTICAL_ALIGN};

use crate::tag::{Closure, Tag};

/// `<body>...</body>`
pub fn body() -> Tag {
    Tag::new("body", Closure::Content)
}

/// `<p>...</p>`
pub fn paragraph() -> Tag {
    Tag::new("p", Closure::Content)
}
