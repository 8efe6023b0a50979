//! Tagkit core: composable HTML tags, attribute stores and URLs that
//! serialize to exact, deterministic strings.

pub mod attribute;
pub mod config;
pub mod elements;
pub mod logging;
pub mod request;
pub mod tag;
pub mod text;
pub mod url_model;

pub use attribute::Attributes;
pub use elements::{Anchor, Image};
pub use request::{RequestContext, ResponseSink, StaticRequest};
pub use tag::{Closure, Tag};
pub use url_model::{Transport, Url, UrlError, UrlParts};
