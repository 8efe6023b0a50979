//! Tagkit: composable HTML tags, attribute stores and URLs.
//!
//! The implementation lives in `tagkit-core`; this crate re-exports it.

pub use tagkit_core::*;
