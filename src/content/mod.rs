//! Content selection and rendering
//!
//! This module decides what a connection is served and produces the body:
//! outcome resolution against the filesystem, body rendering, and the tag
//! substitution applied to served file content.

pub mod render;
pub mod resolve;
pub mod tags;

pub use render::Renderer;
pub use resolve::{Outcome, Resolver};
