//! Socket acceptance
//!
//! Thin plumbing around the core: binds the listen address and hands each
//! accepted stream to its own connection handler.

pub mod listener;
