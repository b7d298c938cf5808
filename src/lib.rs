//! tagserve - Single-shot Static File Server
//!
//! Serves one GET request per connection: a built-in home page, a 404
//! page, or a file's contents with inline tag substitution.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
