//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: one GET
//! request per connection, one response, then close. There is no
//! keep-alive and no pipelining; the end of the response body is signaled
//! by closing the connection rather than by a `Content-Length` header.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler composing the pipeline
//! - **`reader`**: Turns the byte stream into a sequence of text lines
//! - **`parser`**: Consumes the header block and extracts the request target
//! - **`request`**: Request line and target types
//! - **`response`**: Status codes and the response head
//! - **`writer`**: Serializes and writes the response head to the client
//!
//! # Connection pipeline
//!
//! Each connection runs the same strict sequence once:
//!
//! ```text
//!   parse request ──► resolve outcome ──► write head ──► render body ──► close
//! ```
//!
//! The outcome (home page, found file, or 404) is committed at the resolve
//! step and is immutable afterwards; the head and body are both derived
//! from it.
//!
//! # Example
//!
//! ```ignore
//! use tagserve::config::Config;
//! use tagserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load();
//!     let listener = TcpListener::bind(&config.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let config = config.clone();
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, &config);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
