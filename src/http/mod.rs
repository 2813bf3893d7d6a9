//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.0-style file server:
//! one request line per connection, GET only, and the connection is closed
//! after every response.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving the other modules
//! - **`parser`**: Extracts method and path from the request line
//! - **`request`**: The parsed request
//! - **`handler`**: Decides the outcome (200 / 404 / 501) for a request
//! - **`mime`**: Content-Type inference from the file extension
//! - **`response`**: Status line, headers and body source
//! - **`writer`**: Serializes the head and streams the body to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Request line received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Method check, path resolve, file open
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Head, then file body in chunks
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use filecast::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, ".");
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
