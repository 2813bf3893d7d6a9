//! Filecast - minimal static file server
//!
//! Core library for request parsing, response building and connection serving.

pub mod config;
pub mod http;
pub mod server;
