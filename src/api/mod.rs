//! HTTP API module.
//!
//! This module provides the HTTP server, error mapping, and the SSE log
//! stream for the matrixd service.

pub mod logs;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::start_server;
pub use types::*;
