//! # matrixd - CSV matrix operations over HTTP
//!
//! matrixd parses a CSV-encoded square integer matrix uploaded as a
//! multipart form file and answers with one of five operations computed
//! over it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV upload │────▶│   Parser    │────▶│    Matrix   │────▶│  Operation  │
//! │ (multipart) │     │ (validated) │     │  (square)   │     │ (plain text)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use matrixd::{parser, ops};
//!
//! let matrix = parser::parse_str("1,2,3\n4,5,6\n7,8,9").unwrap();
//! assert_eq!(ops::sum(&matrix), 45.0);
//! assert_eq!(ops::invert(&matrix), "1,4,7\n2,5,8\n3,6,9");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Parse error taxonomy
//! - [`matrix`] - The validated grid model
//! - [`parser`] - CSV parsing with shape validation
//! - [`ops`] - Echo, invert, flatten, sum, multiply
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod matrix;

// Parsing
pub mod parser;

// Operations
pub mod ops;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{MatrixError, MatrixResult};

// =============================================================================
// Re-exports - Model
// =============================================================================

pub use matrix::Matrix;

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_bytes, parse_file, parse_reader, parse_str};

// =============================================================================
// Re-exports - Operations
// =============================================================================

pub use ops::{echo, flatten, invert, multiply, sum, Operation};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{ApiError, INTERNAL_ERROR_MESSAGE, MISSING_FILE_MESSAGE};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
