//! Error types for wsdgen operations.
//!
//! This module provides the main error type [`WsdError`] which wraps the
//! distinct failure classes of the render flow. Each variant maps to its own
//! process exit status in the CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for diagram rendering operations.
///
/// The service-side variants carry the HTTP status and, where the extracted
/// message alone is not enough to diagnose the problem, the raw response
/// body as returned by the service.
#[derive(Debug, Error)]
pub enum WsdError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to generate diagram: {status} {status_text}")]
    Generate { status: u16, status_text: String },

    #[error("Failed to fetch generated image: {status} {status_text}")]
    FetchImage {
        status: u16,
        status_text: String,
        /// Raw body of the generation response that referenced the image.
        response: String,
    },

    #[error("Diagram generator returned errors: {errors}")]
    Service {
        /// Inner text of the reported `errors: [...]` block.
        errors: String,
        /// Raw body of the generation response.
        response: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] ureq::Error),
}
