//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus { status: reqwest::StatusCode },

    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// The response has neither an `<article>` nor a `<main>` element
    #[error("Failed to find a message in the HTML response")]
    HtmlParse,

    /// The session token cannot be sent as a cookie
    #[error("Session token contains characters not allowed in a cookie")]
    InvalidSession,

    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
