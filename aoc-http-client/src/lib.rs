//! AOC HTTP Client Library
//!
//! Blocking access to the Advent of Code website: puzzle inputs, puzzle pages
//! and answer submission. TLS is handled by rustls.
//!
//! Submission returns the server's message as plain text rather than a
//! verdict, so callers decide how to classify it. [`throttle_wait`] reads the
//! wait time out of a rate-limit message.
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, throttle_wait};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2024, 1, session)?;
//! let message = client.submit_answer(2024, 1, 1, "42", session)?;
//! if let Some(wait) = throttle_wait(&message) {
//!     println!("Throttled, try again in {:?}", wait);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use parser::throttle_wait;
