//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::extract_message;
use reqwest::blocking::Response;
use reqwest::header::{COOKIE, HeaderValue};
use zeroize::Zeroizing;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Blocking client for the Advent of Code website
///
/// Redirects are never followed: an expired session is answered with a
/// redirect, which then surfaces as [`AocError::InvalidStatus`].
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// println!("Input: {} bytes", input.len());
///
/// let message = client.submit_answer(2024, 1, 1, "42", session)?;
/// println!("{message}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a client for adventofcode.com with rustls and no redirects
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Sensitive `Cookie` header for a session token
    fn cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let cookie = Zeroizing::new(format!("session={}", session.trim()));
        let mut header =
            HeaderValue::from_str(&cookie).map_err(|_| AocError::InvalidSession)?;
        header.set_sensitive(true);
        Ok(header)
    }

    fn endpoint(&self, year: u16, day: u8, tail: Option<&str>) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?;
            segments
                .clear()
                .extend(&[year.to_string().as_str(), "day", day.to_string().as_str()]);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    fn text(response: Response) -> Result<String, AocError> {
        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }
        response.text().map_err(|_| AocError::Encoding)
    }

    /// Fetch the personal puzzle input for a year and day
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.endpoint(year, day, Some("input"))?;
        let response = self
            .client
            .get(url)
            .header(COOKIE, Self::cookie_header(session)?)
            .send()?;
        Self::text(response)
    }

    /// Fetch the raw HTML of a day's puzzle page
    ///
    /// Once a part is solved, the page shows its accepted answer.
    pub fn get_puzzle_page(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.endpoint(year, day, None)?;
        let response = self
            .client
            .get(url)
            .header(COOKIE, Self::cookie_header(session)?)
            .send()?;
        Self::text(response)
    }

    /// Submit an answer for a puzzle part and return the server's message
    ///
    /// The message is the plain text of the response's `<article>` element,
    /// e.g. "That's the right answer! ...". Interpreting it is up to the caller.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error
    /// * `AocError::Encoding` - Response is not valid UTF-8
    /// * `AocError::HtmlParse` - No message element in the response
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<String, AocError> {
        let url = self.endpoint(year, day, Some("answer"))?;
        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header(COOKIE, Self::cookie_header(session)?)
            .form(&form)
            .send()?;

        let html = Self::text(response)?;
        extract_message(&html)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// The redirect policy is always forced to `Policy::none()`.
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL, e.g. a mock server
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, user agent)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}
