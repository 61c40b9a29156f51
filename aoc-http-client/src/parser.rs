//! HTML response parsing utilities

use crate::error::AocError;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;

static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("article selector is valid"));

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("main selector is valid"));

static THROTTLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You have (.+?) left to wait\.").expect("throttle pattern is valid")
});

/// Plain text of the server's message in a submission response
///
/// The message lives in the `<article>` element; pages without one fall back
/// to `<main>`. Runs of whitespace are collapsed to single spaces.
pub(crate) fn extract_message(html: &str) -> Result<String, AocError> {
    let document = Html::parse_document(html);
    let element = document
        .select(&ARTICLE_SELECTOR)
        .next()
        .or_else(|| document.select(&MAIN_SELECTOR).next())
        .ok_or(AocError::HtmlParse)?;

    let text = element.text().collect::<String>();
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// How long the server asks to wait before the next submission
///
/// Reads "You have 1m 30s left to wait." style notices. Returns `None` when
/// the message has no such notice or the duration cannot be parsed.
///
/// ```
/// use aoc_http_client::throttle_wait;
/// use std::time::Duration;
///
/// let message = "You gave an answer too recently. You have 1m 30s left to wait.";
/// assert_eq!(throttle_wait(message), Some(Duration::from_secs(90)));
/// assert_eq!(throttle_wait("That's the right answer!"), None);
/// ```
pub fn throttle_wait(message: &str) -> Option<Duration> {
    let captures = THROTTLE_REGEX.captures(message)?;
    humantime::parse_duration(captures.get(1)?.as_str()).ok()
}
