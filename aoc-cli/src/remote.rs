//! Inputs and submissions backed by the local cache and adventofcode.com

use crate::cache::InputCache;
use crate::config::Session;
use aoc_http_client::{AocClient, throttle_wait};
use aoc_submission::{BoxError, PuzzleId, PuzzleInputs, SubmissionTransport};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Puzzle data source and submission channel for one run
///
/// Inputs and samples are looked up once per day and kept in memory, so both
/// parts of a day share a single download.
pub struct Remote<'a> {
    cache: &'a InputCache,
    client: &'a AocClient,
    session: &'a Session,
    auto_retry: bool,
    inputs: RefCell<HashMap<(u16, u8), String>>,
    samples: RefCell<HashMap<(u16, u8), Option<String>>>,
}

impl<'a> Remote<'a> {
    pub fn new(
        cache: &'a InputCache,
        client: &'a AocClient,
        session: &'a Session,
        auto_retry: bool,
    ) -> Self {
        Self {
            cache,
            client,
            session,
            auto_retry,
            inputs: RefCell::default(),
            samples: RefCell::default(),
        }
    }

    fn load_input(&self, year: u16, day: u8) -> Result<String, BoxError> {
        if let Some(input) = self.cache.get(year, day)? {
            debug!("{year}/{day:02}: using cached input");
            return Ok(input);
        }

        info!("{year}/{day:02}: downloading input");
        let input = self.client.get_input(year, day, self.session.token()?)?;

        if let Err(e) = self.cache.put(year, day, &input) {
            warn!("{year}/{day:02}: failed to cache input: {e}");
        }
        Ok(input)
    }
}

impl PuzzleInputs for Remote<'_> {
    fn input(&self, puzzle: PuzzleId) -> Result<String, BoxError> {
        let key = (puzzle.year, puzzle.day);
        if let Some(input) = self.inputs.borrow().get(&key) {
            return Ok(input.clone());
        }
        let input = self.load_input(puzzle.year, puzzle.day)?;
        self.inputs.borrow_mut().insert(key, input.clone());
        Ok(input)
    }

    fn sample(&self, puzzle: PuzzleId) -> Result<Option<String>, BoxError> {
        let key = (puzzle.year, puzzle.day);
        if let Some(sample) = self.samples.borrow().get(&key) {
            return Ok(sample.clone());
        }
        let sample = self.cache.sample(puzzle.year, puzzle.day)?;
        if sample.is_none() {
            debug!(
                "{}/{:02}: no sample input, save one at {} to run it first",
                puzzle.year,
                puzzle.day,
                self.cache.sample_path(puzzle.year, puzzle.day).display()
            );
        }
        self.samples.borrow_mut().insert(key, sample.clone());
        Ok(sample)
    }
}

impl SubmissionTransport for Remote<'_> {
    fn submit_answer(&self, puzzle: PuzzleId, answer: &str) -> Result<String, BoxError> {
        loop {
            info!("{puzzle}: submitting {answer}");
            let message = self.client.submit_answer(
                puzzle.year,
                puzzle.day,
                puzzle.part,
                answer,
                self.session.token()?,
            )?;

            match throttle_wait(&message) {
                Some(wait) if self.auto_retry => {
                    warn!("{puzzle}: throttled, retrying in {}s", wait.as_secs());
                    std::thread::sleep(wait);
                }
                _ => return Ok(message),
            }
        }
    }

    fn puzzle_page(&self, puzzle: PuzzleId) -> Result<String, BoxError> {
        Ok(self
            .client
            .get_puzzle_page(puzzle.year, puzzle.day, self.session.token()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use zeroize::Zeroizing;

    const PUZZLE: PuzzleId = PuzzleId::new(2023, 1, 1);
    const THROTTLED: &str = "<main><article><p>You gave an answer too recently; you have to wait after submitting an answer before trying again.  You have 0s left to wait. <a href=\"/2023/day/1\">[Return to Day 1]</a></p></article></main>";
    const ACCEPTED: &str = "<main><article><p>That's the right answer!  You are one gold star closer to restoring snow operations.</p></article></main>";

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    fn session() -> Session {
        Session::from_token(Zeroizing::new("53616c74".to_string()))
    }

    #[test]
    fn test_cached_input_needs_no_session() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        cache.put(2023, 1, "1abc2\n").unwrap();
        let client = AocClient::new().unwrap();
        let session = Session::new();
        let remote = Remote::new(&cache, &client, &session, false);

        assert_eq!(remote.input(PUZZLE).unwrap(), "1abc2\n");

        // Later lookups come from memory even if the file goes away
        fs::remove_file(cache.input_path(2023, 1)).unwrap();
        assert_eq!(remote.input(PUZZLE.with_part(2)).unwrap(), "1abc2\n");
    }

    #[test]
    fn test_sample_is_looked_up_once_per_day() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        let client = AocClient::new().unwrap();
        let session = Session::new();
        let remote = Remote::new(&cache, &client, &session, false);

        assert_eq!(remote.sample(PUZZLE).unwrap(), None);

        fs::create_dir_all(temp.path().join("samples")).unwrap();
        fs::write(cache.sample_path(2023, 1), "sample").unwrap();
        assert_eq!(remote.sample(PUZZLE.with_part(2)).unwrap(), None);
        assert_eq!(
            remote.sample(PuzzleId::new(2023, 2, 1)).unwrap(),
            None,
            "other days are looked up separately"
        );
    }

    #[test]
    fn test_throttled_submission_is_retried_with_auto_retry() {
        let mut server = mockito::Server::new();
        let throttled = server
            .mock("POST", "/2023/day/1/answer")
            .with_status(200)
            .with_body(THROTTLED)
            .expect(1)
            .create();
        let accepted = server
            .mock("POST", "/2023/day/1/answer")
            .with_status(200)
            .with_body(ACCEPTED)
            .expect(1)
            .create();
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        let client = client_for(&server);
        let session = session();
        let remote = Remote::new(&cache, &client, &session, true);

        let message = remote.submit_answer(PUZZLE, "142").unwrap();

        assert!(message.starts_with("That's the right answer!"));
        throttled.assert();
        accepted.assert();
    }

    #[test]
    fn test_throttled_submission_is_returned_without_auto_retry() {
        let mut server = mockito::Server::new();
        let throttled = server
            .mock("POST", "/2023/day/1/answer")
            .with_status(200)
            .with_body(THROTTLED)
            .expect(1)
            .create();
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        let client = client_for(&server);
        let session = session();
        let remote = Remote::new(&cache, &client, &session, false);

        let message = remote.submit_answer(PUZZLE, "142").unwrap();

        assert!(message.contains("You have 0s left to wait."));
        throttled.assert();
    }

    #[test]
    fn test_puzzle_page_is_fetched_with_session() {
        let mut server = mockito::Server::new();
        let page = "<main><p>Your puzzle answer was <code>54304</code>.</p></main>";
        let mock = server
            .mock("GET", "/2023/day/1")
            .match_header("cookie", "session=53616c74")
            .with_status(200)
            .with_body(page)
            .expect(1)
            .create();
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        let client = client_for(&server);
        let session = session();
        let remote = Remote::new(&cache, &client, &session, false);

        assert_eq!(remote.puzzle_page(PUZZLE.with_part(2)).unwrap(), page);
        mock.assert();
    }

    #[test]
    fn test_downloaded_input_is_cached() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2023/day/1/input")
            .with_status(200)
            .with_body("1abc2\n")
            .expect(1)
            .create();
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        let client = client_for(&server);
        let session = session();
        let remote = Remote::new(&cache, &client, &session, false);

        assert_eq!(remote.input(PUZZLE).unwrap(), "1abc2\n");
        assert_eq!(remote.input(PUZZLE.with_part(2)).unwrap(), "1abc2\n");
        assert_eq!(cache.get(2023, 1).unwrap().as_deref(), Some("1abc2\n"));
        mock.assert();
    }
}
