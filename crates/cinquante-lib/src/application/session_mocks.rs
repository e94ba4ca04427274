//! Mock implementations of session providers for testing
//!
//! These mocks enable testing of the game loop without a terminal or any
//! network access: scripted guesses in, call-counting API clients behind.

use crate::api::{MockWikidataClient, MockWikipediaClient};
use crate::application::session::{ApiProvider, InteractiveProvider};
use anyhow::Result;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock knowledge-base provider wrapping the scripted API clients
pub struct MockApiProvider {
    pub wikipedia: MockWikipediaClient,
    pub wikidata: MockWikidataClient,
}

impl MockApiProvider {
    pub fn new(wikipedia: MockWikipediaClient, wikidata: MockWikidataClient) -> Self {
        Self {
            wikipedia,
            wikidata,
        }
    }
}

impl ApiProvider for MockApiProvider {
    type Wikipedia = MockWikipediaClient;
    type Wikidata = MockWikidataClient;

    fn wikipedia(&self) -> &MockWikipediaClient {
        &self.wikipedia
    }

    fn wikidata(&self) -> &MockWikidataClient {
        &self.wikidata
    }
}

/// Mock player input: a fixed script of lines, then end-of-session
pub struct MockInteractiveProvider {
    inputs: Mutex<VecDeque<String>>,
}

impl MockInteractiveProvider {
    pub fn with_guesses(guesses: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(guesses.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Scripted lines not yet consumed by the game loop
    pub fn remaining(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn next_guess(&self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.inputs.lock().unwrap().pop_front())
    }
}
