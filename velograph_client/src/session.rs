// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::{debug, warn};
use velograph_catalog::SearchPage;

use crate::error::ClientError;

/// Identifies one issued request; later requests compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issues increasing [`RequestToken`]s and remembers the latest one.
#[derive(Clone, Debug, Default)]
pub struct SearchSequencer {
    issued: u64,
}

impl SearchSequencer {
    /// Creates a sequencer that has issued nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issues the next token, superseding every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Returns `true` if `token` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// The most recently issued token, if any.
    #[must_use]
    pub fn latest(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }
}

/// Results of the latest search, immune to out-of-order completions.
///
/// Call [`begin`](Self::begin) before sending a request and hand the
/// outcome to [`complete`](Self::complete) with the returned token. Only the
/// latest request's outcome is applied. A failure clears the results and
/// keeps a message for display.
#[derive(Clone, Debug)]
pub struct SearchSession<T> {
    sequencer: SearchSequencer,
    results: SearchPage<T>,
    error: Option<String>,
    loading: bool,
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchSession<T> {
    /// Creates an idle session with no results.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequencer: SearchSequencer::new(),
            results: SearchPage::default(),
            error: None,
            loading: false,
        }
    }

    /// Starts a request.
    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.sequencer.issue()
    }

    /// Applies the outcome of the request `token`.
    ///
    /// Returns `false`, leaving the session untouched, if a newer request
    /// was started in the meantime.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchPage<T>, ClientError>,
    ) -> bool {
        if !self.sequencer.is_current(token) {
            debug!(token = token.get(), "discarding stale search response");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.results = page;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                self.results = SearchPage::default();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Latest applied results.
    #[must_use]
    pub fn results(&self) -> &SearchPage<T> {
        &self.results
    }

    /// Consumes the session, returning the latest applied results.
    #[must_use]
    pub fn into_results(self) -> SearchPage<T> {
        self.results
    }

    /// Message of the latest failure, cleared by the next success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` while the latest request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
