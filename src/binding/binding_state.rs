//! Field binding state
//!
//! A `FieldBinding` ties together one text input, one suggestion endpoint,
//! and one suggestion list. Bindings are constructed explicitly at startup
//! with typed handles and live for the process lifetime. Each binding owns
//! its own worker channels, so two bindings never share endpoint traffic or
//! list state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::fetch::{self, SuggestRequest, SuggestResponse, SuggestSource};

/// One input field wired to a suggestion endpoint
pub struct FieldBinding {
    /// Display label, also used in log lines
    pub label: String,
    pub textarea: TextArea<'static>,
    pub suggestions: super::SuggestionList,
    /// Whether a fetch is outstanding for the current text
    pub loading: bool,
    /// Most recent fetch failure, cleared by the next successful response
    pub error: Option<String>,
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<SuggestRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<SuggestResponse>>,
    /// Monotonic request ID, incremented for each new request
    request_id: u64,
    /// ID of the currently in-flight request, if any
    ///
    /// Responses carrying any other ID are stale and get dropped.
    in_flight_request_id: Option<u64>,
    /// Hash of the text that last triggered a fetch decision
    ///
    /// Guards against re-fetching when the text has not changed (cursor
    /// movement, or a suggestion applied programmatically).
    last_query_hash: Option<u64>,
}

impl FieldBinding {
    /// Create a binding and spawn its fetch worker
    pub fn new<S>(label: &str, source: S) -> Self
    where
        S: SuggestSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        fetch::spawn_worker(source, request_rx, response_tx);

        let mut binding = Self::detached(label);
        binding.set_channels(request_tx, response_rx);
        binding
    }

    /// Create a binding with no worker attached
    ///
    /// Used by tests and by callers that wire channels themselves.
    pub fn detached(label: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            label: label.to_string(),
            textarea,
            suggestions: super::SuggestionList::new(),
            loading: false,
            error: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            last_query_hash: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Current field text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// React to a change of the field text
    ///
    /// Empty text clears the dropdown without a network call. Non-empty text
    /// cancels any in-flight request and issues a new one. Unchanged text is
    /// a no-op.
    pub fn on_query_changed(&mut self) {
        let query = self.text().to_string();
        if !self.is_query_changed(&query) {
            return;
        }
        self.set_last_query_hash(&query);
        self.cancel_in_flight_request();

        if query.is_empty() {
            self.suggestions.clear();
            self.loading = false;
            self.error = None;
            return;
        }

        self.send_request(query);
    }

    /// Send a fetch request through the channel
    ///
    /// Returns true if the request was sent. Each send gets a fresh request
    /// ID so responses for earlier text can be recognized as stale.
    fn send_request(&mut self, query: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Query { query, request_id }).is_ok()
        {
            self.in_flight_request_id = Some(request_id);
            self.loading = true;
            return true;
        }
        false
    }

    /// Cancel any in-flight request
    ///
    /// Sends a Cancel message to the worker if a request is outstanding.
    /// Returns true if a cancel was sent.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("{}: sent cancel for request {}", self.label, request_id);
            self.in_flight_request_id = None;
            self.loading = false;
            return true;
        }
        false
    }

    /// Check if there's an in-flight request
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Drain all pending worker responses
    ///
    /// Returns true if anything visible changed, so the caller knows a
    /// redraw is worthwhile.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        loop {
            let response = match self.response_rx {
                Some(ref rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => break,
                },
                None => break,
            };
            changed |= self.handle_response(response);
        }
        changed
    }

    /// Apply one worker response to the binding state
    ///
    /// Responses whose ID does not match the current in-flight request are
    /// stale leftovers of an earlier keystroke and are dropped, so the list
    /// always reflects the newest completed request.
    pub fn handle_response(&mut self, response: SuggestResponse) -> bool {
        match response {
            SuggestResponse::Suggestions { items, request_id } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("{}: dropping stale response {}", self.label, request_id);
                    return false;
                }
                self.in_flight_request_id = None;
                self.loading = false;
                self.error = None;
                self.suggestions.set_items(items);
                true
            }
            SuggestResponse::Error {
                message,
                request_id,
            } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("{}: dropping stale error {}", self.label, request_id);
                    return false;
                }
                self.in_flight_request_id = None;
                self.loading = false;
                log::debug!("{}: fetch failed: {}", self.label, message);
                // Keep the previous list contents; only mark the failure
                self.error = Some(message);
                true
            }
            SuggestResponse::Cancelled { request_id } => {
                log::debug!("{}: request {} cancelled", self.label, request_id);
                false
            }
        }
    }

    /// Apply a suggestion: set the field text to the item and close the list
    ///
    /// The programmatic text change must not trigger another fetch, so the
    /// query hash is updated to the applied text.
    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        let Some(item) = self.suggestions.get(index) else {
            return false;
        };
        let item = item.to_string();

        self.cancel_in_flight_request();
        self.set_text(&item);
        self.set_last_query_hash(&item);
        self.suggestions.clear();
        self.loading = false;
        self.error = None;
        true
    }

    /// Replace the field text, leaving the cursor at the end
    fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        while !self.text().is_empty() {
            self.textarea.delete_char();
        }
        self.textarea.insert_str(text);
    }

    /// Compute a hash for a query string
    fn compute_query_hash(query: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        query.hash(&mut hasher);
        hasher.finish()
    }

    /// Check if the text differs from the last fetch decision
    pub fn is_query_changed(&self, query: &str) -> bool {
        let query_hash = Self::compute_query_hash(query);
        match self.last_query_hash {
            None => true,
            Some(last_hash) => query_hash != last_hash,
        }
    }

    /// Record the text a fetch decision was made for
    pub fn set_last_query_hash(&mut self, query: &str) {
        self.last_query_hash = Some(Self::compute_query_hash(query));
    }
}

#[cfg(test)]
#[path = "binding_state_tests.rs"]
mod binding_state_tests;
