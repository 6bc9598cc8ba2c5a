//! Suggestion fetch worker
//!
//! Handles suggestion requests in a background thread so HTTP calls never
//! block the UI. Receives requests via channel, fetches from the suggestion
//! source, and sends results back to the main thread.
//!
//! Every request carries a monotonic `request_id`. The main thread cancels a
//! request by id when the query changes, and the worker discards a fetched
//! result whose id has been cancelled or superseded while the fetch was in
//! flight. The receiving side additionally drops responses whose id no
//! longer matches its current in-flight id, so a slow early response can
//! never clobber the list for a newer query.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::source::SuggestSource;

/// Request messages sent to the fetch worker thread
#[derive(Debug)]
pub enum SuggestRequest {
    /// Fetch suggestions for the given query text
    Query {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel {
        /// ID of the request to cancel
        request_id: u64,
    },
}

/// Response messages received from the fetch worker thread
#[derive(Debug)]
pub enum SuggestResponse {
    /// Suggestions fetched successfully
    Suggestions {
        items: Vec<String>,
        /// Request ID these suggestions belong to
        request_id: u64,
    },
    /// The fetch failed
    Error {
        message: String,
        /// Request ID the failure belongs to
        request_id: u64,
    },
    /// The request was cancelled before its result was delivered
    Cancelled {
        /// Request ID that was cancelled
        request_id: u64,
    },
}

/// Spawn the fetch worker thread for one binding
///
/// The thread runs until the request channel is closed.
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) where
    S: SuggestSource + Send + 'static,
{
    std::thread::spawn(move || {
        worker_loop(&source, request_rx, response_tx);
    });
}

/// Main worker loop, processes requests until the channel is closed
fn worker_loop<S: SuggestSource>(
    source: &S,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    // A Query popped while draining the backlog of an earlier fetch; it is
    // processed before blocking on the channel again.
    let mut pending: Option<SuggestRequest> = None;

    loop {
        let request = match pending.take() {
            Some(request) => request,
            None => match request_rx.recv() {
                Ok(request) => request,
                Err(_) => break,
            },
        };

        match request {
            SuggestRequest::Query { query, request_id } => {
                let outcome = source.fetch(&query);

                // Anything that arrived while fetching makes this result
                // stale: a Cancel for it, or a newer Query.
                let mut stale = false;
                loop {
                    match request_rx.try_recv() {
                        Ok(SuggestRequest::Cancel { request_id: id }) => {
                            if id == request_id {
                                stale = true;
                                let _ = response_tx.send(SuggestResponse::Cancelled {
                                    request_id: id,
                                });
                                log::debug!("cancelled request {} during fetch", id);
                            } else {
                                log::debug!(
                                    "ignoring cancel for request {} (current: {})",
                                    id,
                                    request_id
                                );
                            }
                        }
                        Ok(next @ SuggestRequest::Query { .. }) => {
                            stale = true;
                            pending = Some(next);
                            break;
                        }
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => return,
                    }
                }
                if stale {
                    continue;
                }

                let response = match outcome {
                    Ok(items) => SuggestResponse::Suggestions { items, request_id },
                    Err(e) => SuggestResponse::Error {
                        message: e.to_string(),
                        request_id,
                    },
                };
                if response_tx.send(response).is_err() {
                    // Main thread disconnected
                    return;
                }
            }
            SuggestRequest::Cancel { request_id } => {
                // Cancel received when no request is in flight, acknowledge
                let _ = response_tx.send(SuggestResponse::Cancelled { request_id });
                log::debug!("cancelled request {} (no active request)", request_id);
            }
        }
    }

    log::debug!("fetch worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
