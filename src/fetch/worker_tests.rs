//! Tests for the suggestion fetch worker

use std::sync::Mutex;
use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::fetch::FetchError;

/// Source that answers every query with a fixed result
struct StubSource(fn(&str) -> Result<Vec<String>, FetchError>);

impl SuggestSource for StubSource {
    fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        (self.0)(query)
    }
}

/// Source that records queries and sleeps before answering
struct SlowSource {
    delay: Duration,
    queries: Mutex<Vec<String>>,
}

impl SlowSource {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl SuggestSource for SlowSource {
    fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        self.queries.lock().unwrap().push(query.to_string());
        std::thread::sleep(self.delay);
        Ok(vec![format!("{query}-result")])
    }
}

#[test]
fn test_worker_forwards_suggestions_with_request_id() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(
        StubSource(|_| Ok(vec!["Alpha".to_string(), "Beta".to_string()])),
        request_rx,
        response_tx,
    );

    request_tx
        .send(SuggestRequest::Query {
            query: "Al".to_string(),
            request_id: 7,
        })
        .unwrap();

    let response = response_rx.recv().unwrap();
    match response {
        SuggestResponse::Suggestions { items, request_id } => {
            assert_eq!(items, vec!["Alpha".to_string(), "Beta".to_string()]);
            assert_eq!(request_id, 7);
        }
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn test_worker_forwards_empty_result() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(StubSource(|_| Ok(Vec::new())), request_rx, response_tx);

    request_tx
        .send(SuggestRequest::Query {
            query: "zzz".to_string(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv().unwrap() {
        SuggestResponse::Suggestions { items, request_id } => {
            assert!(items.is_empty());
            assert_eq!(request_id, 1);
        }
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn test_worker_forwards_fetch_errors() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(
        StubSource(|_| Err(FetchError::Status(502))),
        request_rx,
        response_tx,
    );

    request_tx
        .send(SuggestRequest::Query {
            query: "x".to_string(),
            request_id: 3,
        })
        .unwrap();

    match response_rx.recv().unwrap() {
        SuggestResponse::Error {
            message,
            request_id,
        } => {
            assert!(message.contains("502"));
            assert_eq!(request_id, 3);
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn test_worker_acknowledges_cancel_without_active_request() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(StubSource(|_| Ok(Vec::new())), request_rx, response_tx);

    request_tx
        .send(SuggestRequest::Cancel { request_id: 5 })
        .unwrap();

    let response = response_rx.recv().unwrap();
    assert!(matches!(
        response,
        SuggestResponse::Cancelled { request_id: 5 }
    ));
}

#[test]
fn test_cancel_queued_during_fetch_discards_result() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    // Queue the query and its cancel before the worker starts so the cancel
    // is guaranteed to be waiting when the fetch completes.
    request_tx
        .send(SuggestRequest::Query {
            query: "Ky".to_string(),
            request_id: 1,
        })
        .unwrap();
    request_tx
        .send(SuggestRequest::Cancel { request_id: 1 })
        .unwrap();

    spawn_worker(
        SlowSource::new(Duration::from_millis(10)),
        request_rx,
        response_tx,
    );

    let response = response_rx.recv().unwrap();
    assert!(matches!(
        response,
        SuggestResponse::Cancelled { request_id: 1 }
    ));

    // The fetched result must not arrive
    assert!(
        response_rx
            .recv_timeout(Duration::from_millis(100))
            .is_err()
    );
}

#[test]
fn test_newer_query_supersedes_older_result() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    // Two keystrokes in quick succession: the first query is cancelled and
    // replaced before its fetch completes.
    request_tx
        .send(SuggestRequest::Query {
            query: "K".to_string(),
            request_id: 1,
        })
        .unwrap();
    request_tx
        .send(SuggestRequest::Cancel { request_id: 1 })
        .unwrap();
    request_tx
        .send(SuggestRequest::Query {
            query: "Ky".to_string(),
            request_id: 2,
        })
        .unwrap();

    spawn_worker(
        SlowSource::new(Duration::from_millis(10)),
        request_rx,
        response_tx,
    );

    let mut saw_cancelled_1 = false;
    let mut final_items = None;
    while let Ok(response) = response_rx.recv_timeout(Duration::from_secs(2)) {
        match response {
            SuggestResponse::Cancelled { request_id } => {
                assert_eq!(request_id, 1);
                saw_cancelled_1 = true;
            }
            SuggestResponse::Suggestions { items, request_id } => {
                assert_eq!(request_id, 2, "only the newest query may deliver");
                final_items = Some(items);
                break;
            }
            SuggestResponse::Error { message, .. } => panic!("unexpected error: {message}"),
        }
    }

    assert!(saw_cancelled_1);
    assert_eq!(final_items, Some(vec!["Ky-result".to_string()]));
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = mpsc::channel::<SuggestRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        worker_loop(&StubSource(|_| Ok(Vec::new())), request_rx, response_tx);
    });

    // Drop the sender to close the channel
    drop(request_tx);

    handle.join().expect("worker thread should exit cleanly");
}

#[test]
fn test_worker_passes_query_text_through() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(
        StubSource(|query| Ok(vec![query.to_string()])),
        request_rx,
        response_tx,
    );

    request_tx
        .send(SuggestRequest::Query {
            query: "a&b c".to_string(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv().unwrap() {
        SuggestResponse::Suggestions { items, .. } => {
            assert_eq!(items, vec!["a&b c".to_string()]);
        }
        other => panic!("expected suggestions, got {other:?}"),
    }
}
