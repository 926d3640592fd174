//! Background page fetch runner
//!
//! Each page request runs on its own thread and reports back over a channel
//! that the main loop polls on every tick. Starting a new request cancels the
//! previous one; a cancelled request never delivers its result.
//!
//! Cancelling does not interrupt the blocking HTTP call. The superseded
//! thread lives until the server answers or `request_timeout_secs` expires,
//! so with no timeout configured a hung server keeps one thread per
//! abandoned page alive.

use crate::model::{PaginationCursor, SearchResponse};
use crate::services::omdb::{FetchError, MovieSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Handle used to discard an in-flight request
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the request; calling this more than once is harmless
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Result of a finished page request
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded {
        cursor: PaginationCursor,
        page: SearchResponse,
    },
    Failed {
        cursor: PaginationCursor,
        error: FetchError,
    },
}

struct FetchJob {
    cursor: PaginationCursor,
    token: CancelToken,
    receiver: Receiver<Result<SearchResponse, FetchError>>,
    start_instant: Instant,
}

/// Runs at most one live page request at a time
pub struct FetchRunner {
    source: Arc<dyn MovieSource>,
    job: Option<FetchJob>,
}

impl FetchRunner {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self { source, job: None }
    }

    /// Start fetching the page for `cursor`, superseding any running request
    pub fn spawn(&mut self, cursor: PaginationCursor) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let token = CancelToken::new();
        let source = Arc::clone(&self.source);
        let worker_token = token.clone();
        let page = cursor.remote_page();

        thread::spawn(move || {
            Self::run_request(source.as_ref(), page, &worker_token, tx);
        });

        tracing::debug!(page, page_size = cursor.page_size, "fetch started");

        self.job = Some(FetchJob {
            cursor,
            token,
            receiver: rx,
            start_instant: Instant::now(),
        });
    }

    /// Check whether the live request finished
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let job = self.job.as_ref()?;

        let outcome = match job.receiver.try_recv() {
            Ok(Ok(page)) => FetchOutcome::Loaded {
                cursor: job.cursor,
                page,
            },
            Ok(Err(error)) => FetchOutcome::Failed {
                cursor: job.cursor,
                error,
            },
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => FetchOutcome::Failed {
                cursor: job.cursor,
                error: FetchError::Interrupted,
            },
        };

        tracing::debug!(
            page = job.cursor.remote_page(),
            elapsed_ms = job.start_instant.elapsed().as_millis() as u64,
            "fetch finished"
        );
        self.job = None;
        Some(outcome)
    }

    /// Discard the live request, if any
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            job.token.cancel();
            tracing::debug!(page = job.cursor.remote_page(), "fetch cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    fn run_request(
        source: &dyn MovieSource,
        page: u32,
        token: &CancelToken,
        tx: Sender<Result<SearchResponse, FetchError>>,
    ) {
        if token.is_cancelled() {
            return;
        }
        let result = source.search(page);
        if token.is_cancelled() {
            return;
        }
        let _ = tx.send(result);
    }
}

impl Drop for FetchRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}
