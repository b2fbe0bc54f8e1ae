//! A single self-rescheduling poll loop.
//!
//! # Responsibilities
//! - Issue the GET for each cycle
//! - Apply completed responses to the display region
//! - Schedule the next cycle after the refresh interval

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use crate::display::DisplaySurface;
use crate::observability::metrics;
use crate::poller::request::PollRequest;
use crate::poller::state::{CycleOutcome, PollState};
use crate::transport::{Response, Transport};

/// One poll loop: a request, its failure counter, and its collaborators.
pub struct PollLoop<T, D> {
    request: PollRequest,
    state: PollState,
    transport: Arc<T>,
    display: Arc<D>,
    failure_message: Arc<str>,
    cycles_started: AtomicU64,
}

impl<T: Transport, D: DisplaySurface> PollLoop<T, D> {
    pub fn new(
        request: PollRequest,
        transport: Arc<T>,
        display: Arc<D>,
        failure_message: Arc<str>,
    ) -> Self {
        Self {
            request,
            state: PollState::new(),
            transport,
            display,
            failure_message,
            cycles_started: AtomicU64::new(0),
        }
    }

    pub fn request(&self) -> &PollRequest {
        &self.request
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Number of GETs issued so far.
    pub fn cycles_started(&self) -> u64 {
        self.cycles_started.load(Ordering::Relaxed)
    }

    /// Begin one cycle: issue the GET and handle its ready-state changes.
    pub fn start_poll(self: &Arc<Self>) {
        let cycle = self.cycles_started.fetch_add(1, Ordering::Relaxed) + 1;
        let span = tracing::debug_span!(
            "poll_cycle",
            target_id = %self.request.target,
            cycle,
            cycle_id = %Uuid::new_v4()
        );

        let events = self.transport.get(&self.request.url);
        let this = Arc::clone(self);
        tokio::spawn(this.run_cycle(events).instrument(span));
    }

    async fn run_cycle(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<Response>) {
        // Stays pending for as long as the transport keeps the request open.
        while let Some(response) = events.recv().await {
            if self.on_response_ready(&response).is_some() {
                self.schedule_next();
            }
        }
    }

    /// Handle one ready-state change.
    ///
    /// Returns `None` (and touches nothing) unless the request is complete.
    /// A `Some` outcome means the caller must schedule the next cycle.
    pub fn on_response_ready(&self, response: &Response) -> Option<CycleOutcome> {
        if !response.is_complete() {
            tracing::trace!(ready_state = ?response.ready_state, "Request not complete yet");
            return None;
        }

        let target = self.request.target.as_str();
        metrics::record_response_status(target, response.status);

        let outcome = if response.is_ok() {
            let outcome = self.state.record_success();
            self.display.set_content(target, &response.body);
            tracing::debug!(bytes = response.body.len(), "Region updated");
            outcome
        } else {
            let outcome = self.state.record_failure();
            match outcome {
                CycleOutcome::HardFailure => {
                    self.display.set_content(target, &self.failure_message);
                    tracing::warn!(status = response.status, "Poll failed; showing failure message");
                }
                _ => {
                    tracing::info!(status = response.status, "Poll failed; tolerating once");
                }
            }
            outcome
        };

        metrics::record_cycle(target, outcome, self.state.consecutive_failures());
        Some(outcome)
    }

    fn schedule_next(self: &Arc<Self>) {
        let this = Arc::clone(self);
        let delay = self.request.refresh;
        tracing::trace!(delay = ?delay, "Next poll scheduled");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.start_poll();
        });
    }
}
