//! Poll-cycle state machine shared by both dashboard widgets.
//!
//! Each widget owns one `PollTracker`. The tracker makes the implicit
//! component-state lifecycle explicit: what is displayed, whether the
//! display is stale, and which in-flight request is still allowed to
//! update it.

use std::fmt;

use chrono::DateTime;
use chrono::Local;

/// Consecutive failed refreshes before the display is flagged stale.
pub const STALE_AFTER_FAILURES: u32 = 3;

/// Display state of one polling widget.
#[derive(Debug, Clone, PartialEq)]
pub enum PollState<T> {
    /// No fetch has been issued yet.
    Idle,
    /// First fetch is in flight; nothing to display yet.
    Loading,
    /// Showing the latest successful fetch.
    Loaded(T),
    /// Refreshes keep failing; whatever we have stays visible, flagged.
    Stale { data: Option<T>, last_error: String },
}

/// Tracks fetch completions for one widget.
///
/// Requests carry a monotonically increasing sequence number; a response
/// is only applied if it belongs to the most recently issued request, so
/// a slow stale response can never overwrite a fresher one.
#[derive(Debug, Clone, PartialEq)]
pub struct PollTracker<T> {
    state: PollState<T>,
    latest_seq: u64,
    consecutive_failures: u32,
    last_success: Option<DateTime<Local>>,
}

impl<T> Default for PollTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PollTracker<T> {
    pub fn new() -> Self {
        Self {
            state: PollState::Idle,
            latest_seq: 0,
            consecutive_failures: 0,
            last_success: None,
        }
    }

    /// Registers a new fetch and returns its sequence number.
    ///
    /// Only the `Idle -> Loading` edge changes the display; later cycles
    /// keep showing the current data while the refresh runs.
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        if matches!(self.state, PollState::Idle) {
            self.state = PollState::Loading;
        }
        self.latest_seq
    }

    /// Folds a fetch result into the display state.
    pub fn complete<E: fmt::Display>(&mut self, seq: u64, result: Result<T, E>) {
        self.complete_at(seq, result, Local::now());
    }

    /// Like [`complete`](Self::complete) with an explicit clock, so state
    /// transitions stay deterministic under test.
    pub fn complete_at<E: fmt::Display>(
        &mut self,
        seq: u64,
        result: Result<T, E>,
        now: DateTime<Local>,
    ) {
        if seq != self.latest_seq {
            // Response to a request that has been superseded.
            return;
        }

        match result {
            Ok(data) => {
                self.state = PollState::Loaded(data);
                self.consecutive_failures = 0;
                self.last_success = Some(now);
            }
            Err(e) => {
                self.consecutive_failures += 1;
                if self.consecutive_failures >= STALE_AFTER_FAILURES {
                    let prev = std::mem::replace(&mut self.state, PollState::Idle);
                    let data = match prev {
                        PollState::Loaded(d) => Some(d),
                        PollState::Stale { data, .. } => data,
                        PollState::Idle | PollState::Loading => None,
                    };
                    self.state = PollState::Stale {
                        data,
                        last_error: e.to_string(),
                    };
                }
                // Below the threshold the previous display stands as-is.
            }
        }
    }

    pub fn state(&self) -> &PollState<T> {
        &self.state
    }

    /// The data currently eligible for display, stale or not.
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            PollState::Loaded(d) => Some(d),
            PollState::Stale { data, .. } => data.as_ref(),
            PollState::Idle | PollState::Loading => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self.state, PollState::Stale { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            PollState::Stale { last_error, .. } => Some(last_error),
            _ => None,
        }
    }

    /// Wall-clock time of the last successful fetch.
    pub fn last_success(&self) -> Option<DateTime<Local>> {
        self.last_success
    }
}
