//! Linear undo/redo history with debounced checkpoints.

use std::time::Duration;
use tracing::debug;

use super::debounce::DebounceTimer;
use crate::models::Checkpoint;

/// Outcome of [`HistoryManager::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitState {
    /// A new debounce window was opened for this checkpoint.
    Scheduled,
    /// A checkpoint was already pending; its payload was replaced.
    Coalesced,
}

/// Ordered checkpoints, a cursor and at most one pending checkpoint.
///
/// The cursor always points at a valid checkpoint. Committing after an undo
/// drops everything after the cursor before appending.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    checkpoints: Vec<Checkpoint>,
    cursor: usize,
    pending: DebounceTimer<Checkpoint>,
    debounce: Duration,
}

impl HistoryManager {
    /// Creates a history holding only `initial`.
    #[must_use]
    pub fn new(initial: Checkpoint, debounce: Duration) -> Self {
        Self {
            checkpoints: vec![initial],
            cursor: 0,
            pending: DebounceTimer::new(),
            debounce,
        }
    }

    /// Requests a checkpoint. It is committed once the debounce window that
    /// the first request of a burst opened has elapsed.
    pub fn commit(&mut self, checkpoint: Checkpoint, now: Duration) -> CommitState {
        if self.pending.schedule_once(now, self.debounce, checkpoint) {
            debug!(deadline_ms = ?self.pending.deadline().map(|d| d.as_millis()), "checkpoint scheduled");
            CommitState::Scheduled
        } else {
            debug!("pending checkpoint replaced");
            CommitState::Coalesced
        }
    }

    /// Commits the pending checkpoint if its deadline has passed.
    ///
    /// Returns `true` if a checkpoint was appended.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending.poll(now) {
            Some(checkpoint) => {
                self.append(checkpoint);
                true
            }
            None => false,
        }
    }

    /// Commits the pending checkpoint immediately.
    ///
    /// Returns `true` if a checkpoint was appended.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(checkpoint) => {
                self.append(checkpoint);
                true
            }
            None => false,
        }
    }

    fn append(&mut self, checkpoint: Checkpoint) {
        self.checkpoints.truncate(self.cursor + 1);
        self.checkpoints.push(checkpoint);
        self.cursor = self.checkpoints.len() - 1;
        debug!(cursor = self.cursor, "checkpoint committed");
    }

    /// Discards all checkpoints and any pending one; `initial` becomes the
    /// only entry.
    pub fn reset(&mut self, initial: Checkpoint) {
        if self.pending.cancel().is_some() {
            debug!("pending checkpoint cancelled by reset");
        }
        self.checkpoints.clear();
        self.checkpoints.push(initial);
        self.cursor = 0;
    }

    /// Steps back one checkpoint, returning it. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Checkpoint> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        self.checkpoints.get(self.cursor)
    }

    /// Steps forward one checkpoint, returning it. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&Checkpoint> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        self.checkpoints.get(self.cursor)
    }

    /// Whether an older checkpoint exists.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a newer checkpoint exists.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.checkpoints.len()
    }

    /// Number of committed checkpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Always false: a history holds at least one checkpoint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Index of the current checkpoint.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The checkpoint at the cursor.
    #[must_use]
    pub fn current(&self) -> &Checkpoint {
        &self.checkpoints[self.cursor]
    }

    /// Whether a checkpoint is waiting for its debounce window.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Deadline of the pending checkpoint, if any.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.pending.deadline()
    }

    /// Debounce window applied to new bursts.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }
}
