//! Scale generation, adjustment and history.
//!
//! [`ScaleGenerator`] turns a seed into eleven base colors,
//! [`AdjustmentEngine`] applies per-step offsets on top of them and
//! [`HistoryManager`] keeps debounced undo/redo checkpoints. [`Session`] owns
//! one of each and is the only place where they are combined.

pub mod adjust;
pub mod debounce;
pub mod history;
pub mod scale;
pub mod session;

pub use adjust::{apply_edit, propagate, AdjustmentEngine, NEIGHBOR_DECAY};
pub use debounce::{Clock, DebounceTimer, ManualClock, SystemClock};
pub use history::{CommitState, HistoryManager};
pub use scale::{BaseScale, ScaleGenerator, ScaleSettings};
pub use session::{Effect, Session, SessionEvent, SessionSettings};
