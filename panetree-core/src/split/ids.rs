//! Pane identifier generation
//!
//! Generated IDs have the form `pane-<n>`. An [`IdGenerator`] is an
//! explicit, thread-safe counter owned by whoever originates edits; a
//! shared process-wide instance backs [`generate_id`] for callers that
//! have no generator of their own.

use std::sync::atomic::{AtomicU64, Ordering};

use super::tree::PaneNode;
use super::types::NodeId;

/// Prefix of every generated ID.
pub const ID_PREFIX: &str = "pane-";

/// Suffixes at or above this are ignored when seeding from a tree. A
/// counter starting below it cannot reach them.
const SEED_CEILING: u64 = u64::MAX / 2;

/// Shared generator behind [`generate_id`] and [`reset_id_counter`].
static GLOBAL_IDS: IdGenerator = IdGenerator::new();

/// Monotonic `pane-<n>` ID source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first ID is `pane-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Creates a generator whose first ID follows `last`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }

    /// Creates a generator that will not re-issue any generated ID already
    /// present in `root`, leaf or split.
    ///
    /// Suffixes in the upper half of the `u64` range are skipped so a
    /// hand-edited `pane-18446744073709551615` cannot exhaust the counter.
    #[must_use]
    pub fn seeded_from(root: &PaneNode) -> Self {
        let last = root
            .collect_node_ids()
            .iter()
            .filter_map(NodeId::sequence)
            .filter(|n| *n < SEED_CEILING)
            .max()
            .unwrap_or(0);
        Self::starting_after(last)
    }

    /// Returns the next ID.
    ///
    /// The counter saturates at `u64::MAX` instead of wrapping back to
    /// `pane-0`.
    pub fn next_id(&self) -> NodeId {
        let n = match self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        {
            Ok(previous) => previous + 1,
            Err(_) => u64::MAX,
        };
        NodeId::new(format!("{ID_PREFIX}{n}"))
    }

    /// Returns the number of IDs handed out since creation or the last
    /// reset.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Rewinds the counter so the next ID is `pane-1` again.
    ///
    /// Only meant for deterministic tests: IDs issued before the reset may
    /// still be live and will collide with new ones.
    pub fn reset(&self) {
        self.counter.store(0, Ordering::Relaxed);
    }
}

/// Returns the process-wide generator.
#[must_use]
pub fn global_ids() -> &'static IdGenerator {
    &GLOBAL_IDS
}

/// Returns the next ID from the process-wide generator.
pub fn generate_id() -> NodeId {
    GLOBAL_IDS.next_id()
}

/// Resets the process-wide generator (for testing).
pub fn reset_id_counter() {
    GLOBAL_IDS.reset();
}
