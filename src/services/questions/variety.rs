//! Variety Selection
//!
//! Picks which focus area or bank variant a call uses, keyed so that
//! independent concerns (say, the technical focus list and the technical
//! bank) rotate independently. Strategy is explicit; nothing here reads
//! ambient global state beyond the thread-local RNG in `Random` mode.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How consecutive picks for the same key relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Uniform pick that never repeats the immediately-previous index
    Random,
    /// Deterministic cycling through indices in order
    RoundRobin,
}

/// Per-key selection state shared by callers of one generator
pub struct VarietySelector {
    strategy: SelectionStrategy,
    state: Mutex<HashMap<String, SelectorState>>,
}

#[derive(Debug, Default)]
struct SelectorState {
    /// Next index for round-robin cycling
    cursor: usize,
    /// Previous pick, avoided in random mode
    last_pick: Option<usize>,
}

impl VarietySelector {
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self {
            strategy,
            state: Mutex::new(HashMap::new()),
        }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Pick an index in `0..len` for `key`.
    ///
    /// With `len` of zero or one there is only one possible answer, so
    /// no state is consumed.
    pub fn pick(&self, key: &str, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = state.entry(key.to_string()).or_default();

        let index = match self.strategy {
            SelectionStrategy::RoundRobin => {
                let index = entry.cursor % len;
                entry.cursor = index + 1;
                index
            }
            SelectionStrategy::Random => {
                let mut index = rand::thread_rng().gen_range(0..len);
                // Shift off the previous pick instead of re-rolling.
                if entry.last_pick == Some(index) {
                    index = (index + 1) % len;
                }
                index
            }
        };

        entry.last_pick = Some(index);
        index
    }
}

impl std::fmt::Debug for VarietySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VarietySelector")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
