//! Rolling sample history.

use std::collections::VecDeque;

use crate::monitor::types::Sample;

/// Maximum number of samples retained in memory.
pub const HISTORY_CAPACITY: usize = 100;

/// Fixed-capacity FIFO of recent samples, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: VecDeque<Sample>,
}

impl History {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Rebuild a history by replaying samples in chronological order.
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        let mut history = Self::new();
        for sample in samples {
            history.append(sample);
        }
        history
    }

    /// Append a sample, evicting the oldest when over capacity.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        if self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }
}
