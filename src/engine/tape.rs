//! The trade tape: a bounded, append-only, time-ordered log of executions.
//!
//! Eviction happens synchronously on append, so the size bound holds the
//! instant it would be exceeded; there is no background trimming.

use std::collections::VecDeque;

use crate::types::Trade;

/// Number of most-recent trades the tape retains.
pub const TAPE_RETENTION: usize = 200;

/// Bounded chronological trade log.
#[derive(Debug)]
pub struct TradeTape {
    trades: VecDeque<Trade>,
    retention: usize,
}

impl Default for TradeTape {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeTape {
    /// Create a tape with the default retention window
    pub fn new() -> Self {
        Self::with_retention(TAPE_RETENTION)
    }

    /// Create a tape retaining the `retention` most recent trades
    pub fn with_retention(retention: usize) -> Self {
        Self {
            trades: VecDeque::with_capacity(retention),
            retention,
        }
    }

    /// Number of trades currently retained
    #[inline]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Check if the tape is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Append a trade, evicting the oldest entries beyond the retention
    /// window.
    pub fn push(&mut self, trade: Trade) {
        self.trades.push_back(trade);
        while self.trades.len() > self.retention {
            self.trades.pop_front();
        }
    }

    /// The up-to-`n` most recent trades in chronological order (oldest of
    /// the returned window first, most recent last).
    pub fn recent(&self, n: usize) -> Vec<Trade> {
        let take = n.min(self.trades.len());
        self.trades
            .iter()
            .skip(self.trades.len() - take)
            .cloned()
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
