//! Rolling log of recent turns for the front end

use serde::Serialize;
use std::collections::VecDeque;

use crate::core::types::Money;

/// Maximum turn summaries to keep
const MAX_HISTORY_ENTRIES: usize = 50;

/// One line of the turn log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnSummary {
    pub turn: u32,
    pub month: u32,
    pub renovating: bool,
    pub occupancy_percent: f64,
    pub revenue: Money,
    pub expense: Money,
    pub balance_after: Money,
    pub reputation_after: f64,
}

impl TurnSummary {
    pub fn profit(&self) -> Money {
        self.revenue - self.expense
    }
}

#[derive(Debug, Clone, Default)]
pub struct TurnHistory {
    entries: VecDeque<TurnSummary>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY_ENTRIES),
        }
    }

    pub fn push(&mut self, summary: TurnSummary) {
        if self.entries.len() >= MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(summary);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TurnSummary> {
        self.entries.iter()
    }

    /// The most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &TurnSummary> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn total_profit(&self) -> Money {
        self.entries.iter().map(TurnSummary::profit).sum()
    }
}
