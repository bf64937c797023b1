//! Turn calendar
//!
//! One turn is one in-game day. Every `turns_per_month` turns the calendar
//! month advances, wrapping December back to January.

use serde::{Deserialize, Serialize};

/// Default number of turns in one in-game month
pub const TURNS_PER_MONTH: u32 = 30;

/// Calendar tracks the current turn and calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    current_turn: u32,
    current_month: u32,
}

impl Calendar {
    pub fn new() -> Self {
        Self {
            current_turn: 1,
            current_month: 1,
        }
    }

    /// Restore a calendar from persisted values, rejecting impossible dates
    pub fn from_parts(current_turn: u32, current_month: u32) -> Option<Self> {
        if current_turn == 0 || !(1..=12).contains(&current_month) {
            return None;
        }
        Some(Self {
            current_turn,
            current_month,
        })
    }

    /// Advance one turn. Returns true when the month rolled over.
    pub fn advance(&mut self, turns_per_month: u32) -> bool {
        self.current_turn += 1;
        if turns_per_month > 0 && (self.current_turn - 1) % turns_per_month == 0 {
            self.current_month = self.current_month % 12 + 1;
            true
        } else {
            false
        }
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn current_month(&self) -> u32 {
        self.current_month
    }

    pub fn is_valid(&self) -> bool {
        self.current_turn >= 1 && (1..=12).contains(&self.current_month)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_starts_on_turn_one_january() {
        let cal = Calendar::new();
        assert_eq!(cal.current_turn(), 1);
        assert_eq!(cal.current_month(), 1);
    }

    #[test]
    fn test_month_advances_after_thirty_turns() {
        let mut cal = Calendar::new();

        for _ in 0..29 {
            assert!(!cal.advance(TURNS_PER_MONTH));
        }
        assert_eq!(cal.current_turn(), 30);
        assert_eq!(cal.current_month(), 1);

        // 30th advance lands on turn 31, first day of month two
        assert!(cal.advance(TURNS_PER_MONTH));
        assert_eq!(cal.current_turn(), 31);
        assert_eq!(cal.current_month(), 2);
    }

    #[test]
    fn test_month_wraps_december_to_january() {
        let mut cal = Calendar::from_parts(331, 12).unwrap();
        for _ in 0..30 {
            cal.advance(TURNS_PER_MONTH);
        }
        assert_eq!(cal.current_month(), 1);
        assert_eq!(cal.current_turn(), 361);
    }

    #[test]
    fn test_from_parts_rejects_bad_month() {
        assert!(Calendar::from_parts(1, 0).is_none());
        assert!(Calendar::from_parts(1, 13).is_none());
        assert!(Calendar::from_parts(0, 1).is_none());
    }
}
