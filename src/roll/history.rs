use crate::common::{NonEmpty, Side, Triple};
use crate::hand::{Hand, RollOutcome};

/// One roll performed by a side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollAttempt {
    /// 1-based.
    pub attempt: usize,
    pub dice: Triple,
    pub hand: Hand,
}

impl RollAttempt {
    pub(crate) fn new(attempt: usize, outcome: &RollOutcome) -> Self {
        Self {
            attempt,
            dice: outcome.dice,
            hand: outcome.hand,
        }
    }
}

/// Everything one side rolled, and the hand it ended with.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SideRoll {
    pub side: Side,
    pub outcome: RollOutcome,
    pub history: NonEmpty<RollAttempt>,
}

impl SideRoll {
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Whether any attempt before the final one was thrown away.
    pub fn rerolled(&self) -> bool {
        self.history.len() > 1
    }
}
