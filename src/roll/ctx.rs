use super::history::{RollAttempt, SideRoll};
use super::roller::Roller;
use crate::common::*;
use crate::hand::{classify, RollOutcome};

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Rolls one side at a time, rerolling "Nothing" until the cap is reached.
pub struct RollContext<'r, R: ?Sized = DefaultRoller> {
    max_rolls: RollCap,
    rolls: usize,
    roller: &'r mut R,
}

impl<'r, R: Roller + ?Sized> RollContext<'r, R> {
    pub fn new(max_rolls: RollCap, roller: &'r mut R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn max_rolls(&self) -> RollCap {
        self.max_rolls
    }

    fn roll_once(&mut self, side: Side) -> RollOutcome {
        self.rolls += 1;
        let outcome = classify(self.roller.roll_three());
        tracing::debug!(
            %side,
            attempt = self.rolls,
            dice = %outcome.dice,
            hand = %outcome.hand,
            "rolled"
        );
        outcome
    }

    fn may_reroll(&self, last: &RollOutcome) -> bool {
        self.rolls < self.max_rolls.get() && last.hand.is_nothing()
    }

    /// Rolls at least once, and again only while the last hand is
    /// [`Hand::Nothing`](crate::hand::Hand::Nothing) and the cap allows it.
    pub fn roll_side(&mut self, side: Side) -> SideRoll {
        self.rolls = 0;

        let mut outcome = self.roll_once(side);
        let mut history = vec1![RollAttempt::new(self.rolls, &outcome)];

        while self.may_reroll(&outcome) {
            outcome = self.roll_once(side);
            history.push(RollAttempt::new(self.rolls, &outcome));
        }

        SideRoll {
            side,
            outcome,
            history,
        }
    }
}
