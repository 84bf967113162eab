use crate::common::{Face, Triple};
use std::cmp::Ordering;
use std::fmt;

/// The named category a three-dice roll falls into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hand {
    /// 1-1-1
    Pinzoro,
    /// Three of a kind other than ones.
    Arashi,
    /// 4-5-6
    Shigoro,
    /// Exactly two dice match.
    Normal,
    /// No hand at all; the only result that may be rerolled.
    Nothing,
    /// 1-2-3
    Hifumi,
}

impl Hand {
    pub const ALL: [Self; 6] = [
        Self::Pinzoro,
        Self::Arashi,
        Self::Shigoro,
        Self::Normal,
        Self::Nothing,
        Self::Hifumi,
    ];

    /// Payout multiplier, which doubles as the hand's strength.
    pub const fn multiplier(self) -> i32 {
        match self {
            Self::Pinzoro => 5,
            Self::Arashi => 3,
            Self::Shigoro => 2,
            Self::Normal => 1,
            Self::Nothing => -1,
            Self::Hifumi => -2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pinzoro => "Pinzoro",
            Self::Arashi => "Arashi",
            Self::Shigoro => "Shigoro",
            Self::Normal => "Normal",
            Self::Nothing => "Nothing",
            Self::Hifumi => "Hifumi",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Pinzoro => "triple ones",
            Self::Arashi => "triple match",
            Self::Shigoro => "straight high",
            Self::Normal => "pair",
            Self::Nothing => "no hand",
            Self::Hifumi => "straight low",
        }
    }

    pub const fn is_nothing(self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollOutcome {
    pub dice: Triple,
    pub hand: Hand,
    /// For [`Hand::Normal`], the face that is not part of the pair.
    pub unmatched: Option<Face>,
}

impl RollOutcome {
    const fn new(dice: Triple, hand: Hand) -> Self {
        Self {
            dice,
            hand,
            unmatched: None,
        }
    }

    /// Orders two outcomes by strength, applying the same-hand tie-breaks.
    ///
    /// Two Arashi compare by their face. Two Normal hands compare by their
    /// unmatched die, and fall back to equal when either one is missing.
    /// Every other pair of equally-ranked hands is equal.
    pub fn strength_cmp(&self, other: &Self) -> Ordering {
        let by_hand = self.hand.multiplier().cmp(&other.hand.multiplier());
        if by_hand != Ordering::Equal {
            return by_hand;
        }

        match (self.hand, other.hand) {
            (Hand::Arashi, Hand::Arashi) => self.dice.lowest().cmp(&other.dice.lowest()),
            (Hand::Normal, Hand::Normal) => match (self.unmatched, other.unmatched) {
                (Some(a), Some(b)) if a != 0 && b != 0 => a.cmp(&b),
                _ => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

/// Classifies three dice. Every triple maps to exactly one hand.
pub fn classify(dice: impl Into<Triple>) -> RollOutcome {
    let dice = dice.into();
    let hand = match dice.values() {
        [1, 1, 1] => Hand::Pinzoro,
        [a, b, c] if a == b && b == c => Hand::Arashi,
        [4, 5, 6] => Hand::Shigoro,
        [1, 2, 3] => Hand::Hifumi,
        [a, b, c] if a == b || b == c => {
            let unmatched = if a == b { c } else { a };
            return RollOutcome {
                unmatched: Some(unmatched),
                ..RollOutcome::new(dice, Hand::Normal)
            };
        }
        _ => Hand::Nothing,
    };
    RollOutcome::new(dice, hand)
}
