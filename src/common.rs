use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
pub use vec1::vec1;

/// A single die face, `1..=6` for dice produced by a [`Roller`](crate::roll::Roller).
pub type Face = u8;

/// Number of faces on every die used in the game.
pub const FACES: Face = 6;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Three dice, always held in ascending order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Triple([Face; 3]);

impl Triple {
    pub fn new(mut dice: [Face; 3]) -> Self {
        dice.sort_unstable();
        Self(dice)
    }

    pub const fn values(&self) -> [Face; 3] {
        self.0
    }

    pub const fn lowest(&self) -> Face {
        self.0[0]
    }

    pub const fn highest(&self) -> Face {
        self.0[2]
    }
}

impl From<[Face; 3]> for Triple {
    fn from(dice: [Face; 3]) -> Self {
        Self::new(dice)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    User,
    Computer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Computer => "computer",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Winner {
    Tie = 0,
    User = 1,
    Computer = 2,
}

impl Winner {
    /// The numeric code callers see: 0 for a tie, 1 for the user, 2 for the computer.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps the ordering of the user's hand against the computer's.
    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Self::User,
            Ordering::Less => Self::Computer,
            Ordering::Equal => Self::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tie => f.write_str("tie"),
            Self::User => fmt::Display::fmt(&Side::User, f),
            Self::Computer => fmt::Display::fmt(&Side::Computer, f),
        }
    }
}

/// How many times a side may roll before its hand is forced.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RollCap(NonZeroUsize);

impl RollCap {
    /// The largest cap a caller may request through [`RollCap::limited`].
    pub const LIMIT: usize = 3;

    const DEFAULT: NonZeroUsize = match NonZeroUsize::new(Self::LIMIT) {
        Some(n) => n,
        None => panic!("the roll cap limit must be non-zero"),
    };

    pub fn new(n: usize) -> Result<Self, RollCapError> {
        NonZeroUsize::new(n).map(Self).ok_or(RollCapError::Zero)
    }

    pub fn limited(n: usize) -> Result<Self, RollCapError> {
        if n > Self::LIMIT {
            Err(RollCapError::TooLarge(n))
        } else {
            Self::new(n)
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for RollCap {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for RollCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollCapError {
    #[error("roll cap must be at least 1")]
    Zero,
    #[error("roll cap {} is above the limit of {}", .0, RollCap::LIMIT)]
    TooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_sorts() {
        let t = Triple::new([6, 1, 4]);
        assert_eq!(t.values(), [1, 4, 6]);
        assert_eq!(t.lowest(), 1);
        assert_eq!(t.highest(), 6);
        assert_eq!(&t.to_string(), "1-4-6");
    }

    #[test]
    fn test_roll_cap() {
        assert_eq!(RollCap::new(0), Err(RollCapError::Zero));
        assert_eq!(RollCap::new(7).unwrap().get(), 7);
        assert_eq!(RollCap::limited(0), Err(RollCapError::Zero));
        assert_eq!(RollCap::limited(4), Err(RollCapError::TooLarge(4)));
        assert_eq!(RollCap::limited(3).unwrap().get(), 3);
        assert_eq!(RollCap::default().get(), RollCap::LIMIT);
    }

    #[test]
    fn test_winner_codes() {
        assert_eq!(Winner::Tie.code(), 0);
        assert_eq!(Winner::User.code(), 1);
        assert_eq!(Winner::Computer.code(), 2);
        assert_eq!(Winner::from_ordering(Ordering::Greater), Winner::User);
    }
}
