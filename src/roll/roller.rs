use crate::common::{Face, Triple, FACES};
use rand::Rng;

/// Source of randomness for a match.
pub trait Roller {
    fn roll_die(&mut self) -> Face;

    /// Decides who is narrated first; `true` means the user.
    fn coin_flip(&mut self) -> bool;

    fn roll_three(&mut self) -> Triple {
        Triple::new([self.roll_die(), self.roll_die(), self.roll_die()])
    }
}

impl<R: Rng> Roller for R {
    fn roll_die(&mut self) -> Face {
        self.gen_range(1..=FACES)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;
