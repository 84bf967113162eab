mod ctx;
mod history;
mod roller;

pub use ctx::{DefaultRoller, RollContext};
pub use history::{RollAttempt, SideRoll};
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;
