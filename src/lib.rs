//! A rules engine for Chinchillo (Chinchiro), the three-dice game.
//!
//! Each side rolls three dice, rerolling a "Nothing" until a hand appears or
//! the roll cap runs out; the stronger hand wins.
//!
//! ```
//! let result = chinchillo::play(3).unwrap();
//! assert!((1..=3).contains(&result.user_history().len()));
//! println!("{}", result);
//! ```

pub mod common;
pub mod config;
mod error;
pub mod game;
pub mod hand;
pub mod narrate;
pub mod parse;
pub mod roll;

pub use common::{RollCap, Side, Triple, Winner};
pub use error::Error;
pub use game::{judge, Match, MatchResult};
pub use hand::{classify, Hand, RollOutcome};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Plays one match against the computer with the thread-local RNG.
///
/// `roll_cap` is how many times each side may roll, and must be in `1..=3`.
pub fn play(roll_cap: usize) -> Result<MatchResult> {
    let cap = RollCap::limited(roll_cap)?;
    Ok(Match::new(cap).play(&mut rand::thread_rng()))
}
