use crate::common::{RollCap, Side, Winner};
use crate::hand::RollOutcome;
use crate::narrate::{Narrate, Narrator, Showdown};
use crate::roll::{RollAttempt, RollContext, Roller, SideRoll};
use std::fmt;

/// Decides the winner between the user's and the computer's final hands.
pub fn judge(user: &RollOutcome, computer: &RollOutcome) -> Winner {
    Winner::from_ordering(user.strength_cmp(computer))
}

/// A single game between the user and the computer, both sharing one roll cap.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Match {
    cap: RollCap,
    narrator: Narrator,
}

impl Match {
    pub fn new(cap: RollCap) -> Self {
        Self {
            cap,
            narrator: Narrator::default(),
        }
    }

    pub fn with_narrator(mut self, narrator: impl Into<Narrator>) -> Self {
        self.narrator = narrator.into();
        self
    }

    pub fn cap(&self) -> RollCap {
        self.cap
    }

    /// Flips for turn order, rolls the user and then the computer, and
    /// narrates the result.
    pub fn play<R: Roller + ?Sized>(&self, roller: &mut R) -> MatchResult {
        let user_first = roller.coin_flip();

        let mut ctx = RollContext::new(self.cap, roller);
        let user = ctx.roll_side(Side::User);
        let computer = ctx.roll_side(Side::Computer);

        let winner = judge(&user.outcome, &computer.outcome);
        tracing::info!(
            cap = self.cap.get(),
            user_first,
            user = %user.outcome.hand,
            computer = %computer.outcome.hand,
            %winner,
            "match settled"
        );

        let narration = self.narrator.narrate(&Showdown {
            user_first,
            user: &user,
            computer: &computer,
            winner,
        });

        MatchResult {
            user_first,
            user,
            computer,
            winner,
            narration,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchResult {
    /// Only affects the order of the narration.
    pub user_first: bool,
    pub user: SideRoll,
    pub computer: SideRoll,
    pub winner: Winner,
    pub narration: String,
}

impl MatchResult {
    pub fn user_outcome(&self) -> &RollOutcome {
        &self.user.outcome
    }

    pub fn computer_outcome(&self) -> &RollOutcome {
        &self.computer.outcome
    }

    pub fn user_history(&self) -> &[RollAttempt] {
        &self.user.history
    }

    pub fn computer_history(&self) -> &[RollAttempt] {
        &self.computer.history
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.narration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Face;
    use crate::hand::{classify, Hand};
    use crate::narrate::MarkdownNarrator;
    use crate::roll::ScriptedRoller;

    fn play(script: &[[Face; 3]], cap: usize) -> MatchResult {
        let mut roller = ScriptedRoller::new(script);
        Match::new(RollCap::new(cap).unwrap()).play(&mut roller)
    }

    fn check(user: [Face; 3], computer: [Face; 3], expected: Winner) {
        let actual = judge(&classify(user), &classify(computer));
        assert_eq!(actual, expected, "{:?} vs {:?}", user, computer);
    }

    #[test]
    fn test_judge_by_multiplier() {
        let ladder = [[1, 1, 1], [2, 2, 2], [4, 5, 6], [6, 6, 1], [2, 3, 5], [1, 2, 3]];
        for (i, &stronger) in ladder.iter().enumerate() {
            for &weaker in &ladder[i + 1..] {
                check(stronger, weaker, Winner::User);
                check(weaker, stronger, Winner::Computer);
            }
        }
    }

    #[test]
    fn test_judge_tie_breaks() {
        check([5, 5, 5], [2, 2, 2], Winner::User);
        check([4, 4, 4], [4, 4, 4], Winner::Tie);
        check([2, 2, 2], [6, 6, 6], Winner::Computer);
        check([2, 2, 6], [3, 3, 5], Winner::User);
        check([4, 4, 6], [2, 2, 6], Winner::Tie);
        check([1, 3, 5], [2, 4, 6], Winner::Tie);
        check([4, 5, 6], [4, 5, 6], Winner::Tie);
        check([1, 2, 3], [1, 2, 3], Winner::Tie);
    }

    #[test]
    fn test_user_wins() {
        let result = play(&[[1, 1, 1], [3, 3, 3]], 1);
        assert_eq!(result.winner, Winner::User);
        assert_eq!(result.winner.code(), 1);
        assert_eq!(result.user_outcome().hand, Hand::Pinzoro);
        assert_eq!(result.computer_outcome().hand, Hand::Arashi);
        assert!(result.narration.contains("You win!"));
    }

    #[test]
    fn test_computer_wins() {
        let result = play(&[[2, 2, 5], [4, 5, 6]], 1);
        assert_eq!(result.winner, Winner::Computer);
        assert!(result.narration.contains("The computer wins."));
    }

    #[test]
    fn test_pairs_compare_points() {
        let result = play(&[[2, 2, 6], [3, 3, 5]], 1);
        assert_eq!(result.winner, Winner::User);
        assert!(result.narration.contains("You win!"));

        let result = play(&[[4, 4, 6], [2, 2, 6]], 1);
        assert_eq!(result.winner, Winner::Tie);
        assert!(result.narration.contains("It's a draw."));
    }

    #[test]
    fn test_arashi_compare_faces() {
        assert_eq!(play(&[[5, 5, 5], [2, 2, 2]], 1).winner, Winner::User);
        assert_eq!(play(&[[4, 4, 4], [4, 4, 4]], 1).winner, Winner::Tie);
    }

    #[test]
    fn test_histories_are_independent() {
        let result = play(&[[1, 3, 5], [2, 2, 5], [4, 5, 6]], 3);
        assert_eq!(result.user_history().len(), 2);
        assert_eq!(result.computer_history().len(), 1);
        assert_eq!(result.user_history()[0].hand, Hand::Nothing);
        assert_eq!(result.user_history()[1].dice.values(), [2, 2, 5]);
        assert_eq!(result.computer_outcome().hand, Hand::Shigoro);
    }

    #[test]
    fn test_turn_order_only_changes_narration() {
        let script: [[Face; 3]; 2] = [[6, 6, 2], [1, 3, 5]];
        let cap = RollCap::new(1).unwrap();
        let user_first = Match::new(cap).play(&mut ScriptedRoller::new(&script));
        let computer_first =
            Match::new(cap).play(&mut ScriptedRoller::new(&script).computer_first());

        assert!(user_first.user_first);
        assert!(!computer_first.user_first);
        assert_eq!(user_first.winner, computer_first.winner);
        assert_eq!(user_first.user, computer_first.user);

        let your = computer_first.narration.find("Your turn").unwrap();
        let theirs = computer_first.narration.find("Computer's turn").unwrap();
        assert!(theirs < your);
    }

    #[test]
    fn test_markdown_match() {
        let mut roller = ScriptedRoller::new(&[[1, 2, 3], [1, 2, 3]]);
        let result = Match::new(RollCap::new(1).unwrap())
            .with_narrator(MarkdownNarrator)
            .play(&mut roller);
        assert_eq!(result.winner, Winner::Tie);
        assert!(result.narration.starts_with("## "));
        assert!(result.to_string().ends_with("**🤝 It's a draw.**"));
    }
}
