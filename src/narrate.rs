use crate::common::{Side, Triple, Winner};
use crate::hand::Hand;
use crate::roll::{RollAttempt, SideRoll};
use enum_dispatch::enum_dispatch;
use std::fmt::{self, Write};
use std::str::FromStr;

/// The finished match, as seen by a narrator.
#[derive(Debug, Copy, Clone)]
pub struct Showdown<'a> {
    pub user_first: bool,
    pub user: &'a SideRoll,
    pub computer: &'a SideRoll,
    pub winner: Winner,
}

impl<'a> Showdown<'a> {
    pub fn in_turn_order(&self) -> (&'a SideRoll, &'a SideRoll) {
        if self.user_first {
            (self.user, self.computer)
        } else {
            (self.computer, self.user)
        }
    }
}

/// Renders a [`Showdown`] as text.
///
/// The provided methods lay out the narration; implementors only need to
/// override the formatting hooks at the top.
#[enum_dispatch]
pub trait Narrate {
    fn title(&self) -> String {
        String::from("🎲 Chinchillo showdown! 🎲")
    }

    fn section(&self, title: &str) -> String {
        format!("==== {} ====", title)
    }

    fn item(&self, line: String) -> String {
        line
    }

    fn hand(&self, hand: Hand) -> String {
        hand.name().to_string()
    }

    fn dice(&self, dice: &Triple) -> String {
        dice.to_string()
    }

    fn emphasis(&self, line: String) -> String {
        line
    }

    fn attempt_line(&self, attempt: &RollAttempt, last: bool) -> String {
        let next = if last { "locked in!" } else { "rolling again!" };
        self.item(format!(
            "Roll {}: {} ... {} ... {}",
            attempt.attempt,
            self.dice(&attempt.dice),
            self.hand(attempt.hand),
            next
        ))
    }

    fn turn(&self, roll: &SideRoll) -> String {
        let title = match roll.side {
            Side::User => "Your turn",
            Side::Computer => "Computer's turn",
        };
        let mut ret = self.section(title);
        ret.push('\n');
        let len = roll.history.len();
        for (i, attempt) in roll.history.iter().enumerate() {
            ret.push_str(&self.attempt_line(attempt, i + 1 == len));
            ret.push('\n');
        }
        ret
    }

    fn outcome_line(&self, roll: &SideRoll) -> String {
        let who = match roll.side {
            Side::User => "Your hand",
            Side::Computer => "Computer's hand",
        };
        let outcome = &roll.outcome;
        let mut line = format!(
            "{}: {} ({})",
            who,
            self.hand(outcome.hand),
            self.dice(&outcome.dice)
        );
        match (outcome.hand, outcome.unmatched) {
            (Hand::Normal, Some(point)) if point != 0 => {
                // Writing to a String cannot fail
                let _ = write!(line, " (point: {})", point);
            }
            _ => {}
        }
        self.item(line)
    }

    fn verdict(&self, showdown: &Showdown<'_>) -> String {
        let line = match showdown.winner {
            Winner::User => format!(
                "🎉 You win! ({:+}x)",
                showdown.user.outcome.hand.multiplier()
            ),
            Winner::Computer => format!(
                "😢 The computer wins. ({:+}x)",
                showdown.computer.outcome.hand.multiplier()
            ),
            Winner::Tie => String::from("🤝 It's a draw."),
        };
        self.emphasis(line)
    }

    fn narrate(&self, showdown: &Showdown<'_>) -> String {
        let (first, second) = showdown.in_turn_order();
        let mut ret = self.title();
        ret.push_str("\n\n");
        ret.push_str(&self.turn(first));
        ret.push('\n');
        ret.push_str(&self.turn(second));
        ret.push('\n');
        ret.push_str(&self.section("Results"));
        ret.push('\n');
        ret.push_str(&self.outcome_line(showdown.user));
        ret.push('\n');
        ret.push_str(&self.outcome_line(showdown.computer));
        ret.push_str("\n\n");
        ret.push_str(&self.verdict(showdown));
        ret
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct PlainNarrator;

impl Narrate for PlainNarrator {}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MarkdownNarrator;

impl Narrate for MarkdownNarrator {
    fn title(&self) -> String {
        String::from("## 🎲 Chinchillo showdown! 🎲")
    }

    fn section(&self, title: &str) -> String {
        format!("### {}", title)
    }

    fn item(&self, line: String) -> String {
        format!("- {}", line)
    }

    fn hand(&self, hand: Hand) -> String {
        format!("**{}**", hand.name())
    }

    fn dice(&self, dice: &Triple) -> String {
        format!("`{}`", dice)
    }

    fn emphasis(&self, line: String) -> String {
        format!("**{}**", line)
    }
}

#[enum_dispatch(Narrate)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Narrator {
    Plain(PlainNarrator),
    Markdown(MarkdownNarrator),
}

impl Narrator {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Plain(_) => "plain",
            Self::Markdown(_) => "markdown",
        }
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::Plain(PlainNarrator)
    }
}

impl fmt::Display for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Narrator {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("plain") {
            Ok(PlainNarrator.into())
        } else if s.eq_ignore_ascii_case("markdown") {
            Ok(MarkdownNarrator.into())
        } else {
            Err(UnknownStyle(s.to_string()))
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown narration style {0:?}; expected \"plain\" or \"markdown\"")]
pub struct UnknownStyle(pub String);
