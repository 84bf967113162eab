use crate::common::{RollCap, RollCapError};
use crate::narrate::{Narrator, UnknownStyle};

/// Defaults for the console front end.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Cap used by `play` when no number is given.
    pub roll_cap: RollCap,
    pub narrator: Narrator,
}

impl Config {
    pub const ROLL_CAP_VAR: &'static str = "CHINCHILLO_ROLL_CAP";
    pub const NARRATION_VAR: &'static str = "CHINCHILLO_NARRATION";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the default for any
    /// variable it does not know.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ROLL_CAP_VAR) {
            let n = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::NotANumber {
                    var: Self::ROLL_CAP_VAR,
                    value: value.clone(),
                })?;
            config.roll_cap = RollCap::limited(n)?;
        }

        if let Some(value) = lookup(Self::NARRATION_VAR) {
            config.narrator = value.parse()?;
        }

        Ok(config)
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, found {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("{}: {}", Config::ROLL_CAP_VAR, .0)]
    RollCap(#[from] RollCapError),
    #[error("{}: {}", Config::NARRATION_VAR, .0)]
    Style(#[from] UnknownStyle),
}
