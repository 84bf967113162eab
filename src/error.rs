#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    RollCap(#[from] crate::common::RollCapError),
    #[error("{0}")]
    Parse(#[from] crate::parse::ParseError),
    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
}
