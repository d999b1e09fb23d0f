use thiserror::Error;

/// Malformed input rejected before a fight starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FightError {
    #[error("{fighter}: stat `{stat}` has non-positive max {max}")]
    NonPositiveMax {
        fighter: String,
        stat: &'static str,
        max: i64,
    },
    #[error("a fight needs exactly two fighters, got {0}")]
    FighterCount(usize),
    #[error("unknown built-in fighter '{0}'")]
    UnknownFighter(String),
}
