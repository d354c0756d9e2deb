/// Errors raised when a generator is handed unusable parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A spiral needs at least one arm to place points on.
    #[error("invalid branch count: {0} (must be at least 1)")]
    InvalidBranchCount(u32),

    /// A color string that is not `#rgb` or `#rrggbb` hex.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
