/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Configuration errors raised while building or loading a story graph.
///
/// These are startup failures. Runtime conditions such as an unknown state in
/// a session snapshot are repaired by a reset and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The graph has no states at all.
    #[error("story graph has no states")]
    Empty,

    /// Two states share the same id.
    #[error("duplicate state id: \"{0}\"")]
    DuplicateState(String),

    /// The initial state id does not name a state in the graph.
    #[error("initial state \"{0}\" is not defined")]
    MissingInitial(String),

    /// A state offers the same label twice.
    #[error("state \"{state}\" defines transition \"{label}\" more than once")]
    DuplicateLabel {
        /// The state carrying the duplicate.
        state: String,
        /// The repeated label.
        label: String,
    },

    /// A final state declares outgoing transitions.
    #[error("final state \"{0}\" must not have transitions")]
    FinalWithTransitions(String),

    /// The story file could not be parsed.
    #[error("invalid story file: {0}")]
    Json(#[from] serde_json::Error),
}
