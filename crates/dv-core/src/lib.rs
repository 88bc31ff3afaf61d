//! Core types for Devorador: story states, the story graph, and session positions.
//!
//! The static [`StoryGraph`] is built once and shared read-only. A session's
//! dynamic [`Position`] is restored from a snapshot at the start of a turn,
//! driven through a [`Journey`], and handed back at the end. The crate holds
//! no state across turns.

/// Error types used throughout the crate.
pub mod error;
/// The static story graph and its validation.
pub mod graph;
/// Read-only projections of the graph for visualization.
pub mod info;
/// Traversal of the graph on behalf of one session.
pub mod journey;
/// The built-in "Sector Omega-7" story.
pub mod omega;
/// Per-session position snapshots.
pub mod position;
/// Story state records and their transitions.
pub mod state;

/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export graph types.
pub use graph::{DanglingTransition, StoryGraph};
/// Re-export introspection types.
pub use info::{GraphInfo, StateInfo, humanize_label};
/// Re-export traversal types.
pub use journey::{Journey, TransitionResult};
/// Re-export the session snapshot.
pub use position::Position;
/// Re-export state types.
pub use state::{StoryState, Transition};
