//! Configuration for the turn engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tunables for the flavor-text generator, the resolver and turn RNGs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible flavor text. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Deepest grammar expansion before the fallback phrase is used.
    pub max_depth: usize,
    /// Prefix placed before the grammar sample appended to descriptions.
    pub sample_marker: String,
    /// Terminal emitted when the depth guard trips.
    pub fallback_phrase: String,
    /// Default number of action suggestions.
    pub suggestion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: 16,
            sample_marker: "💭".to_string(),
            fallback_phrase: "el vacío del espacio".to_string(),
            suggestion_limit: 5,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the expansion depth limit (at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Set the marker placed before grammar samples.
    pub fn with_sample_marker(mut self, marker: impl Into<String>) -> Self {
        self.sample_marker = marker.into();
        self
    }

    /// Set the depth-guard fallback phrase.
    pub fn with_fallback_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.fallback_phrase = phrase.into();
        self
    }

    /// Set the default suggestion count.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Build an RNG for one turn: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
