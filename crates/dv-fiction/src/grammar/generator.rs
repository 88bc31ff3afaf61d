use rand::Rng;
use tracing::trace;

use crate::config::EngineConfig;
use crate::error::FictionResult;
use crate::grammar::hints::HintTable;
use crate::grammar::rules::Grammar;

/// Samples flavor text from a [`Grammar`] and decorates state descriptions.
///
/// The generator is immutable; every call draws from the RNG it is handed,
/// so one generator can serve any number of concurrent turns.
#[derive(Debug, Clone)]
pub struct GrammarGenerator {
    grammar: Grammar,
    hints: HintTable,
    max_depth: usize,
    marker: String,
    fallback: String,
}

impl GrammarGenerator {
    /// Create a generator from validated tables.
    pub fn new(grammar: Grammar, hints: HintTable, config: &EngineConfig) -> Self {
        Self {
            grammar,
            hints,
            max_depth: config.max_depth,
            marker: config.sample_marker.clone(),
            fallback: config.fallback_phrase.clone(),
        }
    }

    /// Generator over the built-in grammar and hints.
    pub fn builtin(config: &EngineConfig) -> FictionResult<Self> {
        Ok(Self::new(Grammar::builtin()?, HintTable::builtin(), config))
    }

    /// The underlying grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The hint table.
    pub fn hints(&self) -> &HintTable {
        &self.hints
    }

    /// One sentence from the start symbol.
    pub fn generate_text<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.generate_from(self.grammar.start(), rng)
    }

    /// One expansion of `symbol`. Terminals come back unchanged.
    pub fn generate_from<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> String {
        self.expand(symbol, 0, rng)
    }

    /// `base`, the state's hint when it has one, and a fresh sample after the
    /// marker, separated by blank lines.
    pub fn enhance_description<R: Rng + ?Sized>(
        &self,
        base: &str,
        state_id: &str,
        rng: &mut R,
    ) -> String {
        let mut text = base.to_string();
        if let Some(hint) = self.hints.first_hint(state_id) {
            text.push_str("\n\n");
            text.push_str(hint);
        }
        text.push_str("\n\n");
        text.push_str(&self.marker);
        text.push(' ');
        text.push_str(&self.generate_text(rng));
        text
    }

    fn expand<R: Rng + ?Sized>(&self, symbol: &str, depth: usize, rng: &mut R) -> String {
        let productions = self.grammar.productions(symbol);
        if productions.is_empty() {
            return symbol.to_string();
        }
        if depth > self.max_depth {
            trace!(symbol, depth, "expansion depth exceeded, using fallback");
            return self.fallback.clone();
        }

        let production = &productions[rng.random_range(0..productions.len())];
        production
            .iter()
            .map(|s| self.expand(s, depth + 1, rng))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
