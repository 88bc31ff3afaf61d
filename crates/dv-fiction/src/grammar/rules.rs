use std::collections::{BTreeMap, BTreeSet};

use crate::error::{FictionError, FictionResult};
use crate::grammar::tables;

/// One alternative expansion: a sequence of terminals and nonterminals.
pub type Production = Vec<String>;

/// A validated context-free grammar.
///
/// Every symbol with a rule is a nonterminal; anything else is a terminal and
/// is emitted as written.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: String,
    rules: BTreeMap<String, Vec<Production>>,
}

impl Grammar {
    /// Build and validate a grammar.
    ///
    /// Fails when the start symbol has no rule, when a rule or production is
    /// empty, when a production names an uppercase symbol that has no rule,
    /// or when some nonterminal can never finish expanding.
    pub fn new(
        start: impl Into<String>,
        rules: impl IntoIterator<Item = (String, Vec<Production>)>,
    ) -> FictionResult<Self> {
        let start = start.into();
        let rules: BTreeMap<String, Vec<Production>> = rules.into_iter().collect();

        if !rules.contains_key(&start) {
            return Err(FictionError::MissingStart(start));
        }

        for (name, productions) in &rules {
            if productions.is_empty() {
                return Err(FictionError::NoProductions(name.clone()));
            }
            for production in productions {
                if production.is_empty() {
                    return Err(FictionError::EmptyProduction(name.clone()));
                }
                if let Some(symbol) = production
                    .iter()
                    .find(|s| looks_like_nonterminal(s) && !rules.contains_key(s.as_str()))
                {
                    return Err(FictionError::UndefinedSymbol {
                        rule: name.clone(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        let grammar = Self { start, rules };
        if let Some(stuck) = grammar.unproductive().into_iter().next() {
            return Err(FictionError::Unproductive(stuck));
        }
        Ok(grammar)
    }

    /// The built-in "Sector Omega-7" grammar.
    pub fn builtin() -> FictionResult<Self> {
        let rules = tables::RULES.iter().map(|(name, productions)| {
            let productions = productions
                .iter()
                .map(|p| p.iter().map(|s| s.to_string()).collect())
                .collect();
            (name.to_string(), productions)
        });
        Self::new(tables::START_SYMBOL, rules)
    }

    /// The start symbol.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Whether `symbol` has a rule.
    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    /// Alternatives for `symbol`, empty for terminals.
    pub fn productions(&self, symbol: &str) -> &[Production] {
        self.rules.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nonterminals in name order.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Nonterminals that cannot derive a terminal-only sentence.
    fn unproductive(&self) -> BTreeSet<String> {
        let mut productive: BTreeSet<&str> = BTreeSet::new();
        loop {
            let before = productive.len();
            for (name, productions) in &self.rules {
                if productive.contains(name.as_str()) {
                    continue;
                }
                let finishes = productions.iter().any(|p| {
                    p.iter()
                        .all(|s| !self.is_nonterminal(s) || productive.contains(s.as_str()))
                });
                if finishes {
                    productive.insert(name);
                }
            }
            if productive.len() == before {
                break;
            }
        }

        self.rules
            .keys()
            .filter(|name| !productive.contains(name.as_str()))
            .cloned()
            .collect()
    }
}

/// Uppercase identifiers such as `DETALLE_AMBIENTAL` are reserved for
/// nonterminals.
fn looks_like_nonterminal(symbol: &str) -> bool {
    symbol.chars().any(|c| c.is_ascii_uppercase())
        && symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
