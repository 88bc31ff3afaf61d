use tracing::debug;

use crate::resolver::equivalents::EquivalenceTable;
use crate::resolver::{ActionResolver, MatchTier, Resolution, normalize};

/// The default resolver.
///
/// Runs exact, equivalence and keyword matching in that order and takes the
/// first hit. Within a tier, labels are tried in the order the state lists
/// them.
#[derive(Debug, Clone, Default)]
pub struct TieredResolver {
    equivalents: EquivalenceTable,
}

impl TieredResolver {
    /// Create a resolver using `equivalents` for the phrasing tier.
    pub fn new(equivalents: EquivalenceTable) -> Self {
        Self { equivalents }
    }

    /// Resolver with the built-in phrasing table.
    pub fn builtin() -> Self {
        Self::new(EquivalenceTable::builtin())
    }

    /// The phrasing table.
    pub fn equivalents(&self) -> &EquivalenceTable {
        &self.equivalents
    }

    fn exact<'a>(&self, input: &str, available: &[&'a str]) -> Option<&'a str> {
        available.iter().copied().find(|label| *label == input)
    }

    fn equivalent<'a>(&self, input: &str, available: &[&'a str]) -> Option<&'a str> {
        available.iter().copied().find(|label| {
            self.equivalents
                .variants(label)
                .iter()
                .any(|v| matches_variant(input, v))
        })
    }

    fn keywords<'a>(&self, input: &str, available: &[&'a str]) -> Option<&'a str> {
        available
            .iter()
            .copied()
            .find(|label| keywords_in_order(input, label))
    }
}

impl ActionResolver for TieredResolver {
    fn resolve(&self, input: &str, available: &[&str]) -> Resolution {
        let input = normalize(input);
        if input.is_empty() {
            return Resolution::NoMatch;
        }

        let found = self
            .exact(&input, available)
            .map(|l| (l, MatchTier::Exact))
            .or_else(|| {
                self.equivalent(&input, available)
                    .map(|l| (l, MatchTier::Equivalent))
            })
            .or_else(|| {
                self.keywords(&input, available)
                    .map(|l| (l, MatchTier::Keywords))
            });

        match found {
            Some((label, tier)) => {
                debug!(%input, label, %tier, "input resolved");
                Resolution::Matched {
                    label: label.to_string(),
                    tier,
                }
            }
            None => {
                debug!(%input, "input not resolved");
                Resolution::NoMatch
            }
        }
    }
}

/// Whether normalized `input` contains the phrasing `variant` on word
/// boundaries: the whole input, a leading or trailing phrase, or a phrase in
/// the middle.
pub fn matches_variant(input: &str, variant: &str) -> bool {
    if variant.is_empty() {
        return false;
    }
    input == variant
        || input.starts_with(&format!("{variant} "))
        || input.ends_with(&format!(" {variant}"))
        || format!(" {input} ").contains(&format!(" {variant} "))
}

/// Whether the words of `label` (split on `_`) each appear inside some input
/// token, in order. A token only needs to contain the keyword, so `trajes`
/// satisfies `traje`.
pub fn keywords_in_order(input: &str, label: &str) -> bool {
    let mut keywords = label.split('_').filter(|k| !k.is_empty()).peekable();
    if keywords.peek().is_none() {
        return false;
    }
    for token in input.split_whitespace() {
        match keywords.peek() {
            Some(keyword) if token.contains(*keyword) => {
                keywords.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    keywords.peek().is_none()
}
