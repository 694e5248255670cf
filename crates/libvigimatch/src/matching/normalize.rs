use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

// Ordered synonym table reconciling the two regulators' dosage vocabulary:
// drop the redundant dosage-form suffix, fold unit words to their symbols.
const SYNONYMS: &[(&str, &str)] = &[("劑", ""), ("毫克", "mg"), ("毫升", "ml")];

static REPLACER: LazyLock<(AhoCorasick, Vec<&'static str>)> = LazyLock::new(|| {
  let (patterns, replacements): (Vec<_>, Vec<_>) = SYNONYMS.iter().copied().unzip();

  (
    AhoCorasickBuilder::new().match_kind(MatchKind::LeftmostLongest).build(patterns).expect("could not build synonym automaton"),
    replacements,
  )
});

/// Canonical form used by every comparison: lower-cased, all whitespace
/// removed (spacing differs freely between transliterated terms), dosage
/// vocabulary folded to one spelling. Total and idempotent.
pub fn normalize(text: &str) -> String {
  let folded = text.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect::<String>();
  let (automaton, replacements) = &*REPLACER;

  automaton.replace_all(&folded, replacements)
}

/// First whitespace-delimited token of a raw field.
///
/// Tokens are taken before normalization: the canonical form has no
/// whitespace left to split on.
pub fn first_token(text: &str) -> &str {
  text.split_whitespace().next().unwrap_or_default()
}
