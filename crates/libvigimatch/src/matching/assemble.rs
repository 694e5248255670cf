use crate::matching::ScorePolicy;
use crate::model::{AlertRecord, MatchResult, MatchStatus, RegistryEntry};

/// Project a winning (entry, score) pair, or the no-match case, into the
/// output row shape. Every field is populated either way so tabular and CSV
/// consumers never meet an absent key.
pub fn assemble(alert: &AlertRecord, matched: Option<(&RegistryEntry, f64)>, policy: &ScorePolicy) -> MatchResult {
  match matched {
    Some((entry, score)) => MatchResult {
      alert: alert.clone(),
      status: policy.classify(score),
      local_product_name: entry.local_product_name.clone(),
      license_id: entry.license_id.clone(),
      local_form: entry.form.clone(),
      reference_link: entry.reference_link.clone().unwrap_or_default(),
      confidence: score,
    },

    None => MatchResult {
      alert: alert.clone(),
      status: MatchStatus::None,
      local_product_name: String::new(),
      license_id: String::new(),
      local_form: String::new(),
      reference_link: String::new(),
      confidence: 0.0,
    },
  }
}
