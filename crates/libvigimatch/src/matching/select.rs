use tracing::instrument;

use crate::matching::assemble::assemble;
use crate::matching::{Prepared, ScorePolicy, score_prepared};
use crate::model::{AlertRecord, MatchResult, RegistryEntry};

/// Match a whole alert batch against the registry. The registry's normalized
/// projections are computed once and shared across alerts.
#[instrument(name = "match_alerts", skip_all, fields(alerts = alerts.len(), registry = registry.len()))]
pub fn match_alerts(alerts: &[AlertRecord], registry: &[RegistryEntry], policy: &ScorePolicy) -> Vec<MatchResult> {
  let prepared = registry.iter().map(|entry| (entry, Prepared::from_entry(entry))).collect::<Vec<_>>();

  alerts.iter().map(|alert| best_match(alert, &prepared, policy)).collect()
}

/// Match a single alert against every registry entry.
pub fn select_best_match(alert: &AlertRecord, registry: &[RegistryEntry], policy: &ScorePolicy) -> MatchResult {
  let prepared = registry.iter().map(|entry| (entry, Prepared::from_entry(entry))).collect::<Vec<_>>();

  best_match(alert, &prepared, policy)
}

fn best_match(alert: &AlertRecord, registry: &[(&RegistryEntry, Prepared)], policy: &ScorePolicy) -> MatchResult {
  let lhs = Prepared::from_alert(alert);

  // Explicit fold replacing on strict improvement only: when two entries
  // score the same, the first one in registry order keeps the slot.
  let (best_score, best_entry) = registry.iter().fold((0.0f64, None), |(best_score, best_entry), (entry, rhs)| {
    let (score, _) = score_prepared(&lhs, rhs, policy);

    if score > best_score { (score, Some(*entry)) } else { (best_score, best_entry) }
  });

  match best_entry {
    Some(entry) if best_score >= policy.accept => {
      tracing::debug!(product = alert.product_name, license = entry.license_id, score = best_score, "accepted candidate");

      assemble(alert, Some((entry, best_score)), policy)
    }

    _ => assemble(alert, None, policy),
  }
}

#[cfg(test)]
mod tests {
  use crate::matching::ScorePolicy;
  use crate::model::{AlertRecord, MatchStatus, RegistryEntry};

  fn lecanemab_alert() -> AlertRecord {
    AlertRecord::builder("Leqembi").ingredient("lecanemab").form("100 mg/mL 注射液").build()
  }

  fn registry() -> Vec<RegistryEntry> {
    vec![
      RegistryEntry::builder("骨松益").ingredient("denosumab").form("60 mg/1 mL 注射液").license_id("MOHW-BI-000812").build(),
      RegistryEntry::builder("樂意保").ingredient("lecanemab").form("100 mg/mL 注射液").license_id("MOHW-BI-001273").build(),
    ]
  }

  #[test]
  fn picks_the_best_entry() {
    let result = super::select_best_match(&lecanemab_alert(), &registry(), &ScorePolicy::default());

    assert_eq!(result.status, MatchStatus::Exact);
    assert_eq!(result.local_product_name, "樂意保");
    assert_eq!(result.license_id, "MOHW-BI-001273");
    assert_eq!(result.confidence, 0.9);
  }

  #[test]
  fn first_seen_wins_on_ties() {
    let alert = lecanemab_alert();
    let registry = vec![
      RegistryEntry::builder("甲藥").ingredient("lecanemab").form("100 mg/mL 注射液").license_id("FIRST").build(),
      RegistryEntry::builder("乙藥").ingredient("lecanemab").form("100 mg/mL 注射液").license_id("SECOND").build(),
    ];

    let result = super::select_best_match(&alert, &registry, &ScorePolicy::default());

    assert_eq!(result.license_id, "FIRST");
  }

  #[test]
  fn below_acceptance_reports_none() {
    let alert = AlertRecord::builder("Ocaliva").ingredient("obeticholic acid").form("5 mg 錠劑").build();
    let result = super::select_best_match(&alert, &registry(), &ScorePolicy::default());

    assert_eq!(result.status, MatchStatus::None);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.local_product_name, "");
    assert_eq!(result.license_id, "");
    assert_eq!(result.local_form, "");
    assert_eq!(result.reference_link, "");
  }

  #[test]
  fn partial_tier() {
    let alert = AlertRecord::builder("Leqembi").ingredient("lecanemab").form("5 mg 錠劑").build();
    let result = super::select_best_match(&alert, &registry(), &ScorePolicy::default());

    // ingredient only: 0.6
    assert_eq!(result.status, MatchStatus::Partial);
    assert_eq!(result.confidence, 0.6);
  }

  #[test]
  fn empty_registry_yields_none_for_every_alert() {
    let alerts = vec![lecanemab_alert(), AlertRecord::builder("Prolia").ingredient("denosumab").build()];
    let results = super::match_alerts(&alerts, &[], &ScorePolicy::default());

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|row| row.status == MatchStatus::None && row.confidence == 0.0));
  }

  #[test]
  fn empty_feed_yields_empty_output() {
    assert!(super::match_alerts(&[], &registry(), &ScorePolicy::default()).is_empty());
  }

  #[test]
  fn deterministic_across_runs() {
    let alerts = vec![
      lecanemab_alert(),
      AlertRecord::builder("Prolia").ingredient("denosumab").form("60 mg/1 mL 注射液").build(),
      AlertRecord::builder("Ocaliva").ingredient("obeticholic acid").build(),
    ];

    let first = super::match_alerts(&alerts, &registry(), &ScorePolicy::default());
    let second = super::match_alerts(&alerts, &registry(), &ScorePolicy::default());

    assert_eq!(first, second);
  }

  #[test]
  fn alerts_may_share_a_registry_entry() {
    let alerts = vec![lecanemab_alert(), lecanemab_alert()];
    let results = super::match_alerts(&alerts, &registry(), &ScorePolicy::default());

    assert!(results.iter().all(|row| row.license_id == "MOHW-BI-001273"));
  }
}
