mod assemble;
mod select;
mod terms;

pub(crate) mod normalize;
pub(crate) mod similarity;

use crate::model::{AlertRecord, RegistryEntry};

use self::normalize::{first_token, normalize};
use self::terms::{form::FormIdentity, ingredient::IngredientIdentity, product_name::ProductNameSimilarity};

pub use self::assemble::assemble;
pub use self::select::{match_alerts, select_best_match};

/// Weights and thresholds of the additive scoring scheme.
///
/// The defaults are the calibrated production values; they can be overridden
/// wholesale, but every classification guarantee (acceptance at `accept`,
/// the exact tier at `exact`) is expressed against whatever is configured
/// here, so a single instance must be used for scoring and selection alike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScorePolicy {
  pub ingredient_exact: f64,
  pub ingredient_token: f64,
  pub form_exact: f64,
  pub form_token: f64,
  pub name_strong: f64,
  pub name_weak: f64,
  pub name_strong_ratio: f64,
  pub name_weak_ratio: f64,
  pub accept: f64,
  pub exact: f64,
}

impl Default for ScorePolicy {
  fn default() -> ScorePolicy {
    ScorePolicy {
      ingredient_exact: 0.6,
      ingredient_token: 0.5,
      form_exact: 0.3,
      form_token: 0.2,
      name_strong: 0.1,
      name_weak: 0.05,
      name_strong_ratio: 0.85,
      name_weak_ratio: 0.70,
      accept: 0.5,
      exact: 0.85,
    }
  }
}

impl ScorePolicy {
  pub fn classify(&self, score: f64) -> crate::model::MatchStatus {
    use crate::model::MatchStatus;

    if score >= self.exact {
      MatchStatus::Exact
    } else if score >= self.accept {
      MatchStatus::Partial
    } else {
      MatchStatus::None
    }
  }
}

pub(crate) trait Term: Send + Sync {
  fn name(&self) -> &'static str;
  fn points(&self, policy: &ScorePolicy, lhs: &Prepared, rhs: &Prepared) -> f64;
}

const TERMS: &[&dyn Term] = &[&IngredientIdentity, &FormIdentity, &ProductNameSimilarity];

/// Normalized projection of the fields the score terms compare. Computed
/// once per record, not once per pair.
pub(crate) struct Prepared {
  pub(crate) ingredient: String,
  pub(crate) ingredient_token: String,
  pub(crate) form: String,
  pub(crate) form_token: String,
  pub(crate) product_name: String,
}

impl Prepared {
  fn new(product_name: &str, ingredient: &str, form: &str) -> Prepared {
    Prepared {
      ingredient: normalize(ingredient),
      ingredient_token: normalize(first_token(ingredient)),
      form: normalize(form),
      form_token: normalize(first_token(form)),
      product_name: normalize(product_name),
    }
  }

  pub(crate) fn from_alert(alert: &AlertRecord) -> Prepared {
    Prepared::new(&alert.product_name, &alert.ingredient, &alert.form)
  }

  pub(crate) fn from_entry(entry: &RegistryEntry) -> Prepared {
    Prepared::new(&entry.local_product_name, &entry.ingredient, &entry.form)
  }
}

/// Confidence score for one (alert, registry entry) pair.
pub fn score(alert: &AlertRecord, entry: &RegistryEntry, policy: &ScorePolicy) -> f64 {
  score_prepared(&Prepared::from_alert(alert), &Prepared::from_entry(entry), policy).0
}

pub(crate) fn score_prepared(lhs: &Prepared, rhs: &Prepared, policy: &ScorePolicy) -> (f64, Vec<(&'static str, f64)>) {
  let mut breakdown = Vec::with_capacity(TERMS.len());

  let total = TERMS.iter().fold(0.0, |total, term| {
    let points = term.points(policy, lhs, rhs);

    tracing::debug!(term = term.name(), points, "computed term points");

    breakdown.push((term.name(), points));

    total + points
  });

  (round2(total), breakdown)
}

pub(crate) fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
  use float_cmp::approx_eq;

  use crate::model::{AlertRecord, RegistryEntry};

  use super::ScorePolicy;

  fn leqembi_alert() -> AlertRecord {
    AlertRecord::builder("Leqembi").ingredient("lecanemab").form("100 mg/mL injection").build()
  }

  #[test]
  fn exact_ingredient_and_form() {
    let entry = RegistryEntry::builder("LocalBrandX").ingredient("lecanemab").form("100 mg/mL injection").license_id("MOHW-BI-001273").build();
    let score = super::score(&leqembi_alert(), &entry, &ScorePolicy::default());

    // 0.6 + 0.3, product names dissimilar
    assert!(approx_eq!(f64, score, 0.90));
  }

  #[test]
  fn exact_ingredient_and_product_name_only() {
    let entry = RegistryEntry::builder("Leqembi").ingredient("lecanemab").form("5 mg tablet").license_id("MOHW-BI-001273").build();
    let score = super::score(&leqembi_alert(), &entry, &ScorePolicy::default());

    // 0.6 + 0.1, forms share no leading token
    assert!(approx_eq!(f64, score, 0.70));
  }

  #[test]
  fn partial_tiers_add_up() {
    let alert = AlertRecord::builder("Ocaliva").ingredient("obeticholic acid").form("5 mg tablet").build();
    let entry = RegistryEntry::builder("OtherBrand").ingredient("obeticholic acid monohydrate").form("5 mg capsule").license_id("X").build();

    // first tokens match on both ingredient (0.5) and form (0.2)
    assert!(approx_eq!(f64, super::score(&alert, &entry, &ScorePolicy::default()), 0.70));
  }

  #[test]
  fn empty_fields_contribute_nothing() {
    let alert = AlertRecord::builder("Leqembi").ingredient("").form("").build();
    let entry = RegistryEntry::builder("樂意保").ingredient("lecanemab").form("100 mg/mL 注射液").license_id("MOHW-BI-001273").build();

    assert_eq!(super::score(&alert, &entry, &ScorePolicy::default()), 0.0);
  }

  #[test]
  fn score_is_bounded_and_granular() {
    let policy = ScorePolicy::default();
    let alerts = [
      leqembi_alert(),
      AlertRecord::builder("Prolia").ingredient("denosumab").form("60 mg/1 mL 注射液").build(),
      AlertRecord::builder("Ocaliva").build(),
    ];
    let entries = [
      RegistryEntry::builder("樂意保").ingredient("lecanemab").form("100 mg/mL 注射液").license_id("MOHW-BI-001273").build(),
      RegistryEntry::builder("Leqembi").ingredient("lecanemab tri-hydrate").form("100 mg vial").license_id("A").build(),
      RegistryEntry::builder("骨松益").ingredient("denosumab").form("60 mg/1 mL 注射液").license_id("B").build(),
    ];

    for alert in &alerts {
      for entry in &entries {
        let score = super::score(alert, entry, &policy);

        assert!((0.0..=1.0).contains(&score));
        assert!(approx_eq!(f64, (score / 0.05).round() * 0.05, score, epsilon = 1e-9));
      }
    }
  }

  #[test]
  fn classification_thresholds() {
    use crate::model::MatchStatus;

    let policy = ScorePolicy::default();

    assert_eq!(policy.classify(0.85), MatchStatus::Exact);
    assert_eq!(policy.classify(1.0), MatchStatus::Exact);
    assert_eq!(policy.classify(0.84), MatchStatus::Partial);
    assert_eq!(policy.classify(0.5), MatchStatus::Partial);
    assert_eq!(policy.classify(0.49), MatchStatus::None);
    assert_eq!(policy.classify(0.0), MatchStatus::None);
  }
}
