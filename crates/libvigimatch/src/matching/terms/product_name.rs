use crate::matching::similarity::similarity;
use crate::matching::{Prepared, ScorePolicy, Term};

/// Commercial-name similarity. The weakest, most language-sensitive signal;
/// it only breaks ties between candidates that already agree on ingredient
/// or form.
pub(crate) struct ProductNameSimilarity;

impl Term for ProductNameSimilarity {
  fn name(&self) -> &'static str {
    "product_name_similarity"
  }

  fn points(&self, policy: &ScorePolicy, lhs: &Prepared, rhs: &Prepared) -> f64 {
    if lhs.product_name.is_empty() || rhs.product_name.is_empty() {
      return 0.0;
    }

    let ratio = similarity(&lhs.product_name, &rhs.product_name);

    if ratio >= policy.name_strong_ratio {
      policy.name_strong
    } else if ratio >= policy.name_weak_ratio {
      policy.name_weak
    } else {
      0.0
    }
  }
}
