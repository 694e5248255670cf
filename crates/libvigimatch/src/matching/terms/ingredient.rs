use crate::matching::{Prepared, ScorePolicy, Term};

/// Active-ingredient identity, the dominant safety signal. An empty
/// ingredient on either side contributes nothing.
pub(crate) struct IngredientIdentity;

impl Term for IngredientIdentity {
  fn name(&self) -> &'static str {
    "ingredient_identity"
  }

  fn points(&self, policy: &ScorePolicy, lhs: &Prepared, rhs: &Prepared) -> f64 {
    if lhs.ingredient.is_empty() || rhs.ingredient.is_empty() {
      return 0.0;
    }

    if lhs.ingredient == rhs.ingredient {
      return policy.ingredient_exact;
    }

    if !lhs.ingredient_token.is_empty() && lhs.ingredient_token == rhs.ingredient_token {
      return policy.ingredient_token;
    }

    0.0
  }
}
