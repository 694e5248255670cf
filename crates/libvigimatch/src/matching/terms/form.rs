use crate::matching::{Prepared, ScorePolicy, Term};

/// Dosage form and strength.
pub(crate) struct FormIdentity;

impl Term for FormIdentity {
  fn name(&self) -> &'static str {
    "form_identity"
  }

  fn points(&self, policy: &ScorePolicy, lhs: &Prepared, rhs: &Prepared) -> f64 {
    if lhs.form.is_empty() || rhs.form.is_empty() {
      return 0.0;
    }

    if lhs.form == rhs.form {
      return policy.form_exact;
    }

    if !lhs.form_token.is_empty() && lhs.form_token == rhs.form_token {
      return policy.form_token;
    }

    0.0
  }
}
