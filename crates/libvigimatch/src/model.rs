use std::fmt;

use bon::bon;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A safety notice published by the foreign regulator.
///
/// String fields default to the empty string when the upstream record does
/// not carry them; only the notice date is genuinely nullable.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AlertRecord {
  #[serde(default)]
  pub alert_date: Option<Date>,
  #[serde(default)]
  pub source: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub product_name: String,
  #[serde(default)]
  pub ingredient: String,
  #[serde(default)]
  pub form: String,
  #[serde(default)]
  pub risk_summary: String,
  #[serde(default)]
  pub action_summary: String,
  #[serde(default)]
  pub excerpt: String,
}

#[bon]
impl AlertRecord {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] product_name: &str,
    alert_date: Option<Date>,
    source: Option<&str>,
    title: Option<&str>,
    ingredient: Option<&str>,
    form: Option<&str>,
    risk_summary: Option<&str>,
    action_summary: Option<&str>,
    excerpt: Option<&str>,
  ) -> AlertRecord {
    AlertRecord {
      alert_date,
      source: source.unwrap_or("DSC").to_string(),
      title: title.map(ToOwned::to_owned).unwrap_or_else(|| product_name.to_string()),
      product_name: product_name.to_string(),
      ingredient: ingredient.unwrap_or_default().to_string(),
      form: form.unwrap_or_default().to_string(),
      risk_summary: risk_summary.unwrap_or_default().to_string(),
      action_summary: action_summary.unwrap_or_default().to_string(),
      excerpt: excerpt.unwrap_or_default().to_string(),
    }
  }
}

/// A locally-approved product license.
///
/// The four identifying fields carry no serde default: a registry document
/// missing one of them fails deserialization as a whole, so the loader can
/// only ever hand out fully-populated entries.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RegistryEntry {
  pub local_product_name: String,
  pub ingredient: String,
  pub form: String,
  pub license_id: String,
  #[serde(default)]
  pub reference_link: Option<String>,
}

#[bon]
impl RegistryEntry {
  #[builder]
  pub fn builder(
    #[builder(start_fn)] local_product_name: &str,
    ingredient: Option<&str>,
    form: Option<&str>,
    license_id: Option<&str>,
    reference_link: Option<&str>,
  ) -> RegistryEntry {
    RegistryEntry {
      local_product_name: local_product_name.to_string(),
      ingredient: ingredient.unwrap_or_default().to_string(),
      form: form.unwrap_or_default().to_string(),
      license_id: license_id.unwrap_or_default().to_string(),
      reference_link: reference_link.map(ToOwned::to_owned),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
  Exact,
  Partial,
  #[default]
  None,
}

impl fmt::Display for MatchStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MatchStatus::Exact => write!(f, "exact"),
      MatchStatus::Partial => write!(f, "partial"),
      MatchStatus::None => write!(f, "none"),
    }
  }
}

/// One output row per alert: the alert passed through unchanged, plus the
/// winning registry fields (empty strings when nothing was accepted) and the
/// rounded confidence score.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MatchResult {
  #[serde(flatten)]
  pub alert: AlertRecord,
  pub status: MatchStatus,
  pub local_product_name: String,
  pub license_id: String,
  pub local_form: String,
  pub reference_link: String,
  pub confidence: f64,
}

impl MatchResult {
  pub fn matched(&self) -> bool {
    self.status != MatchStatus::None
  }
}
