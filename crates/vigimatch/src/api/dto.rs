use jiff::civil::Date;
use libvigimatch::prelude::{AlertFilter, MatchResult};
use serde::{Deserialize, Serialize};

/// Query parameters shared by the listing and export endpoints. `source`
/// repeats for multiple values.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct FilterParams {
  pub from: Option<Date>,
  pub to: Option<Date>,
  #[serde(default)]
  pub source: Vec<String>,
  pub q: Option<String>,
}

impl From<FilterParams> for AlertFilter {
  fn from(params: FilterParams) -> AlertFilter {
    AlertFilter {
      from: params.from,
      to: params.to,
      sources: params.source,
      keyword: params.q,
    }
  }
}

#[derive(Serialize)]
pub(super) struct AlertsResponse {
  pub total: usize,
  pub results: Vec<MatchResult>,
}
