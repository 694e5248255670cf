use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{MatchResult, MatchStatus};

/// Accepted matches below this confidence are flagged for manual review.
const REVIEW_THRESHOLD: f64 = 0.7;

/// Display-side row filter: date range, source tags, free-text keyword.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AlertFilter {
  pub from: Option<Date>,
  pub to: Option<Date>,
  #[serde(default)]
  pub sources: Vec<String>,
  pub keyword: Option<String>,
}

impl AlertFilter {
  pub fn matches(&self, row: &MatchResult) -> bool {
    if let Some(from) = self.from {
      match row.alert.alert_date {
        Some(date) if date >= from => {}
        // A row without a date cannot be proven inside the range.
        _ => return false,
      }
    }

    if let Some(to) = self.to {
      match row.alert.alert_date {
        Some(date) if date <= to => {}
        _ => return false,
      }
    }

    if !self.sources.is_empty() && !self.sources.contains(&row.alert.source) {
      return false;
    }

    if let Some(keyword) = &self.keyword {
      let keyword = keyword.trim().to_lowercase();

      if !keyword.is_empty() {
        let haystacks = [
          &row.alert.product_name,
          &row.alert.ingredient,
          &row.alert.risk_summary,
          &row.alert.action_summary,
          &row.local_product_name,
        ];

        if !haystacks.iter().any(|text| text.to_lowercase().contains(&keyword)) {
          return false;
        }
      }
    }

    true
  }

  pub fn apply(&self, rows: &[MatchResult]) -> Vec<MatchResult> {
    rows.iter().filter(|row| self.matches(row)).cloned().collect()
  }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Kpi {
  pub total: usize,
  pub matched: usize,
  pub exact: usize,
  pub needs_review: usize,
}

pub fn kpi(rows: &[MatchResult]) -> Kpi {
  Kpi {
    total: rows.len(),
    matched: rows.iter().filter(|row| row.matched()).count(),
    exact: rows.iter().filter(|row| row.status == MatchStatus::Exact).count(),
    needs_review: rows.iter().filter(|row| row.matched() && row.confidence < REVIEW_THRESHOLD).count(),
  }
}

const CSV_HEADER: &str = "alert_date,source,title,product_name,ingredient,form,risk_summary,action_summary,excerpt,status,local_product_name,license_id,local_form,reference_link,confidence";

/// Serialize rows for spreadsheet export. Every column is present on every
/// row, including unmatched ones.
pub fn to_csv(rows: &[MatchResult]) -> String {
  let mut out = String::from(CSV_HEADER);

  out.push('\n');

  for row in rows {
    let date = row.alert.alert_date.map(|date| date.to_string()).unwrap_or_default();
    let status = row.status.to_string();
    let confidence = format!("{:.2}", row.confidence);
    let fields = [
      date.as_str(),
      &row.alert.source,
      &row.alert.title,
      &row.alert.product_name,
      &row.alert.ingredient,
      &row.alert.form,
      &row.alert.risk_summary,
      &row.alert.action_summary,
      &row.alert.excerpt,
      &status,
      &row.local_product_name,
      &row.license_id,
      &row.local_form,
      &row.reference_link,
      &confidence,
    ];

    let line = fields.iter().map(|field| csv_field(field)).collect::<Vec<_>>().join(",");

    out.push_str(&line);
    out.push('\n');
  }

  out
}

fn csv_field(value: &str) -> String {
  if value.contains([',', '"', '\n', '\r']) {
    format!("\"{}\"", value.replace('"', "\"\""))
  } else {
    value.to_string()
  }
}
