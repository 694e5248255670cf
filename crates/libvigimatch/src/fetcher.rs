use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

use crate::fallback;
use crate::model::AlertRecord;

/// Listing page for the regulator's Drug Safety Communications.
pub const DSC_FEED_URL: &str = "https://www.fda.gov/drugs/drug-safety-and-availability/drug-safety-communications";

pub trait AlertSource: Clone + Send + Sync + 'static {
  fn fetch_alerts(&self) -> impl Future<Output = anyhow::Result<Vec<AlertRecord>>> + Send;
}

/// Live feed scraping the regulator's listing page.
///
/// Notices are recovered from anchor titles; when the page cannot be
/// reached, answers with an error, or parses to nothing, the bundled
/// dataset takes over so the matching pipeline always has input.
#[derive(Clone, Debug)]
pub struct DscFeed {
  url: String,
}

impl DscFeed {
  pub fn new(url: impl Into<String>) -> DscFeed {
    DscFeed { url: url.into() }
  }

  async fn fetch_feed(&self) -> anyhow::Result<Vec<AlertRecord>> {
    let body = reqwest::get(&self.url)
      .await
      .context("could not reach the alert feed")?
      .error_for_status()
      .context("alert feed responded with an error")?
      .text()
      .await
      .context("could not read the alert feed")?;

    Ok(parse_notice_titles(&body))
  }
}

impl Default for DscFeed {
  fn default() -> DscFeed {
    DscFeed::new(DSC_FEED_URL)
  }
}

impl AlertSource for DscFeed {
  async fn fetch_alerts(&self) -> anyhow::Result<Vec<AlertRecord>> {
    let alerts = match self.fetch_feed().await {
      Ok(alerts) => alerts,

      Err(err) => {
        tracing::warn!(error = err.to_string(), "could not fetch the alert feed, using the bundled dataset");

        return Ok(fallback::alerts());
      }
    };

    if alerts.is_empty() {
      tracing::warn!("alert feed parsed without any safety notice, using the bundled dataset");

      return Ok(fallback::alerts());
    }

    Ok(alerts)
  }
}

/// Fixed in-memory feed, for offline operation and tests.
#[derive(Clone, Debug)]
pub struct StaticFeed {
  alerts: Vec<AlertRecord>,
}

impl StaticFeed {
  pub fn new(alerts: Vec<AlertRecord>) -> StaticFeed {
    StaticFeed { alerts }
  }
}

impl Default for StaticFeed {
  fn default() -> StaticFeed {
    StaticFeed { alerts: fallback::alerts() }
  }
}

impl AlertSource for StaticFeed {
  async fn fetch_alerts(&self) -> anyhow::Result<Vec<AlertRecord>> {
    Ok(self.alerts.clone())
  }
}

static ANCHOR_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"<a\s[^>]*title="([^"]*)""#).expect("could not build anchor title pattern"));
static PRODUCT_INGREDIENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Za-z0-9\-]+)\s*\(([^)]+)\)").expect("could not build product pattern"));

fn parse_notice_titles(html: &str) -> Vec<AlertRecord> {
  ANCHOR_TITLE
    .captures_iter(html)
    .filter_map(|caps| {
      let title = caps.get(1)?.as_str().trim();

      if title.is_empty() || !title.contains("Drug Safety Communication") {
        return None;
      }

      let (product_name, ingredient) = extract_product_and_ingredient(title);

      Some(AlertRecord {
        source: "DSC".to_string(),
        title: title.to_string(),
        product_name,
        ingredient,
        ..Default::default()
      })
    })
    .collect()
}

/// The regulator titles its notices `Product (ingredient): …`; anything not
/// shaped that way yields empty product and ingredient.
pub(crate) fn extract_product_and_ingredient(title: &str) -> (String, String) {
  match PRODUCT_INGREDIENT.captures(title) {
    Some(caps) => (caps[1].to_string(), caps[2].to_string()),
    None => (String::new(), String::new()),
  }
}
