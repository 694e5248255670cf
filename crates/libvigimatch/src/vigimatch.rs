use crate::cache::SeenAlerts;
use crate::error::VigimatchError;
use crate::fetcher::AlertSource;
use crate::matching::{ScorePolicy, match_alerts};
use crate::model::{AlertRecord, MatchResult, RegistryEntry};

/// The main entrypoint for using the library.
///
/// Ties an alert feed, a loaded license registry, the scoring policy and the
/// seen-alert cache together. The matching itself is pure and synchronous;
/// only fetching the feed is asynchronous.
#[derive(Clone, Debug)]
pub struct Vigimatch<S: AlertSource> {
  source: S,
  registry: Vec<RegistryEntry>,
  policy: ScorePolicy,
  seen: SeenAlerts,
}

impl<S: AlertSource> Vigimatch<S> {
  pub fn new(source: S, registry: Vec<RegistryEntry>, seen: SeenAlerts) -> Vigimatch<S> {
    Vigimatch {
      source,
      registry,
      policy: ScorePolicy::default(),
      seen,
    }
  }

  pub fn with_policy(mut self, policy: ScorePolicy) -> Vigimatch<S> {
    self.policy = policy;
    self
  }

  pub fn registry(&self) -> &[RegistryEntry] {
    &self.registry
  }

  pub async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, VigimatchError> {
    Ok(self.source.fetch_alerts().await?)
  }

  /// Fetch the current feed and match every alert against the registry.
  pub async fn match_current(&self) -> Result<Vec<MatchResult>, VigimatchError> {
    let alerts = self.fetch_alerts().await?;

    Ok(match_alerts(&alerts, &self.registry, &self.policy))
  }

  /// Fetch the current feed, keep only alerts not seen on a previous run,
  /// record the whole feed as seen, and match the new ones.
  pub async fn match_new(&self) -> Result<Vec<MatchResult>, VigimatchError> {
    let alerts = self.fetch_alerts().await?;
    let unseen = self.seen.unseen(&alerts);

    self.seen.remember(&alerts)?;

    Ok(match_alerts(&unseen, &self.registry, &self.policy))
  }
}
