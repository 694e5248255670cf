use std::fs;
use std::path::PathBuf;

use ahash::HashSet;
use itertools::Itertools;

use crate::error::VigimatchError;
use crate::model::AlertRecord;

/// File-backed set of notice titles already shown to the user, used to tell
/// new alerts apart from ones seen on a previous run.
///
/// A missing or unreadable file reads as the empty set, so a fresh
/// deployment reports everything as new. The set is stored as a sorted JSON
/// array to keep the file bytes reproducible.
#[derive(Clone, Debug)]
pub struct SeenAlerts {
  path: PathBuf,
}

impl SeenAlerts {
  pub fn new(path: impl Into<PathBuf>) -> SeenAlerts {
    SeenAlerts { path: path.into() }
  }

  fn load(&self) -> HashSet<String> {
    let Ok(raw) = fs::read_to_string(&self.path) else {
      return HashSet::default();
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
      Ok(titles) => titles.into_iter().collect(),

      Err(err) => {
        tracing::warn!(error = err.to_string(), path = %self.path.display(), "could not read the seen-alert cache, treating every alert as new");

        HashSet::default()
      }
    }
  }

  /// Alerts whose titles were not recorded by a previous run.
  pub fn unseen(&self, alerts: &[AlertRecord]) -> Vec<AlertRecord> {
    let seen = self.load();

    alerts.iter().filter(|alert| !seen.contains(&alert.title)).cloned().collect()
  }

  /// Record the given alerts as seen, keeping previously recorded titles.
  pub fn remember(&self, alerts: &[AlertRecord]) -> Result<(), VigimatchError> {
    let mut seen = self.load();

    seen.extend(alerts.iter().map(|alert| alert.title.clone()));

    let titles = seen.into_iter().sorted().collect::<Vec<_>>();

    fs::write(&self.path, serde_json::to_string_pretty(&titles)?)?;

    Ok(())
  }
}
