mod cache;
mod error;
mod fetcher;
mod matching;
mod model;
mod registry;
mod report;
mod vigimatch;

pub mod fallback;

pub mod prelude {
  pub use crate::cache::SeenAlerts;
  pub use crate::error::VigimatchError;
  pub use crate::fetcher::{AlertSource, DSC_FEED_URL, DscFeed, StaticFeed};
  pub use crate::matching::{ScorePolicy, assemble, match_alerts, score, select_best_match};
  pub use crate::matching::normalize::{first_token, normalize};
  pub use crate::matching::similarity::similarity;
  pub use crate::model::{AlertRecord, MatchResult, MatchStatus, RegistryEntry};
  pub use crate::registry::{load_registry, load_registry_or_empty};
  pub use crate::report::{AlertFilter, Kpi, kpi, to_csv};
  pub use crate::vigimatch::Vigimatch;
}
