use std::fs;
use std::path::Path;

use crate::error::VigimatchError;
use crate::model::RegistryEntry;

/// Load the local license registry from a JSON array.
///
/// Deserialization is all-or-nothing: an entry missing one of its required
/// keys fails the whole document, there is no partially-populated output.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Vec<RegistryEntry>, VigimatchError> {
  let raw = fs::read_to_string(path.as_ref())?;
  let entries = serde_json::from_str::<Vec<RegistryEntry>>(&raw)?;

  Ok(entries)
}

/// Fail-closed variant: any loading failure yields an empty registry, which
/// makes every alert report as unmatched rather than matched against partial
/// data.
pub fn load_registry_or_empty(path: impl AsRef<Path>) -> Vec<RegistryEntry> {
  match load_registry(path.as_ref()) {
    Ok(entries) => {
      tracing::info!(count = entries.len(), path = %path.as_ref().display(), "loaded registry");

      entries
    }

    Err(err) => {
      tracing::warn!(error = err.to_string(), path = %path.as_ref().display(), "could not load registry, every alert will report as unmatched");

      vec![]
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::{load_registry, load_registry_or_empty};

  fn registry_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    file.write_all(contents.as_bytes()).unwrap();
    file
  }

  #[test]
  fn loads_a_complete_registry() {
    let file = registry_file(
      r#"[
        {"local_product_name": "樂意保", "ingredient": "lecanemab", "form": "100 mg/mL 注射液", "license_id": "MOHW-BI-001273"},
        {"local_product_name": "骨松益", "ingredient": "denosumab", "form": "60 mg/1 mL 注射液", "license_id": "衛部藥製字第XXXX號", "reference_link": "https://example.test/812"}
      ]"#,
    );

    let entries = load_registry(file.path()).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].local_product_name, "樂意保");
    assert_eq!(entries[1].reference_link.as_deref(), Some("https://example.test/812"));
  }

  #[test]
  fn fails_closed_on_missing_required_keys() {
    let file = registry_file(r#"[{"local_product_name": "樂意保", "ingredient": "lecanemab"}]"#);

    assert!(load_registry(file.path()).is_err());
    assert!(load_registry_or_empty(file.path()).is_empty());
  }

  #[test]
  fn fails_closed_on_malformed_json() {
    let file = registry_file("not json at all");

    assert!(load_registry_or_empty(file.path()).is_empty());
  }

  #[test]
  fn fails_closed_on_missing_file() {
    assert!(load_registry_or_empty("/nonexistent/registry.json").is_empty());
  }

  #[test]
  fn empty_document_is_an_empty_registry() {
    let file = registry_file("[]");

    assert!(load_registry(file.path()).unwrap().is_empty());
  }
}
