use super::*;

/// The filtered markup together with the cache tags reported while
/// rendering, so the host can register render dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredHtml {
  pub cache_tags: BTreeSet<String>,
  pub html: String,
}
