use super::*;

/// A stored file located through its opaque unique id: the storage URI plus
/// the URL of the original, unscaled image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
  pub uri: String,
  pub url: String,
  pub uuid: String,
}

/// Looks up stored files by the unique id carried on placeholder tags.
pub trait FileResolver {
  /// Fails with [`Error::FileNotFound`] when no file matches `uuid`.
  fn resolve(&self, uuid: &str) -> Result<FileReference>;
}
