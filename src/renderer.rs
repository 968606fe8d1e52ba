use super::*;

/// Everything an external renderer needs to produce markup for one inline
/// image: the resolved file, the pass-through attributes, the chosen image
/// style, and the already-resolved link URL (if any).
#[derive(Debug)]
pub struct RenderRequest<'a> {
  pub attributes: &'a AttributeMap,
  pub file: &'a FileReference,
  pub image_style: Option<&'a str>,
  pub link_url: Option<&'a str>,
}

/// The renderer's output: an HTML fragment (typically an `<img>`, optionally
/// wrapped in `<a>`) plus the cache tags the host should register for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
  pub cache_tags: BTreeSet<String>,
  pub markup: String,
}

/// Renders styled markup for a resolved inline image.
pub trait ImageRenderer {
  /// Fails with [`Error::InvalidImage`] when the resolved file cannot be
  /// rendered as an image.
  fn render(&self, request: &RenderRequest<'_>) -> Result<RenderedImage>;
}
