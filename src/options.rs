/// Host setting value for "link image to nothing".
pub const LINK_TO_NOTHING: &str = "";

/// Host setting value for "link image to the original image".
pub const LINK_TO_ORIGINAL_IMAGE: &str = "@";

/// Host setting value for "show the original image" (no style applied).
pub const STYLE_ORIGINAL: &str = "";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkTarget {
  #[default]
  Nothing,
  OriginalImage,
  Style(String),
}

impl LinkTarget {
  pub fn as_setting(&self) -> &str {
    match self {
      Self::Nothing => LINK_TO_NOTHING,
      Self::OriginalImage => LINK_TO_ORIGINAL_IMAGE,
      Self::Style(style) => style,
    }
  }

  pub fn from_setting(setting: &str) -> Self {
    match setting {
      LINK_TO_NOTHING => Self::Nothing,
      LINK_TO_ORIGINAL_IMAGE => Self::OriginalImage,
      style => Self::Style(style.to_string()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
  pub image_style: Option<String>,
  pub link_target: LinkTarget,
}

impl FilterOptions {
  #[must_use]
  pub fn builder() -> FilterOptionsBuilder {
    FilterOptionsBuilder::default()
  }

  /// Builds options from the two string-valued settings supplied by a host
  /// configuration form. An empty style shows the original image.
  pub fn from_settings(image_style: &str, link: &str) -> Self {
    Self {
      image_style: (image_style != STYLE_ORIGINAL)
        .then(|| image_style.to_string()),
      link_target: LinkTarget::from_setting(link),
    }
  }
}

#[derive(Default)]
pub struct FilterOptionsBuilder {
  inner: FilterOptions,
}

impl FilterOptionsBuilder {
  #[must_use]
  pub fn build(self) -> FilterOptions {
    self.inner
  }

  #[must_use]
  pub fn image_style(self, image_style: impl Into<String>) -> Self {
    Self {
      inner: FilterOptions {
        image_style: Some(image_style.into()),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn link_target(self, link_target: LinkTarget) -> Self {
    Self {
      inner: FilterOptions {
        link_target,
        ..self.inner
      },
    }
  }
}
