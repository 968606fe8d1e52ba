use super::*;

/// A server-defined image transformation, as listed to site builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyle {
  pub id: String,
  pub label: String,
}

/// One value→label entry of a settings select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOption {
  pub label: String,
  pub value: String,
}

/// The host's image-style service: the ordered style listing plus styled
/// URL derivation for a stored file.
pub trait ImageStyleCatalog {
  fn styles(&self) -> Vec<ImageStyle>;

  /// Fails with [`Error::StyleNotFound`] when `style` no longer exists.
  fn url_for(&self, style: &str, file: &FileReference) -> Result<String>;
}

/// Options for the "link image to" setting: nothing, the original image,
/// then every known style in catalog order.
pub fn link_options(catalog: &dyn ImageStyleCatalog) -> Vec<SettingOption> {
  let mut options = vec![
    SettingOption {
      label: "Nothing".to_string(),
      value: LINK_TO_NOTHING.to_string(),
    },
    SettingOption {
      label: "The original image".to_string(),
      value: LINK_TO_ORIGINAL_IMAGE.to_string(),
    },
  ];

  options.extend(style_entries(catalog));

  options
}

/// Options for the "inline image style" setting: the original image, then
/// every known style in catalog order.
pub fn style_options(catalog: &dyn ImageStyleCatalog) -> Vec<SettingOption> {
  let mut options = vec![SettingOption {
    label: "Show the original image".to_string(),
    value: STYLE_ORIGINAL.to_string(),
  }];

  options.extend(style_entries(catalog));

  options
}

fn style_entries(catalog: &dyn ImageStyleCatalog) -> Vec<SettingOption> {
  catalog
    .styles()
    .into_iter()
    .map(|style| SettingOption {
      label: style.label,
      value: style.id,
    })
    .collect()
}
