use {
  ego_tree::{NodeId, NodeRef, Tree},
  fragment::{RenderedFragment, element_with_class},
  html5ever::{LocalName, QualName, namespace_url, ns, tendril::StrTendril},
  indexmap::IndexMap,
  placeholder::Placeholder,
  scraper::{Html, Node, node::Element},
  serde::{Deserialize, Serialize},
  std::collections::BTreeSet,
  tracing::warn,
};

pub use crate::{
  attributes::{AttributeMap, ClassList},
  catalog::{
    ImageStyle, ImageStyleCatalog, SettingOption, link_options, style_options,
  },
  error::Error,
  filter::InlineImageFilter,
  manifest::{FileManifest, ManifestFile, ManifestRenderer, ManifestStyle},
  options::{
    FilterOptions, FilterOptionsBuilder, LINK_TO_NOTHING,
    LINK_TO_ORIGINAL_IMAGE, LinkTarget, STYLE_ORIGINAL,
  },
  output::FilteredHtml,
  renderer::{ImageRenderer, RenderRequest, RenderedImage},
  resolver::{FileReference, FileResolver},
};

mod attributes;
mod catalog;
mod error;
mod filter;
mod fragment;
mod manifest;
mod options;
mod output;
mod placeholder;
mod renderer;
mod resolver;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
