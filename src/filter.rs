use super::*;

const MARKER_CLASS: &str = "inline-image";
const WRAPPER_CLASSES: &str = "field-type-image inline-image";

/// Replaces editor-inserted inline image placeholders in a rendered HTML
/// fragment with styled image markup produced by the injected collaborators.
pub struct InlineImageFilter<'a> {
  catalog: &'a dyn ImageStyleCatalog,
  options: FilterOptions,
  renderer: &'a dyn ImageRenderer,
  resolver: &'a dyn FileResolver,
}

impl<'a> InlineImageFilter<'a> {
  fn link_url(&self, file: &FileReference) -> Result<Option<String>> {
    match &self.options.link_target {
      LinkTarget::Nothing => Ok(None),
      LinkTarget::OriginalImage => Ok(Some(file.url.clone())),
      LinkTarget::Style(style) => {
        Ok(Some(self.catalog.url_for(style, file)?))
      }
    }
  }

  pub fn new(
    resolver: &'a dyn FileResolver,
    renderer: &'a dyn ImageRenderer,
    catalog: &'a dyn ImageStyleCatalog,
    options: FilterOptions,
  ) -> Self {
    Self {
      catalog,
      options,
      renderer,
      resolver,
    }
  }

  /// Filters one rendered HTML fragment. Placeholders whose resolution
  /// fails are left untouched; the rest are replaced in document order.
  pub fn process(&self, html: &str) -> FilteredHtml {
    let mut document = Html::parse_fragment(html);

    let placeholders: Vec<(NodeId, Placeholder)> = document
      .tree
      .root()
      .descendants()
      .filter_map(|node| match node.value() {
        Node::Element(element) => Placeholder::from_element(element)
          .map(|placeholder| (node.id(), placeholder)),
        _ => None,
      })
      .collect();

    let mut cache_tags = BTreeSet::new();

    for (id, placeholder) in placeholders {
      let uuid = placeholder.uuid.clone();

      match self.replace_placeholder(&mut document, id, placeholder) {
        Ok(tags) => cache_tags.extend(tags),
        Err(error) => {
          warn!(%uuid, %error, "leaving inline image placeholder unmodified");
        }
      }
    }

    FilteredHtml {
      cache_tags,
      html: document.root_element().inner_html(),
    }
  }

  /// All fallible steps run before the first mutation, so a failure leaves
  /// the placeholder exactly as it was parsed.
  fn replace_placeholder(
    &self,
    document: &mut Html,
    id: NodeId,
    placeholder: Placeholder,
  ) -> Result<BTreeSet<String>> {
    let Placeholder {
      mut attributes,
      uuid,
    } = placeholder;

    let alignment = attributes.classes_mut().take_alignment();

    attributes.classes_mut().insert(MARKER_CLASS);

    let file = self.resolver.resolve(&uuid)?;

    let link_url = self.link_url(&file)?;

    let rendered = self.renderer.render(&RenderRequest {
      attributes: &attributes,
      file: &file,
      image_style: self.options.image_style.as_deref(),
      link_url: link_url.as_deref(),
    })?;

    let fragment = RenderedFragment::from_markup(&rendered.markup);

    if fragment.is_empty() {
      return Err(Error::EmptyRender { uuid });
    }

    let mut wrapper_classes = ClassList::parse(WRAPPER_CLASSES);

    if let Some(alignment) = alignment {
      wrapper_classes.insert(alignment);
    }

    let wrapper = element_with_class("div", &wrapper_classes.value());

    let wrapper_id = match document.tree.get_mut(id) {
      Some(mut node) => node.insert_before(wrapper).id(),
      None => return Ok(BTreeSet::new()),
    };

    fragment.import_into(&mut document.tree, wrapper_id);

    if let Some(mut node) = document.tree.get_mut(id) {
      node.detach();
    }

    Ok(rendered.cache_tags)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct SingleFile;

  impl FileResolver for SingleFile {
    fn resolve(&self, uuid: &str) -> Result<FileReference> {
      if uuid == "abc" {
        Ok(FileReference {
          uri: "public/cat.jpg".to_string(),
          url: "https://example.test/files/cat.jpg".to_string(),
          uuid: uuid.to_string(),
        })
      } else {
        Err(Error::FileNotFound {
          uuid: uuid.to_string(),
        })
      }
    }
  }

  struct EmptyRenderer;

  impl ImageRenderer for EmptyRenderer {
    fn render(&self, _request: &RenderRequest<'_>) -> Result<RenderedImage> {
      Ok(RenderedImage::default())
    }
  }

  struct NoStyles;

  impl ImageStyleCatalog for NoStyles {
    fn styles(&self) -> Vec<ImageStyle> {
      Vec::new()
    }

    fn url_for(&self, style: &str, _file: &FileReference) -> Result<String> {
      Err(Error::StyleNotFound {
        style: style.to_string(),
      })
    }
  }

  #[test]
  fn empty_render_leaves_placeholder_untouched() {
    let filter = InlineImageFilter::new(
      &SingleFile,
      &EmptyRenderer,
      &NoStyles,
      FilterOptions::default(),
    );

    let input = r#"<p><img data-editor-file-uuid="abc"></p>"#;

    assert_eq!(filter.process(input).html, input);
  }

  #[test]
  fn missing_link_style_leaves_placeholder_untouched() {
    let filter = InlineImageFilter::new(
      &SingleFile,
      &EmptyRenderer,
      &NoStyles,
      FilterOptions::builder()
        .link_target(LinkTarget::Style("gone".to_string()))
        .build(),
    );

    let input = r#"<p><img data-editor-file-uuid="abc"></p>"#;

    assert_eq!(filter.process(input).html, input);
  }

  #[test]
  fn unknown_uuid_leaves_placeholder_untouched() {
    let filter = InlineImageFilter::new(
      &SingleFile,
      &EmptyRenderer,
      &NoStyles,
      FilterOptions::default(),
    );

    let input = r#"<p><img data-editor-file-uuid="missing"></p>"#;

    assert_eq!(filter.process(input).html, input);
  }
}
