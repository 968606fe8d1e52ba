use super::*;

const CACHE_TAG_PREFIX: &str = "image_style:";

/// A static description of the files and image styles available to the
/// filter when it runs outside a host system, e.g. in tests, previews, or a
/// static publishing pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileManifest {
  #[serde(default)]
  files: IndexMap<String, ManifestFile>,
  #[serde(default)]
  styles: IndexMap<String, ManifestStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
  #[serde(default)]
  pub height: Option<u32>,
  #[serde(default)]
  pub media_type: Option<String>,
  pub uri: String,
  pub url: String,
  #[serde(default)]
  pub width: Option<u32>,
}

/// A named style with a URL template; `{url}` and `{uri}` expand to the
/// referenced file's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStyle {
  pub label: String,
  pub url_template: String,
}

impl FileManifest {
  pub fn file(&self, uuid: &str) -> Option<&ManifestFile> {
    self.files.get(uuid)
  }

  pub fn from_json(json: &str) -> serde_json::Result<Self> {
    serde_json::from_str(json)
  }
}

impl FileResolver for FileManifest {
  fn resolve(&self, uuid: &str) -> Result<FileReference> {
    let file = self.file(uuid).ok_or_else(|| Error::FileNotFound {
      uuid: uuid.to_string(),
    })?;

    Ok(FileReference {
      uri: file.uri.clone(),
      url: file.url.clone(),
      uuid: uuid.to_string(),
    })
  }
}

impl ImageStyleCatalog for FileManifest {
  fn styles(&self) -> Vec<ImageStyle> {
    self
      .styles
      .iter()
      .map(|(id, style)| ImageStyle {
        id: id.clone(),
        label: style.label.clone(),
      })
      .collect()
  }

  fn url_for(&self, style: &str, file: &FileReference) -> Result<String> {
    let entry = self.styles.get(style).ok_or_else(|| Error::StyleNotFound {
      style: style.to_string(),
    })?;

    Ok(
      entry
        .url_template
        .replace("{url}", &file.url)
        .replace("{uri}", &file.uri),
    )
  }
}

/// Renders inline image markup straight from manifest data, standing in for
/// a host system's themed renderer.
pub struct ManifestRenderer<'a> {
  manifest: &'a FileManifest,
}

impl<'a> ManifestRenderer<'a> {
  fn image_markup(
    &self,
    request: &RenderRequest<'_>,
    file: &ManifestFile,
  ) -> Result<String> {
    let src = match request.image_style {
      Some(style) => self.manifest.url_for(style, request.file)?,
      None => request.file.url.clone(),
    };

    let mut markup = String::from("<img");

    push_attribute(&mut markup, "src", &src);

    let classes = request.attributes.classes();

    if !classes.is_empty() {
      push_attribute(&mut markup, "class", &classes.value());
    }

    for (name, value) in request.attributes.iter() {
      push_attribute(&mut markup, name, value);
    }

    if request.attributes.get("width").is_none()
      && let Some(width) = file.width
    {
      push_attribute(&mut markup, "width", &width.to_string());
    }

    if request.attributes.get("height").is_none()
      && let Some(height) = file.height
    {
      push_attribute(&mut markup, "height", &height.to_string());
    }

    markup.push_str(" />");

    Ok(markup)
  }

  pub fn new(manifest: &'a FileManifest) -> Self {
    Self { manifest }
  }
}

impl ImageRenderer for ManifestRenderer<'_> {
  fn render(&self, request: &RenderRequest<'_>) -> Result<RenderedImage> {
    let uuid = &request.file.uuid;

    let file = self.manifest.file(uuid).ok_or_else(|| Error::FileNotFound {
      uuid: uuid.clone(),
    })?;

    if let Some(media_type) = &file.media_type
      && !media_type.starts_with("image/")
    {
      return Err(Error::InvalidImage { uuid: uuid.clone() });
    }

    let image = self.image_markup(request, file)?;

    let markup = match request.link_url {
      Some(link_url) => {
        format!(r#"<a href="{}">{image}</a>"#, escape_attribute(link_url))
      }
      None => image,
    };

    let cache_tags = request
      .image_style
      .map(|style| BTreeSet::from([format!("{CACHE_TAG_PREFIX}{style}")]))
      .unwrap_or_default();

    Ok(RenderedImage { cache_tags, markup })
  }
}

fn escape_attribute(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());

  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '\n' | '\r' | '\t' => escaped.push(' '),
      _ => escaped.push(ch),
    }
  }

  escaped
}

fn push_attribute(markup: &mut String, name: &str, value: &str) {
  markup.push(' ');
  markup.push_str(name);
  markup.push_str("=\"");
  markup.push_str(&escape_attribute(value));
  markup.push('"');
}
