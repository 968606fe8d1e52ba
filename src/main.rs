use {
  anyhow::Context,
  clap::Parser,
  inline_image_styles::{
    FileManifest, FilterOptions, InlineImageFilter, ManifestRenderer,
  },
  std::{fs, path::PathBuf, process},
  tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(name = "inline-image-styles")]
#[command(about = "Replace inline image placeholders in an HTML fragment with styled image markup", long_about = None)]
struct Arguments {
  /// Path to the HTML fragment to filter
  #[arg(value_name = "FILE")]
  input: PathBuf,

  /// Path to the JSON manifest describing files and image styles
  #[arg(long, value_name = "FILE")]
  manifest: PathBuf,

  /// Image style applied to inline images (empty shows the original image)
  #[arg(long, default_value = "")]
  style: String,

  /// Link setting: empty for nothing, `@` for the original image, or an
  /// image style id
  #[arg(long, default_value = "")]
  link: String,
}

impl Arguments {
  fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let manifest = fs::read_to_string(&self.manifest).with_context(|| {
      format!("failed to read manifest from `{}`", self.manifest.display())
    })?;

    let manifest = FileManifest::from_json(&manifest).with_context(|| {
      format!("failed to parse manifest `{}`", self.manifest.display())
    })?;

    let renderer = ManifestRenderer::new(&manifest);

    let filter = InlineImageFilter::new(
      &manifest,
      &renderer,
      &manifest,
      FilterOptions::from_settings(&self.style, &self.link),
    );

    println!("{}", filter.process(&html).html);

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
