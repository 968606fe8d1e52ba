#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("renderer produced no element nodes for file `{uuid}`")]
  EmptyRender { uuid: String },
  #[error("no file found for uuid `{uuid}`")]
  FileNotFound { uuid: String },
  #[error("file `{uuid}` cannot be rendered as an image")]
  InvalidImage { uuid: String },
  #[error("unknown image style `{style}`")]
  StyleNotFound { style: String },
}
