use super::*;

#[derive(Debug, Error)]
pub(crate) enum SourceUnavailable {
  #[error("`{url}` returned no data")]
  NoData { url: String },
  #[error("request to `{url}` failed")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
}

impl SourceUnavailable {
  pub(crate) fn url(&self) -> &str {
    match self {
      Self::NoData { url } | Self::Request { url, .. } => url,
    }
  }
}
