#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  LoadStories { request_id: u64 },
  OpenUrl { url: String },
}
