use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct RawStory {
  pub(crate) by: Option<String>,
  pub(crate) deleted: Option<bool>,
  pub(crate) id: StoryId,
  pub(crate) kids: Option<Vec<StoryId>>,
  pub(crate) score: Option<u64>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl RawStory {
  /// Deleted items come back from the API as tombstones carrying only an id
  /// and a timestamp.
  pub(crate) fn is_tombstone(&self) -> bool {
    self.deleted.unwrap_or(false)
  }
}
