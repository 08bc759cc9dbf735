use super::*;

/// Read-only access to a ranked story feed.
#[async_trait]
pub(crate) trait Source: Send + Sync {
  /// Fetches a single item. Missing and deleted items are `Ok(None)`.
  async fn get_story(
    &self,
    id: StoryId,
  ) -> Result<Option<RawStory>, SourceUnavailable>;

  /// Fetches story ids in rank order.
  async fn list_top_story_ids(&self) -> Result<Vec<StoryId>, SourceUnavailable>;
}
