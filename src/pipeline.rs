use super::*;

/// Turns the ranked id list into display-ready stories. Failures never
/// escape `load_top_stories`; a load that produces nothing is reported
/// through `TopStories::error`.
pub(crate) struct Pipeline<S> {
  limit: usize,
  scheduler: FetchScheduler,
  source: S,
}

impl<S: Source> Pipeline<S> {
  pub(crate) async fn load_top_stories(&self) -> TopStories {
    let started = Instant::now();

    match self.try_load().await {
      Ok(stories) if stories.is_empty() => {
        warn!("every story fetch failed");
        TopStories::failed()
      }
      Ok(stories) => {
        info!(
          count = stories.len(),
          elapsed_ms = started.elapsed().as_millis(),
          "loaded top stories"
        );

        TopStories::loaded(stories)
      }
      Err(error) => {
        error!(%error, url = error.url(), "could not fetch top story ids");
        TopStories::failed()
      }
    }
  }

  pub(crate) fn new(source: S, limit: usize, concurrency: usize) -> Self {
    Self {
      limit,
      scheduler: FetchScheduler::new(concurrency),
      source,
    }
  }

  async fn try_load(&self) -> Result<Vec<DisplayStory>, SourceUnavailable> {
    let mut ids = self.source.list_top_story_ids().await?;

    ids.truncate(self.limit);

    debug!(
      count = ids.len(),
      concurrency = self.scheduler.concurrency(),
      "fetching stories"
    );

    let slots = self.scheduler.fetch_all(&self.source, &ids).await;

    let requested = slots.len();

    let stories = slots
      .into_iter()
      .flatten()
      .map(DisplayStory::from)
      .collect::<Vec<_>>();

    if stories.len() < requested {
      debug!(
        dropped = requested - stories.len(),
        requested, "dropped stories that could not be fetched"
      );
    }

    Ok(stories)
  }
}
