use {
  super::*,
  std::{
    collections::{HashMap, HashSet},
    sync::{
      Mutex,
      atomic::{AtomicUsize, Ordering},
    },
  },
};

/// In-memory `Source` with scripted latency and failures that records how
/// many fetches were outstanding at once.
#[derive(Default)]
pub(crate) struct FakeSource {
  completions: Mutex<Vec<StoryId>>,
  delays: HashMap<StoryId, Duration>,
  failing: HashSet<StoryId>,
  ids: Option<Vec<StoryId>>,
  in_flight: AtomicUsize,
  missing: HashSet<StoryId>,
  peak: AtomicUsize,
}

#[async_trait]
impl Source for FakeSource {
  async fn get_story(
    &self,
    id: StoryId,
  ) -> Result<Option<RawStory>, SourceUnavailable> {
    let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    self.peak.fetch_max(current, Ordering::SeqCst);

    match self.delays.get(&id) {
      Some(delay) => tokio::time::sleep(*delay).await,
      None => tokio::task::yield_now().await,
    }

    self.in_flight.fetch_sub(1, Ordering::SeqCst);
    self.completions.lock().unwrap().push(id);

    if self.failing.contains(&id) {
      return Err(SourceUnavailable::NoData {
        url: format!("fake://item/{id}"),
      });
    }

    if self.missing.contains(&id) {
      return Ok(None);
    }

    Ok(Some(Self::story(id)))
  }

  async fn list_top_story_ids(&self) -> Result<Vec<StoryId>, SourceUnavailable> {
    let ids = self.ids.clone().filter(|ids| !ids.is_empty());

    ids.ok_or_else(|| SourceUnavailable::NoData {
      url: "fake://topstories".to_string(),
    })
  }
}

impl FakeSource {
  pub(crate) fn completions(&self) -> Vec<StoryId> {
    self.completions.lock().unwrap().clone()
  }

  pub(crate) fn delay(mut self, id: StoryId, millis: u64) -> Self {
    self.delays.insert(id, Duration::from_millis(millis));
    self
  }

  pub(crate) fn fail(mut self, id: StoryId) -> Self {
    self.failing.insert(id);
    self
  }

  pub(crate) fn missing(mut self, id: StoryId) -> Self {
    self.missing.insert(id);
    self
  }

  pub(crate) fn peak(&self) -> usize {
    self.peak.load(Ordering::SeqCst)
  }

  pub(crate) fn story(id: StoryId) -> RawStory {
    RawStory {
      by: Some(format!("user{id}")),
      deleted: None,
      id,
      kids: Some((0..id).collect()),
      score: Some(id * 10),
      time: Some(0),
      title: Some(format!("Story {id}")),
      url: Some(format!("https://example.com/{id}")),
    }
  }

  pub(crate) fn unavailable() -> Self {
    Self::default()
  }

  pub(crate) fn with_ids(ids: impl IntoIterator<Item = StoryId>) -> Self {
    Self {
      ids: Some(ids.into_iter().collect()),
      ..Self::default()
    }
  }
}
