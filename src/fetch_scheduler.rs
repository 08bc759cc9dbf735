use super::*;

/// Fetches stories with a cap on outstanding requests, writing each result
/// into the slot of the id that produced it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FetchScheduler {
  concurrency: usize,
}

impl Default for FetchScheduler {
  fn default() -> Self {
    Self::new(DEFAULT_CONCURRENCY)
  }
}

impl FetchScheduler {
  pub(crate) fn concurrency(self) -> usize {
    self.concurrency
  }

  /// Returns one entry per id, in id order. Failed fetches are `None` and do
  /// not stop the batch.
  pub(crate) async fn fetch_all<S: Source + ?Sized>(
    self,
    source: &S,
    ids: &[StoryId],
  ) -> Vec<Option<RawStory>> {
    let mut slots = Vec::with_capacity(ids.len());
    slots.resize_with(ids.len(), || None);

    let mut completions = stream::iter(ids.iter().copied().enumerate())
      .map(|(index, id)| async move {
        (index, id, source.get_story(id).await)
      })
      .buffer_unordered(self.concurrency);

    while let Some((index, id, result)) = completions.next().await {
      let story = match result {
        Ok(story) => story,
        Err(error) => {
          warn!(id, %error, "story fetch failed");
          None
        }
      };

      if let Some(slot) = slots.get_mut(index) {
        *slot = story;
      }
    }

    slots
  }

  pub(crate) fn new(concurrency: usize) -> Self {
    Self {
      concurrency: concurrency.max(1),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::fake_source::FakeSource};

  fn ids(slots: &[Option<RawStory>]) -> Vec<Option<StoryId>> {
    slots
      .iter()
      .map(|slot| slot.as_ref().map(|story| story.id))
      .collect()
  }

  #[tokio::test]
  async fn output_follows_input_order_despite_completion_order() {
    let source = FakeSource::with_ids([])
      .delay(1, 60)
      .delay(2, 5)
      .delay(3, 30)
      .delay(4, 0);

    let slots = FetchScheduler::new(4)
      .fetch_all(&source, &[1, 2, 3, 4])
      .await;

    assert_eq!(ids(&slots), vec![Some(1), Some(2), Some(3), Some(4)]);
    assert_ne!(source.completions(), vec![1, 2, 3, 4]);
  }

  #[tokio::test]
  async fn full_batch_keeps_length_and_mapping() {
    let input = (1..=50).rev().collect::<Vec<StoryId>>();

    let mut source = FakeSource::with_ids([]);

    for id in &input {
      source = source.delay(*id, id % 7);
    }

    let slots = FetchScheduler::new(50).fetch_all(&source, &input).await;

    assert_eq!(slots.len(), input.len());

    for (id, slot) in input.iter().zip(&slots) {
      assert_eq!(slot.as_ref(), Some(&FakeSource::story(*id)));
    }
  }

  #[tokio::test]
  async fn never_exceeds_concurrency_ceiling() {
    let input = (1..=20).collect::<Vec<StoryId>>();

    let mut source = FakeSource::with_ids([]);

    for id in &input {
      source = source.delay(*id, 5 + id % 4);
    }

    FetchScheduler::new(3).fetch_all(&source, &input).await;

    assert!(source.peak() <= 3, "peak was {}", source.peak());
    assert!(source.peak() >= 2, "fetches should overlap");
  }

  #[tokio::test]
  async fn failures_and_missing_items_leave_empty_slots() {
    let source = FakeSource::with_ids([]).fail(2).missing(4);

    let slots = FetchScheduler::new(2)
      .fetch_all(&source, &[1, 2, 3, 4, 5])
      .await;

    assert_eq!(ids(&slots), vec![Some(1), None, Some(3), None, Some(5)]);
  }

  #[tokio::test]
  async fn slow_fetch_does_not_block_others() {
    let source = FakeSource::with_ids([]).delay(1, 200);

    let slots = FetchScheduler::new(2)
      .fetch_all(&source, &[1, 2, 3, 4, 5])
      .await;

    assert_eq!(slots.len(), 5);
    assert_eq!(source.completions(), vec![2, 3, 4, 5, 1]);
  }

  #[tokio::test]
  async fn empty_input_yields_empty_output() {
    let source = FakeSource::with_ids([]);

    let slots = FetchScheduler::default().fetch_all(&source, &[]).await;

    assert!(slots.is_empty());
    assert_eq!(source.peak(), 0);
  }

  #[test]
  fn zero_concurrency_is_clamped() {
    assert_eq!(FetchScheduler::new(0).concurrency(), 1);
    assert_eq!(FetchScheduler::default().concurrency(), DEFAULT_CONCURRENCY);
  }
}
