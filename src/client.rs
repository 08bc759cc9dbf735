use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::DEFAULT_API_BASE_URL)
  }
}

#[async_trait]
impl Source for Client {
  async fn get_story(
    &self,
    id: StoryId,
  ) -> Result<Option<RawStory>, SourceUnavailable> {
    let story = self
      .fetch_json::<RawStory>(self.item_url(id))
      .await?
      .filter(|story| !story.is_tombstone());

    if story.is_none() {
      debug!(id, "story missing or deleted");
    }

    Ok(story)
  }

  async fn list_top_story_ids(&self) -> Result<Vec<StoryId>, SourceUnavailable> {
    let url = self.top_stories_url();

    match self.fetch_json::<Vec<StoryId>>(url.clone()).await? {
      Some(ids) if !ids.is_empty() => {
        debug!(count = ids.len(), "fetched top story ids");
        Ok(ids)
      }
      _ => Err(SourceUnavailable::NoData { url }),
    }
  }
}

impl Client {
  pub(crate) const DEFAULT_API_BASE_URL: &str =
    "https://hacker-news.firebaseio.com/v0";

  async fn fetch_json<T: DeserializeOwned>(
    &self,
    url: String,
  ) -> Result<Option<T>, SourceUnavailable> {
    let request = |source| SourceUnavailable::Request {
      url: url.clone(),
      source,
    };

    self
      .client
      .get(&url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(request)?
      .json::<Option<T>>()
      .await
      .map_err(request)
  }

  fn item_url(&self, id: StoryId) -> String {
    format!("{}/item/{id}.json", self.base_url)
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  fn top_stories_url(&self) -> String {
    format!("{}/topstories.json", self.base_url)
  }
}
