use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TopStories {
  pub(crate) error: Option<String>,
  pub(crate) stories: Vec<DisplayStory>,
}

impl TopStories {
  pub(crate) fn failed() -> Self {
    Self {
      error: Some(LOAD_FAILED_MESSAGE.into()),
      stories: Vec::new(),
    }
  }

  pub(crate) fn loaded(stories: Vec<DisplayStory>) -> Self {
    Self {
      error: None,
      stories,
    }
  }
}
