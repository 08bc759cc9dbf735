use super::*;

const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";
const USER_URL: &str = "https://news.ycombinator.com/user?id=";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DisplayStory {
  pub(crate) by: String,
  pub(crate) comment_count: usize,
  pub(crate) id: StoryId,
  pub(crate) score: u64,
  pub(crate) time: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl From<RawStory> for DisplayStory {
  fn from(raw: RawStory) -> Self {
    Self::normalize(raw, &Local)
  }
}

impl DisplayStory {
  pub(crate) fn author_url(&self) -> Option<String> {
    (!self.by.is_empty()).then(|| format!("{USER_URL}{}", self.by))
  }

  pub(crate) fn comments_url(&self) -> String {
    format!("{ITEM_URL}{}", self.id)
  }

  pub(crate) fn detail(&self) -> String {
    let mut parts = Vec::with_capacity(4);

    parts.push(format_points(self.score));

    if !self.by.is_empty() {
      parts.push(format!("by {}", self.by));
    }

    parts.push(format_comments(self.comment_count));

    if !self.time.is_empty() {
      parts.push(self.time.clone());
    }

    parts.join(" | ")
  }

  pub(crate) fn link(&self) -> String {
    if self.url.is_empty() {
      self.comments_url()
    } else {
      self.url.clone()
    }
  }

  pub(crate) fn normalize<Tz: TimeZone>(raw: RawStory, zone: &Tz) -> Self {
    let time = raw
      .time
      .and_then(|time| format_date(time, zone))
      .unwrap_or_default();

    Self {
      by: raw.by.unwrap_or_default(),
      comment_count: raw.kids.as_ref().map_or(0, Vec::len),
      id: raw.id,
      score: raw.score.unwrap_or_default(),
      time,
      title: raw.title.unwrap_or_default(),
      url: raw.url.unwrap_or_default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, chrono::Utc};

  fn raw(id: StoryId) -> RawStory {
    RawStory {
      by: Some("pg".to_string()),
      deleted: None,
      id,
      kids: Some(vec![10, 11, 12]),
      score: Some(57),
      time: Some(0),
      title: Some("Y Combinator".to_string()),
      url: Some("http://ycombinator.com".to_string()),
    }
  }

  #[test]
  fn reply_count_is_length_of_kids() {
    assert_eq!(DisplayStory::normalize(raw(1), &Utc).comment_count, 3);
  }

  #[test]
  fn reply_count_defaults_to_zero_without_kids() {
    let story = DisplayStory::normalize(
      RawStory {
        kids: None,
        ..raw(1)
      },
      &Utc,
    );

    assert_eq!(story.comment_count, 0);
  }

  #[test]
  fn epoch_formats_in_local_zone() {
    let expected = format_date(0, &Local).unwrap();

    assert_eq!(DisplayStory::from(raw(1)).time, expected);
  }

  #[test]
  fn normalizes_all_fields() {
    assert_eq!(
      DisplayStory::normalize(raw(8863), &Utc),
      DisplayStory {
        by: "pg".to_string(),
        comment_count: 3,
        id: 8863,
        score: 57,
        time: "01/1/1970".to_string(),
        title: "Y Combinator".to_string(),
        url: "http://ycombinator.com".to_string(),
      }
    );
  }

  #[test]
  fn missing_fields_become_empty_defaults() {
    let story = DisplayStory::normalize(
      RawStory {
        id: 5,
        ..RawStory::default()
      },
      &Utc,
    );

    assert_eq!(
      story,
      DisplayStory {
        by: String::new(),
        comment_count: 0,
        id: 5,
        score: 0,
        time: String::new(),
        title: String::new(),
        url: String::new(),
      }
    );
  }

  #[test]
  fn link_falls_back_to_discussion_page() {
    let story = DisplayStory::normalize(
      RawStory {
        url: None,
        ..raw(42)
      },
      &Utc,
    );

    assert_eq!(story.link(), "https://news.ycombinator.com/item?id=42");
    assert_eq!(
      DisplayStory::normalize(raw(42), &Utc).link(),
      "http://ycombinator.com"
    );
  }

  #[test]
  fn author_url_requires_author() {
    assert_eq!(
      DisplayStory::normalize(raw(1), &Utc).author_url().as_deref(),
      Some("https://news.ycombinator.com/user?id=pg")
    );

    let anonymous = DisplayStory::normalize(
      RawStory {
        by: None,
        ..raw(1)
      },
      &Utc,
    );

    assert_eq!(anonymous.author_url(), None);
  }

  #[test]
  fn detail_joins_present_parts() {
    assert_eq!(
      DisplayStory::normalize(raw(1), &Utc).detail(),
      "57 points | by pg | 3 comments | 01/1/1970"
    );

    let bare = DisplayStory::normalize(
      RawStory {
        id: 1,
        ..RawStory::default()
      },
      &Utc,
    );

    assert_eq!(bare.detail(), "0 points | 0 comments");
  }
}
