use super::*;

/// A short-lived status line message. Once it expires the status line falls
/// back to describing the story list.
pub(crate) struct Notice {
  expires_at: Instant,
  text: String,
}

impl Notice {
  pub(crate) const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, now: Instant) -> Self {
    Self {
      expires_at: now + Self::LIFETIME,
      text,
    }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expires_after_lifetime() {
    let now = Instant::now();

    let notice = Notice::new("Opened in browser".into(), now);

    assert_eq!(notice.text(), "Opened in browser");
    assert!(!notice.is_expired_at(now));
    assert!(!notice.is_expired_at(now + Duration::from_secs(2)));
    assert!(notice.is_expired_at(now + Notice::LIFETIME));
  }
}
