use super::*;

pub(crate) struct State {
  help: HelpView,
  load_error: Option<String>,
  loading: bool,
  next_request_id: u64,
  notice: Option<Notice>,
  page_size: usize,
  pager: Pager<DisplayStory>,
  pending_effects: Vec<Effect>,
  pending_load: Option<u64>,
}

impl State {
  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(),
      Command::HideHelp => self.help.hide(),
      Command::FirstPage => self.pager.first(),
      Command::PreviousPage => self.pager.prev(),
      Command::NextPage => self.pager.next(),
      Command::LastPage => self.pager.last(),
      Command::SelectNext => self.pager.select_next(),
      Command::SelectPrevious => self.pager.select_previous(),
      Command::OpenStory => self.open_story(),
      Command::OpenComments => self.open_comments(),
      Command::OpenAuthor => self.open_author(),
      Command::Refresh => self.refresh(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn expire_notice(&mut self, now: Instant) {
    if self
      .notice
      .as_ref()
      .is_some_and(|notice| notice.is_expired_at(now))
    {
      self.notice = None;
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories { request_id, result } => {
        if self.pending_load != Some(request_id) {
          debug!(request_id, "discarding superseded story load");
          return;
        }

        self.pending_load = None;
        self.loading = false;

        let TopStories { error, stories } = result;

        self.pager = Pager::new(stories, self.page_size);
        self.load_error = error;
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn load_error(&self) -> Option<&str> {
    self.load_error.as_deref()
  }

  pub(crate) fn new(page_size: usize) -> Self {
    Self {
      help: HelpView::new(),
      load_error: None,
      loading: false,
      next_request_id: 0,
      notice: None,
      page_size,
      pager: Pager::new(Vec::new(), page_size),
      pending_effects: Vec::new(),
      pending_load: None,
    }
  }

  pub(crate) fn notify(&mut self, text: String) {
    self.notice = Some(Notice::new(text, Instant::now()));
  }

  fn open_author(&mut self) {
    let Some(story) = self.pager.selected_item() else {
      return;
    };

    match story.author_url() {
      Some(url) => self.pending_effects.push(Effect::OpenUrl { url }),
      None => {
        self.notify("This story has no author".into());
      }
    }
  }

  fn open_comments(&mut self) {
    if let Some(story) = self.pager.selected_item() {
      self.pending_effects.push(Effect::OpenUrl {
        url: story.comments_url(),
      });
    }
  }

  fn open_story(&mut self) {
    if let Some(story) = self.pager.selected_item() {
      self.pending_effects.push(Effect::OpenUrl { url: story.link() });
    }
  }

  pub(crate) fn pager(&self) -> &Pager<DisplayStory> {
    &self.pager
  }

  fn refresh(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_load = Some(request_id);
    self.loading = true;
    self.load_error = None;

    self.pending_effects.push(Effect::LoadStories { request_id });
  }

  /// Help takes precedence, then a live notice, then whatever the list is
  /// doing.
  pub(crate) fn status_line(&self) -> String {
    if self.help.is_visible() {
      return HELP_STATUS.into();
    }

    if let Some(notice) = &self.notice {
      return notice.text().into();
    }

    if self.loading {
      return LOADING_STORIES_STATUS.into();
    }

    format!(
      "page {}/{} • {LIST_STATUS}",
      self.pager.current_page(),
      self.pager.total_pages()
    )
  }
}
