use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  pipeline: Arc<Pipeline<Client>>,
  state: State,
}

impl App {
  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    frame.render_widget(Paragraph::new(self.header()), layout[0]);

    let pager = self.state.pager();

    let list_items: Vec<ListItem> = if pager.is_empty() {
      let (text, color) = if self.state.is_loading() {
        (LOADING_STATUS, Color::DarkGray)
      } else if let Some(error) = self.state.load_error() {
        (error, Color::Red)
      } else {
        ("Nothing to show. Press r to refresh.", Color::DarkGray)
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(text, Style::default().fg(color)),
      ]))]
    } else {
      pager
        .visible_slice()
        .iter()
        .enumerate()
        .map(|(index, story)| {
          Self::story_list_item(pager.page_offset() + index + 1, story)
        })
        .collect()
    };

    let mut list_state =
      ListState::default().with_selected(pager.selected_offset());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let status = Paragraph::new(self.state.status_line())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::LoadStories { request_id } => {
        let (pipeline, sender) = (self.pipeline.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Stories {
            request_id,
            result: pipeline.load_top_stories().await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.notify(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open link");

          self
            .state
            .notify(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn header(&self) -> Line<'static> {
    let pager = self.state.pager();

    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        "TOP STORIES",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
    ];

    if !pager.is_empty() {
      let (back, forward) = (
        if pager.has_prev() { enabled } else { disabled },
        if pager.has_next() { enabled } else { disabled },
      );

      spans.extend([
        Span::styled(
          format!("  {} stories   ", pager.len()),
          Style::default().fg(Color::DarkGray),
        ),
        Span::styled("« ‹ ", back),
        Span::raw(format!(
          "{} / {}",
          pager.current_page(),
          pager.total_pages()
        )),
        Span::styled(" › »", forward),
      ]);
    }

    Line::from(spans)
  }

  pub(crate) fn new(pipeline: Pipeline<Client>, page_size: usize) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      pipeline: Arc::new(pipeline),
      state: State::new(page_size),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.expire_notice(Instant::now());

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.run_command(Command::Refresh);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Command::from_key(key)
      };

      if self.run_command(command) {
        break;
      }
    }

    Ok(())
  }

  fn run_command(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn story_list_item(rank: usize, story: &DisplayStory) -> ListItem<'static> {
    let title = if story.title.is_empty() {
      "Untitled".to_string()
    } else {
      story.title.clone()
    };

    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("{rank:>2}. {title}"),
          Style::default().fg(Color::White),
        ),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("    "),
        Span::styled(story.detail(), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }
}
