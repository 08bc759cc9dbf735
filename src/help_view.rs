use super::*;

/// Overlay listing every key binding, built from `KeyBinding::ALL`.
pub(crate) struct HelpView {
  lines: Vec<String>,
  visible: bool,
}

impl HelpView {
  const LABEL_WIDTH: usize = 12;

  fn area(&self, frame: Rect) -> Rect {
    let text_width = self
      .lines
      .iter()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0);

    // Borders plus one column of padding on each side.
    let width = u16::try_from(text_width + 4)
      .unwrap_or(u16::MAX)
      .min(frame.width);

    let height = u16::try_from(self.lines.len() + 2)
      .unwrap_or(u16::MAX)
      .min(frame.height);

    Rect::new(
      frame.x + (frame.width - width) / 2,
      frame.y + (frame.height - height) / 2,
      width,
      height,
    )
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = self.area(frame.area());

    let text = self
      .lines
      .iter()
      .map(|line| Line::from(format!(" {line}")))
      .collect::<Vec<_>>();

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(text)
        .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: false }),
      area,
    );
  }

  /// While the overlay is open only closing it or quitting do anything.
  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match (key.code, Command::from_key(key)) {
      (KeyCode::Esc, _) | (_, Command::ShowHelp) => Command::HideHelp,
      (_, Command::Quit) => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self) {
    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    let lines = KeyBinding::ALL
      .iter()
      .map(|binding| {
        format!(
          "{:<width$}{}",
          binding.label(),
          binding.command.description(),
          width = Self::LABEL_WIDTH
        )
      })
      .collect();

    Self {
      lines,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self) {
    self.visible = true;
  }
}
