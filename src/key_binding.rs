use super::*;

/// Keys that trigger a command in the story list. Drives both key dispatch
/// and the help overlay.
pub(crate) struct KeyBinding {
  pub(crate) codes: &'static [KeyCode],
  pub(crate) command: Command,
}

impl KeyBinding {
  pub(crate) const ALL: &[KeyBinding] = &[
    KeyBinding {
      codes: &[KeyCode::Left, KeyCode::Char('h')],
      command: Command::PreviousPage,
    },
    KeyBinding {
      codes: &[KeyCode::Right, KeyCode::Char('l')],
      command: Command::NextPage,
    },
    KeyBinding {
      codes: &[KeyCode::Home, KeyCode::Char('g')],
      command: Command::FirstPage,
    },
    KeyBinding {
      codes: &[KeyCode::End, KeyCode::Char('G')],
      command: Command::LastPage,
    },
    KeyBinding {
      codes: &[KeyCode::Up, KeyCode::Char('k')],
      command: Command::SelectPrevious,
    },
    KeyBinding {
      codes: &[KeyCode::Down, KeyCode::Char('j')],
      command: Command::SelectNext,
    },
    KeyBinding {
      codes: &[KeyCode::Enter, KeyCode::Char('o')],
      command: Command::OpenStory,
    },
    KeyBinding {
      codes: &[KeyCode::Char('c')],
      command: Command::OpenComments,
    },
    KeyBinding {
      codes: &[KeyCode::Char('a')],
      command: Command::OpenAuthor,
    },
    KeyBinding {
      codes: &[KeyCode::Char('r')],
      command: Command::Refresh,
    },
    KeyBinding {
      codes: &[KeyCode::Char('?')],
      command: Command::ShowHelp,
    },
    KeyBinding {
      codes: &[KeyCode::Char('q'), KeyCode::Esc],
      command: Command::Quit,
    },
  ];

  fn key_label(code: KeyCode) -> String {
    match code {
      KeyCode::Left => "←".into(),
      KeyCode::Right => "→".into(),
      KeyCode::Up => "↑".into(),
      KeyCode::Down => "↓".into(),
      KeyCode::Char(ch) => ch.to_string(),
      other => format!("{other:?}").to_lowercase(),
    }
  }

  pub(crate) fn label(&self) -> String {
    self
      .codes
      .iter()
      .map(|code| Self::key_label(*code))
      .collect::<Vec<_>>()
      .join(" / ")
  }

  pub(crate) fn lookup(code: KeyCode) -> Option<Command> {
    Self::ALL
      .iter()
      .find(|binding| binding.codes.contains(&code))
      .map(|binding| binding.command)
  }
}
