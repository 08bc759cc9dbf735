use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  FirstPage,
  HideHelp,
  LastPage,
  NextPage,
  None,
  OpenAuthor,
  OpenComments,
  OpenStory,
  PreviousPage,
  Quit,
  Refresh,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}

impl Command {
  pub(crate) fn description(self) -> &'static str {
    match self {
      Self::FirstPage => "first page",
      Self::HideHelp => "close this help",
      Self::LastPage => "last page",
      Self::NextPage => "next page",
      Self::None => "",
      Self::OpenAuthor => "open the author's profile",
      Self::OpenComments => "open the discussion page",
      Self::OpenStory => "open the story link in your browser",
      Self::PreviousPage => "previous page",
      Self::Quit => "quit",
      Self::Refresh => "reload the top stories",
      Self::SelectNext => "move selection down",
      Self::SelectPrevious => "move selection up",
      Self::ShowHelp => "toggle this help",
    }
  }

  pub(crate) fn from_key(key: KeyEvent) -> Self {
    KeyBinding::lookup(key.code).unwrap_or(Self::None)
  }
}
