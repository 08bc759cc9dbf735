use {super::*, std::fmt};

/// Plain-text rendering of the visible page, for non-interactive output.
pub(crate) struct PlainPage<'a>(pub(crate) &'a Pager<DisplayStory>);

impl fmt::Display for PlainPage<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let pager = self.0;

    for (index, story) in pager.visible_slice().iter().enumerate() {
      writeln!(f, "{:>2}. {}", pager.page_offset() + index + 1, story.title)?;
      writeln!(f, "    {}", story.detail())?;
      writeln!(f, "    {}", story.link())?;
    }

    write!(f, "page {} / {}", pager.current_page(), pager.total_pages())
  }
}
