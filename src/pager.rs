use super::*;

/// Fixed-size pages over an owned list, with a cursor inside the visible
/// page. The current page always lies in `1..=total_pages()`, even for an
/// empty list.
pub(crate) struct Pager<T> {
  current_page: usize,
  items: Vec<T>,
  page_size: usize,
  selected: usize,
}

impl<T> Default for Pager<T> {
  fn default() -> Self {
    Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
  }
}

impl<T> Pager<T> {
  pub(crate) fn current_page(&self) -> usize {
    self.current_page
  }

  pub(crate) fn first(&mut self) {
    self.go_to(1);
  }

  pub(crate) fn go_to(&mut self, page: usize) {
    let page = page.clamp(1, self.total_pages());

    if page != self.current_page {
      self.current_page = page;
      self.selected = 0;
    }
  }

  pub(crate) fn has_next(&self) -> bool {
    self.current_page < self.total_pages()
  }

  pub(crate) fn has_prev(&self) -> bool {
    self.current_page > 1
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn last(&mut self) {
    self.go_to(self.total_pages());
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Vec<T>, page_size: usize) -> Self {
    Self {
      current_page: 1,
      items,
      page_size: page_size.max(1),
      selected: 0,
    }
  }

  pub(crate) fn next(&mut self) {
    self.go_to(self.current_page.saturating_add(1));
  }

  /// Index into the full list of the first visible item.
  pub(crate) fn page_offset(&self) -> usize {
    (self.current_page - 1) * self.page_size
  }

  pub(crate) fn prev(&mut self) {
    self.go_to(self.current_page.saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self) {
    let last = self.visible_slice().len().saturating_sub(1);
    self.selected = self.selected.saturating_add(1).min(last);
  }

  pub(crate) fn select_previous(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self.visible_slice().get(self.selected)
  }

  pub(crate) fn selected_offset(&self) -> Option<usize> {
    (!self.visible_slice().is_empty()).then_some(self.selected)
  }

  pub(crate) fn total_pages(&self) -> usize {
    self.items.len().div_ceil(self.page_size).max(1)
  }

  pub(crate) fn visible_slice(&self) -> &[T] {
    let start = self.page_offset().min(self.items.len());
    let end = start.saturating_add(self.page_size).min(self.items.len());

    &self.items[start..end]
  }
}
