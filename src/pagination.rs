use std::num::NonZeroUsize;

/// Number of cards revealed per "load more". Zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
  pub fn new(n: usize) -> Option<Self> {
    NonZeroUsize::new(n).map(Self)
  }

  pub fn get(self) -> usize {
    self.0.get()
  }
}

/// Outcome of one reveal step.
#[derive(Debug, PartialEq, Eq)]
pub struct Reveal<'a, T> {
  /// The newly revealed run, at most one page long.
  pub items: &'a [T],
  /// Revealed count after this step.
  pub shown: usize,
  /// Nothing left to reveal; the caller hides its "load more" control.
  pub exhausted: bool,
}

/// Reveal the next page of `results` after the first `shown` items.
///
/// A cursor already at or past the end yields an empty run and keeps `shown` as is.
pub fn reveal<T>(results: &[T], shown: usize, page_size: PageSize) -> Reveal<'_, T> {
  if shown >= results.len() {
    return Reveal { items: &[], shown, exhausted: true };
  }
  let end = shown.saturating_add(page_size.get()).min(results.len());
  Reveal { items: &results[shown..end], shown: end, exhausted: end >= results.len() }
}

/// Revealed-count cursor over the active result set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
  shown: usize,
}

impl Cursor {
  pub fn shown(self) -> usize {
    self.shown
  }

  /// Back to zero. Must happen on every query change.
  pub fn reset(&mut self) {
    self.shown = 0;
  }

  /// Reveal the next page and advance.
  pub fn advance<'a, T>(&mut self, results: &'a [T], page_size: PageSize) -> Reveal<'a, T> {
    let step = reveal(results, self.shown, page_size);
    self.shown = step.shown;
    step
  }

  pub fn is_exhausted(self, total: usize) -> bool {
    self.shown >= total
  }
}
