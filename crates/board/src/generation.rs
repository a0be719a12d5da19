use super::*;

/// Counts loads so that only the newest one may touch the view.
#[derive(Debug, Default)]
pub(crate) struct Generation(Cell<u64>);

impl Generation {
  pub(crate) fn advance(&self) -> u64 {
    let next = self.0.get() + 1;
    self.0.set(next);
    next
  }

  pub(crate) fn is_current(&self, generation: u64) -> bool {
    self.0.get() == generation
  }
}
