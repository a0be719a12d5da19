use super::*;

/// The element notices are shown in, and the clock that hides them.
pub(crate) trait Banner: Clone + 'static {
  /// Dropping a timer cancels it.
  type Timer;

  fn display(&self, notice: &Notice) -> Result<(), Error>;

  fn hide(&self) -> Result<(), Error>;

  fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Self::Timer;
}

impl Banner for HtmlElement {
  type Timer = Timeout;

  fn display(&self, notice: &Notice) -> Result<(), Error> {
    self.set_text_content(Some(&notice.text));
    self.set_class_name(&notice.class_name());
    Ok(())
  }

  fn hide(&self) -> Result<(), Error> {
    self.class_list().add_1("hidden").browser("classList.add")
  }

  fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Timeout {
    Timeout::new(
      u32::try_from(delay.as_millis()).unwrap_or(u32::MAX),
      callback,
    )
  }
}
