use super::*;

pub trait Select {
  fn select<T: JsCast>(&self, selector: &str) -> Result<T, Error>;

  fn select_optional<T: JsCast>(&self, selector: &str) -> Result<Option<T>, Error>;
}

impl Select for Document {
  fn select<T: JsCast>(&self, selector: &str) -> Result<T, Error> {
    self
      .select_optional::<T>(selector)?
      .context(error::ElementMissing { selector })
  }

  fn select_optional<T: JsCast>(&self, selector: &str) -> Result<Option<T>, Error> {
    self
      .query_selector(selector)
      .browser("querySelector")?
      .map(|element| element.cast::<T>())
      .transpose()
  }
}
